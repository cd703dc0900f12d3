use std::{error::Error, fmt};

/// Rejection raised by eager input validation, naming the offending
/// field and the constraint it violates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterError {
    NotFinite { field: &'static str, value: f64 },
    NonPositive { field: &'static str, value: f64 },
    Negative { field: &'static str, value: f64 },
    AboveUnity { field: &'static str, value: f64 },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::NotFinite { field, value } => {
                write!(f, "{} must be a finite number, got {}", field, value)
            }
            ParameterError::NonPositive { field, value } => {
                write!(f, "{} must be > 0, got {}", field, value)
            }
            ParameterError::Negative { field, value } => {
                write!(f, "{} must be >= 0, got {}", field, value)
            }
            ParameterError::AboveUnity { field, value } => {
                write!(f, "{} must be <= 1, got {}", field, value)
            }
        }
    }
}

impl Error for ParameterError {}

impl ParameterError {
    /// Field name the constraint applies to.
    pub fn field(&self) -> &'static str {
        match self {
            ParameterError::NotFinite { field, .. }
            | ParameterError::NonPositive { field, .. }
            | ParameterError::Negative { field, .. }
            | ParameterError::AboveUnity { field, .. } => field,
        }
    }
}

// Shared checks for the record validators
pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NotFinite { field, value })
    }
}

pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<(), ParameterError> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NonPositive { field, value })
    }
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<(), ParameterError> {
    check_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ParameterError::Negative { field, value })
    }
}
