pub mod aero;
pub mod atmosphere;
pub mod cruise;
pub mod energy;

pub use cruise::evaluate;
