use clap::Parser;
use std::error::Error;
use voltair::models::{AirframeConfig, MissionProfile};
use voltair::physics;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Electric aircraft energy calculator (cruise only)"
)]
struct Cli {
    /// Aircraft mass in kg
    #[arg(long, default_value_t = 650.0)]
    mass: f64,

    /// Wing area in m^2
    #[arg(long, default_value_t = 12.0)]
    wing_area: f64,

    /// Zero-lift drag coefficient
    #[arg(long, default_value_t = 0.025)]
    cd0: f64,

    /// Induced drag factor
    #[arg(long, default_value_t = 0.045)]
    k: f64,

    /// Propulsive efficiency (0-1]
    #[arg(long, default_value_t = 0.85)]
    eta: f64,

    /// Cruise speed in m/s
    #[arg(long, default_value_t = 60.0)]
    speed: f64,

    /// Distance in miles
    #[arg(long, default_value_t = 100.0)]
    distance: f64,

    /// Cruise altitude in feet
    #[arg(long, default_value_t = 0.0)]
    altitude: f64,

    /// Battery pack energy density in Wh/kg
    #[arg(long, default_value_t = 250.0)]
    battery_density: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let airframe = AirframeConfig {
        mass_kg: cli.mass,
        wing_area_m2: cli.wing_area,
        cd0: cli.cd0,
        k: cli.k,
        propulsive_efficiency: cli.eta,
    };
    let mission = MissionProfile {
        cruise_speed_mps: cli.speed,
        distance_miles: cli.distance,
        altitude_ft: cli.altitude,
        battery_wh_per_kg: cli.battery_density,
    };

    airframe.validate()?;
    mission.validate()?;

    let results = physics::evaluate(&airframe, &mission);

    println!();
    println!("Electric Aircraft Energy Calculator (Cruise Only) - Scenario");
    println!("-----------------------------------------------------------");
    println!(
        "Mass: {:.1} kg | Wing area: {:.2} m^2",
        airframe.mass_kg, airframe.wing_area_m2
    );
    println!(
        "Cruise speed: {:.1} m/s | Distance: {:.1} miles",
        mission.cruise_speed_mps, mission.distance_miles
    );
    println!(
        "Altitude: {:.0} ft | Battery density: {:.0} Wh/kg",
        mission.altitude_ft, mission.battery_wh_per_kg
    );
    println!();
    println!("Air density: {:.3} kg/m^3", results.air_density_kg_m3);
    println!("CL required: {:.3}", results.lift_coefficient);
    println!("CD estimated: {:.4}", results.drag_coefficient);
    println!("Drag: {:.1} N", results.drag_n);
    println!("Power required: {:.2} kW", results.power_w / 1000.0);
    println!("Flight time: {:.1} minutes", results.time_s / 60.0);
    println!("Energy required: {:.2} kWh", results.energy_kwh);
    println!("Estimated battery mass: {:.1} kg", results.battery_mass_kg);
    println!();

    Ok(())
}
