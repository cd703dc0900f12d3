use clap::Parser;
use plotters::prelude::*;
use std::error::Error;
use std::fs;
use std::path::Path;
use voltair::analysis::{self, SweepPoint};
use voltair::config::SpeedSweep;
use voltair::models::{AirframeConfig, MissionProfile};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Trade study: energy and power vs cruise speed"
)]
struct Cli {
    /// Min cruise speed (m/s)
    #[arg(long, default_value_t = 30.0)]
    vmin: f64,

    /// Max cruise speed (m/s)
    #[arg(long, default_value_t = 90.0)]
    vmax: f64,

    /// Speed step (m/s)
    #[arg(long, default_value_t = 2.0)]
    step: f64,

    /// Distance (miles)
    #[arg(long, default_value_t = 100.0)]
    distance: f64,

    /// Altitude (ft)
    #[arg(long, default_value_t = 0.0)]
    altitude: f64,

    /// Output plot path
    #[arg(long, default_value = "outputs/energy_vs_speed.png")]
    out: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let sweep = SpeedSweep {
        start_mps: cli.vmin,
        end_mps: cli.vmax,
        step_mps: cli.step,
    };
    sweep.validate()?;
    MissionProfile {
        cruise_speed_mps: cli.vmin,
        distance_miles: cli.distance,
        altitude_ft: cli.altitude,
        battery_wh_per_kg: 250.0,
    }
    .validate()?;

    let airframe = AirframeConfig::default();
    let points = analysis::sweep_cruise_speed(&airframe, &sweep, cli.distance, cli.altitude, 250.0);
    let best = analysis::min_energy_point(&points)
        .ok_or("no finite samples in the requested speed range")?;

    if let Some(parent) = Path::new(&cli.out).parent() {
        fs::create_dir_all(parent)?;
    }
    draw_energy_chart(&cli, &points)?;

    println!("Saved plot -> {}", cli.out);
    println!(
        "Speed range: {}-{} m/s | step {} m/s",
        cli.vmin, cli.vmax, cli.step
    );
    println!(
        "Example: min energy = {:.2} kWh at {:.1} m/s",
        best.energy_kwh, best.speed_mps
    );

    Ok(())
}

fn draw_energy_chart(cli: &Cli, points: &[SweepPoint]) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(&cli.out, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let energy_min = points.iter().map(|p| p.energy_kwh).fold(f64::INFINITY, f64::min);
    let energy_max = points
        .iter()
        .map(|p| p.energy_kwh)
        .fold(f64::NEG_INFINITY, f64::max);
    let pad = 0.05 * (energy_max - energy_min).max(1e-9);

    let caption = format!(
        "Energy vs Speed (Distance={} mi, Altitude={} ft)",
        cli.distance, cli.altitude
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            cli.vmin..cli.vmax,
            (energy_min - pad)..(energy_max + pad),
        )?;

    chart
        .configure_mesh()
        .x_desc("Cruise Speed (m/s)")
        .y_desc("Energy for Mission (kWh)")
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().map(|p| (p.speed_mps, p.energy_kwh)),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}
