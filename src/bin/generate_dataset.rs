use clap::Parser;
use csv::Writer;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use std::error::Error;
use std::fs::File;
use voltair::analysis;
use voltair::config::SamplingRanges;
use voltair::models::AirframeConfig;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate a labelled cruise-energy dataset"
)]
struct Cli {
    /// Number of rows to generate
    #[arg(long, default_value_t = 1000)]
    samples: usize,

    /// Output CSV path
    #[arg(long, default_value = "dataset.csv")]
    out: String,

    /// RNG seed for reproducible datasets
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let ranges = SamplingRanges::default();
    let baseline = AirframeConfig::default();

    let samples = match cli.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            analysis::sample_missions(&mut rng, &ranges, &baseline, cli.samples)
        }
        None => analysis::sample_missions(&mut thread_rng(), &ranges, &baseline, cli.samples),
    };

    let file = File::create(&cli.out)?;
    let mut writer = Writer::from_writer(file);
    for sample in &samples {
        writer.serialize(sample)?;
    }
    writer.flush()?;

    println!("Dataset generated: {} rows -> {}", samples.len(), cli.out);

    Ok(())
}
