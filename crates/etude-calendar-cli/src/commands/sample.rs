use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use etude_calendar_core::{sample_cards, SampleConfig};

#[derive(Args)]
pub struct SampleArgs {
    /// First day cards are spread around (YYYY-MM-DD)
    pub start: NaiveDate,
    /// Number of cards to generate
    #[arg(long, default_value_t = 12)]
    pub count: usize,
    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: SampleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = SampleConfig::new(args.start).with_count(args.count);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let cards = sample_cards(&config);
    let json = serde_json::to_string_pretty(&cards)?;

    match args.out {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!("wrote {} cards to {}", cards.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
