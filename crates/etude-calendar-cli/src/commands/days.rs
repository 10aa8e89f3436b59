use chrono::NaiveDate;
use clap::Args;

use etude_calendar_core::{days_for, ViewMode};

#[derive(Args)]
pub struct DaysArgs {
    /// Reference date (YYYY-MM-DD), any day inside the desired window
    pub date: NaiveDate,
    /// View mode: week, month, or half-year (default from config)
    #[arg(long)]
    pub mode: Option<ViewMode>,
    /// Print as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: DaysArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mode = super::resolve_mode(args.mode);
    let days = days_for(args.date, mode);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&days)?);
    } else {
        for day in days {
            println!("{day}");
        }
    }
    Ok(())
}
