use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use etude_calendar_core::{
    days_for, lane_count, visible_cards, CardFilter, CardStatus, LaneAllocator, LaneAssignment,
    TrainingCategory, TrainingFormat, TrainingType, ViewMode,
};

/// Attribute-filter flags shared by `allocate` and `view`.
#[derive(Args)]
pub struct FilterArgs {
    /// Filter by status (pending, approved, rejected, completed)
    #[arg(long)]
    pub status: Option<CardStatus>,
    /// Filter by format (offline, online, mixed)
    #[arg(long)]
    pub format: Option<TrainingFormat>,
    /// Filter by category (hard-skills, soft-skills, management)
    #[arg(long)]
    pub category: Option<TrainingCategory>,
    /// Filter by training type (course, conference, webinar, training)
    #[arg(long = "type", value_name = "TYPE")]
    pub card_type: Option<TrainingType>,
    /// Filter by employee (exact match)
    #[arg(long)]
    pub employee: Option<String>,
    /// Case-insensitive search in title and description
    #[arg(long)]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> CardFilter {
        CardFilter {
            status: self.status,
            format: self.format,
            category: self.category,
            card_type: self.card_type,
            employee: self.employee.clone(),
            search: self.search.clone(),
            on_date: None,
        }
    }
}

#[derive(Args)]
pub struct AllocateArgs {
    /// JSON file with an array of cards
    pub file: PathBuf,
    /// Reference date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// View mode: week, month, or half-year (default from config)
    #[arg(long)]
    pub mode: Option<ViewMode>,
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Serialize)]
struct AllocateOutput {
    days: usize,
    lanes: usize,
    assignments: Vec<LaneAssignment>,
}

pub fn run(args: AllocateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cards = super::load_cards(&args.file)?;
    let mode = super::resolve_mode(args.mode);
    let days = days_for(args.date, mode);

    let visible = visible_cards(&cards, &days, &args.filter.to_filter());
    let mut allocator = LaneAllocator::new();
    let assignments = allocator.allocate(&visible, &days);

    let output = AllocateOutput {
        days: days.len(),
        lanes: lane_count(&assignments),
        assignments,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
