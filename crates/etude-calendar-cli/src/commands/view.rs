use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::Args;

use etude_calendar_core::{
    days_for, grid_rows, visible_cards, CalendarCard, LaneAllocator, LaneAssignment, ViewMode,
};

use super::allocate::FilterArgs;

/// Width of one day cell in the text grid.
const CELL: usize = 3;

#[derive(Args)]
pub struct ViewArgs {
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

pub fn run(args: ViewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cards = super::load_cards(&args.file)?;
    let mode = super::resolve_mode(args.mode);
    let days = days_for(args.date, mode);

    let visible = visible_cards(&cards, &days, &args.filter.to_filter());
    let mut allocator = LaneAllocator::new();
    let assignments = allocator.allocate(&visible, &days);

    print!("{}", render_grid(&days, &assignments));
    println!();
    for line in legend(&visible, &assignments) {
        println!("{line}");
    }
    Ok(())
}

/// Render the lane grid as text: one header line of day numbers, then one
/// line per lane. `[===]` is a bar closed on both sides; `<` and `>` mark
/// edges continuing past the window.
fn render_grid(days: &[NaiveDate], assignments: &[LaneAssignment]) -> String {
    let mut out = String::new();

    for day in days {
        out.push_str(&format!("{:>width$}", day.day(), width = CELL));
    }
    out.push('\n');

    for lane in 0..grid_rows(assignments) {
        let mut line = vec![' '; days.len() * CELL];
        for a in assignments.iter().filter(|a| a.lane == lane) {
            for col in a.start_col..=a.end_col {
                for cell in line.iter_mut().skip(col * CELL).take(CELL) {
                    *cell = '=';
                }
            }
            line[a.start_col * CELL] = if a.open_start { '<' } else { '[' };
            line[a.end_col * CELL + CELL - 1] = if a.open_end { '>' } else { ']' };
        }
        out.push_str(line.iter().collect::<String>().trim_end());
        out.push('\n');
    }
    out
}

fn legend(cards: &[CalendarCard], assignments: &[LaneAssignment]) -> Vec<String> {
    assignments
        .iter()
        .map(|a| {
            let title = cards
                .iter()
                .find(|c| c.id == a.card_id)
                .map(|c| c.title.as_str())
                .unwrap_or("?");
            format!("lane {}: {} ({})", a.lane, title, a.card_id)
        })
        .collect()
}
