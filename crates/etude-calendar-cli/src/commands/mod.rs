pub mod allocate;
pub mod days;
pub mod sample;
pub mod view;

use std::path::Path;

use etude_calendar_core::{CalendarCard, CalendarConfig, ViewMode};

/// Read a JSON array of cards from disk.
pub(crate) fn load_cards(path: &Path) -> Result<Vec<CalendarCard>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Explicit flag wins, otherwise the configured default view.
pub(crate) fn resolve_mode(mode: Option<ViewMode>) -> ViewMode {
    mode.unwrap_or_else(|| CalendarConfig::load_or_default().default_view)
}
