//! Grid geometry for rendered cards.
//!
//! Converts lane assignments into the 1-based row/column placement a grid
//! renderer consumes (CSS grid lines, terminal cells, anything). No overlap
//! logic lives here; the lane and column numbers are taken as given.

use serde::{Deserialize, Serialize};

use crate::lanes::{lane_count, LaneAssignment};

/// Rectangle description for one card in the rendered grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRect {
    pub card_id: String,
    /// 1-based grid row.
    pub row: usize,
    /// 1-based first grid column.
    pub column_start: usize,
    /// Number of columns spanned (at least 1).
    pub column_span: usize,
    /// The card's range continues left of the window; render a flat edge.
    pub open_start: bool,
    /// The card's range continues right of the window.
    pub open_end: bool,
}

impl CardRect {
    pub fn from_assignment(assignment: &LaneAssignment) -> Self {
        Self {
            card_id: assignment.card_id.clone(),
            row: assignment.lane + 1,
            column_start: assignment.start_col + 1,
            column_span: assignment.end_col - assignment.start_col + 1,
            open_start: assignment.open_start,
            open_end: assignment.open_end,
        }
    }
}

/// Map a whole assignment set to grid rectangles.
pub fn grid_rects(assignments: &[LaneAssignment]) -> Vec<CardRect> {
    assignments.iter().map(CardRect::from_assignment).collect()
}

/// Number of grid rows a renderer needs, never less than one.
pub fn grid_rows(assignments: &[LaneAssignment]) -> usize {
    lane_count(assignments).max(1)
}
