//! # Etude Calendar Core Library
//!
//! Core engine for the Etude training-platform calendar views: given
//! date-ranged cards (courses, conferences, webinars, trainings) and a
//! visible window of consecutive days, it decides which cards are shown
//! and how they stack into horizontal lanes. Rendering the result into a
//! grid is a thin layer over the numbers this crate produces.
//!
//! ## Architecture
//!
//! - **Day-Range Calculator**: reference date + view mode (week / month /
//!   half-year) to the ordered sequence of visible days
//! - **Visibility Filter**: typed attribute filters plus the
//!   window-intersection test
//! - **Lane Allocator**: greedy interval packing with a per-view lane
//!   memory, so cards keep their row across filter changes and date
//!   navigation
//! - **Geometry Mapper**: lane/column numbers to 1-based grid rectangles
//!
//! ## Key Components
//!
//! - [`LaneAllocator`]: the stateful allocator, one per calendar view
//! - [`CalendarCard`]: the event model the calendar consumes
//! - [`days_for`]: visible day-range computation
//! - [`visible_cards`]: window + attribute filtering
//! - [`CalendarConfig`]: TOML-backed view preferences

pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod geometry;
pub mod lanes;
pub mod nav;
pub mod range;
pub mod sample;

pub use config::CalendarConfig;
pub use error::{CalendarError, ConfigError, ValidationError};
pub use event::{CalendarCard, CardStatus, TrainingCategory, TrainingFormat, TrainingType};
pub use filter::{apply_filter, visible_cards, CardFilter};
pub use geometry::{grid_rects, grid_rows, CardRect};
pub use lanes::{lane_count, LaneAllocator, LaneAssignment};
pub use nav::{next_period, prev_period, visible_span};
pub use range::{days_for, window_bounds, ViewMode, HALF_YEAR_WINDOW_DAYS};
pub use sample::{sample_cards, SampleConfig};
