//! Visible day-range calculation.
//!
//! Computes the ordered sequence of calendar days a view renders:
//! - week: Monday through Sunday of the reference date's week
//! - month: every day of the reference date's month
//! - half-year: a fixed 30-day scroll window starting at the reference date
//!
//! The result is always contiguous: strictly increasing by one calendar day,
//! no gaps, no duplicates.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of days rendered by the half-year scroll view.
pub const HALF_YEAR_WINDOW_DAYS: usize = 30;

/// Calendar view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    Week,
    Month,
    HalfYear,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::HalfYear => "half-year",
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::Month
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "half-year" => Ok(Self::HalfYear),
            other => Err(format!(
                "unknown view mode '{other}' (expected week, month, or half-year)"
            )),
        }
    }
}

/// Compute the visible day range for a reference date and view mode.
///
/// Any date inside the desired window is a valid reference. Total for all
/// valid dates, leap years included.
pub fn days_for(reference: NaiveDate, mode: ViewMode) -> Vec<NaiveDate> {
    let start = window_start(reference, mode);
    let len = window_len(reference, mode);
    (0..len as i64).map(|i| start + Duration::days(i)).collect()
}

/// First and last visible day for a reference date and view mode.
pub fn window_bounds(reference: NaiveDate, mode: ViewMode) -> (NaiveDate, NaiveDate) {
    let start = window_start(reference, mode);
    let end = start + Duration::days(window_len(reference, mode) as i64 - 1);
    (start, end)
}

fn window_start(reference: NaiveDate, mode: ViewMode) -> NaiveDate {
    match mode {
        // Monday of the reference's week.
        ViewMode::Week => {
            reference - Duration::days(reference.weekday().num_days_from_monday() as i64)
        }
        // First of the reference's month.
        ViewMode::Month => reference - Duration::days(reference.day() as i64 - 1),
        ViewMode::HalfYear => reference,
    }
}

fn window_len(reference: NaiveDate, mode: ViewMode) -> usize {
    match mode {
        ViewMode::Week => 7,
        ViewMode::Month => days_in_month(reference.year(), reference.month()) as usize,
        ViewMode::HalfYear => HALF_YEAR_WINDOW_DAYS,
    }
}

/// Day count per month, standard Gregorian rule.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
