//! Calendar period navigation.
//!
//! Pure date arithmetic behind the previous/next period buttons and the
//! header title: month view steps one month, week view seven days, and the
//! half-year view six months. The library never reads the clock; "today"
//! is whatever date the caller passes in.

use chrono::{Duration, Months, NaiveDate};

use crate::range::{window_bounds, ViewMode};

/// The reference date one period after `reference`.
///
/// Month stepping clamps the day of month, so stepping forward from
/// Jan 31 lands on Feb 28 (or 29), not Mar 2/3.
pub fn next_period(reference: NaiveDate, mode: ViewMode) -> NaiveDate {
    match mode {
        ViewMode::Week => reference + Duration::days(7),
        ViewMode::Month => shift_months(reference, 1),
        ViewMode::HalfYear => shift_months(reference, 6),
    }
}

/// The reference date one period before `reference`.
pub fn prev_period(reference: NaiveDate, mode: ViewMode) -> NaiveDate {
    match mode {
        ViewMode::Week => reference - Duration::days(7),
        ViewMode::Month => shift_months(reference, -1),
        ViewMode::HalfYear => shift_months(reference, -6),
    }
}

/// First and last visible day for header rendering.
pub fn visible_span(reference: NaiveDate, mode: ViewMode) -> (NaiveDate, NaiveDate) {
    window_bounds(reference, mode)
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}
