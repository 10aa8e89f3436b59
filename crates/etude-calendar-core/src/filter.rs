//! Card visibility filtering.
//!
//! Two concerns live here:
//! - the attribute filter a calendar page exposes (status, format, category,
//!   type, employee, free-text search, exact start date), and
//! - the window test deciding which cards intersect the visible day range.
//!
//! Filter fields are an explicit typed set rather than a string-keyed map:
//! every supported field has its own comparator. A field left as `None`
//! (or an empty string for the text fields) is inactive.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::event::{CalendarCard, CardStatus, TrainingCategory, TrainingFormat, TrainingType};

/// Attribute filter for calendar cards.
///
/// All fields are optional and combined with AND: a card must match every
/// active field to pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardFilter {
    #[serde(default)]
    pub status: Option<CardStatus>,
    #[serde(default)]
    pub format: Option<TrainingFormat>,
    #[serde(default)]
    pub category: Option<TrainingCategory>,
    #[serde(default)]
    pub card_type: Option<TrainingType>,
    /// Exact match on the employee the card belongs to.
    #[serde(default)]
    pub employee: Option<String>,
    /// Case-insensitive substring match against title and description.
    #[serde(default)]
    pub search: Option<String>,
    /// Cards starting on exactly this day.
    #[serde(default)]
    pub on_date: Option<NaiveDate>,
}

impl CardFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is active. Empty strings count as inactive.
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.format.is_none()
            && self.category.is_none()
            && self.card_type.is_none()
            && self.employee.as_deref().map_or(true, str::is_empty)
            && self.search.as_deref().map_or(true, str::is_empty)
            && self.on_date.is_none()
    }

    /// Check a single card against every active field.
    pub fn matches(&self, card: &CalendarCard) -> bool {
        if let Some(status) = self.status {
            if card.status != status {
                return false;
            }
        }
        if let Some(format) = self.format {
            if card.format != format {
                return false;
            }
        }
        if let Some(category) = self.category {
            if card.category != category {
                return false;
            }
        }
        if let Some(card_type) = self.card_type {
            if card.card_type != card_type {
                return false;
            }
        }
        if let Some(employee) = self.employee.as_deref() {
            if !employee.is_empty() && card.employee != employee {
                return false;
            }
        }
        if let Some(search) = self.search.as_deref() {
            if !search.is_empty() && !text_matches(card, search) {
                return false;
            }
        }
        if let Some(on_date) = self.on_date {
            if card.start_date != on_date {
                return false;
            }
        }
        true
    }

    /// Set status filter
    pub fn with_status(mut self, status: CardStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set format filter
    pub fn with_format(mut self, format: TrainingFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set category filter
    pub fn with_category(mut self, category: TrainingCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Set type filter
    pub fn with_type(mut self, card_type: TrainingType) -> Self {
        self.card_type = Some(card_type);
        self
    }

    /// Set employee filter
    pub fn with_employee(mut self, employee: impl Into<String>) -> Self {
        self.employee = Some(employee.into());
        self
    }

    /// Set free-text search
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set exact start date filter
    pub fn with_on_date(mut self, on_date: NaiveDate) -> Self {
        self.on_date = Some(on_date);
        self
    }
}

fn text_matches(card: &CalendarCard, search: &str) -> bool {
    let needle = search.to_lowercase();
    if card.title.to_lowercase().contains(&needle) {
        return true;
    }
    card.description
        .as_deref()
        .map_or(false, |d| d.to_lowercase().contains(&needle))
}

/// Apply an attribute filter to a card list.
pub fn apply_filter(cards: &[CalendarCard], filter: &CardFilter) -> Vec<CalendarCard> {
    if filter.is_empty() {
        return cards.to_vec();
    }
    cards.iter().filter(|c| filter.matches(c)).cloned().collect()
}

/// Cards that intersect the visible day range and match the filter.
///
/// The window test is a closed-interval overlap: a card is visible iff
/// `card.start_date <= last visible day && card.end_date >= first visible
/// day`. An empty day range yields an empty result.
pub fn visible_cards(
    cards: &[CalendarCard],
    days: &[NaiveDate],
    filter: &CardFilter,
) -> Vec<CalendarCard> {
    let (window_start, window_end) = match (days.first(), days.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Vec::new(),
    };

    cards
        .iter()
        .filter(|c| c.overlaps_range(window_start, window_end))
        .filter(|c| filter.is_empty() || filter.matches(c))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{days_for, ViewMode};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn make_card(id: &str, start: NaiveDate, end: NaiveDate) -> CalendarCard {
        CalendarCard::new(id, format!("Card {id}"), start, end)
    }

    #[test]
    fn empty_filter_passes_everything() {
        let cards = vec![
            make_card("a", d(2025, 3, 10), d(2025, 3, 11)),
            make_card("b", d(2025, 3, 12), d(2025, 3, 14)),
        ];
        let filter = CardFilter::new();
        assert!(filter.is_empty());
        assert_eq!(apply_filter(&cards, &filter).len(), 2);
    }

    #[test]
    fn empty_string_fields_are_inactive() {
        let filter = CardFilter::new().with_employee("").with_search("");
        assert!(filter.is_empty());
    }

    #[test]
    fn status_filter_is_exact() {
        let cards = vec![
            make_card("a", d(2025, 3, 10), d(2025, 3, 11)).with_status(CardStatus::Approved),
            make_card("b", d(2025, 3, 10), d(2025, 3, 11)).with_status(CardStatus::Rejected),
        ];
        let filter = CardFilter::new().with_status(CardStatus::Approved);
        let out = apply_filter(&cards, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "a");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let cards = vec![
            make_card("a", d(2025, 3, 10), d(2025, 3, 11)),
            CalendarCard::new("b", "Advanced Rust", d(2025, 3, 10), d(2025, 3, 11))
                .with_description("ownership and borrowing"),
        ];
        assert_eq!(
            apply_filter(&cards, &CardFilter::new().with_search("RUST")).len(),
            1
        );
        assert_eq!(
            apply_filter(&cards, &CardFilter::new().with_search("BORROW")).len(),
            1
        );
        assert_eq!(
            apply_filter(&cards, &CardFilter::new().with_search("python")).len(),
            0
        );
    }

    #[test]
    fn filters_combine_with_and() {
        let cards = vec![
            make_card("a", d(2025, 3, 10), d(2025, 3, 11))
                .with_status(CardStatus::Approved)
                .with_format(TrainingFormat::Online),
            make_card("b", d(2025, 3, 10), d(2025, 3, 11))
                .with_status(CardStatus::Approved)
                .with_format(TrainingFormat::Offline),
        ];
        let filter = CardFilter::new()
            .with_status(CardStatus::Approved)
            .with_format(TrainingFormat::Online);
        let out = apply_filter(&cards, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "a");
    }

    #[test]
    fn on_date_matches_start_day_only() {
        let cards = vec![make_card("a", d(2025, 3, 10), d(2025, 3, 14))];
        assert_eq!(
            apply_filter(&cards, &CardFilter::new().with_on_date(d(2025, 3, 10))).len(),
            1
        );
        assert_eq!(
            apply_filter(&cards, &CardFilter::new().with_on_date(d(2025, 3, 12))).len(),
            0
        );
    }

    #[test]
    fn window_overlap_is_inclusive() {
        let days = days_for(d(2025, 3, 12), ViewMode::Week); // Mar 10..=16
        let cards = vec![
            make_card("before", d(2025, 3, 1), d(2025, 3, 9)),
            make_card("touch-start", d(2025, 3, 1), d(2025, 3, 10)),
            make_card("inside", d(2025, 3, 11), d(2025, 3, 12)),
            make_card("touch-end", d(2025, 3, 16), d(2025, 3, 20)),
            make_card("after", d(2025, 3, 17), d(2025, 3, 20)),
            make_card("spanning", d(2025, 3, 1), d(2025, 3, 30)),
        ];
        let visible = visible_cards(&cards, &days, &CardFilter::new());
        let ids: Vec<_> = visible.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["touch-start", "inside", "touch-end", "spanning"]);
    }

    #[test]
    fn empty_day_range_yields_nothing() {
        let cards = vec![make_card("a", d(2025, 3, 10), d(2025, 3, 11))];
        assert!(visible_cards(&cards, &[], &CardFilter::new()).is_empty());
    }
}
