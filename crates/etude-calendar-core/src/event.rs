//! Calendar card types.
//!
//! A card is a date-ranged event shown on the schedule and events calendar:
//! a course, conference, webinar, or internal training, together with the
//! attributes the calendar filters on. Dates are day-granular; time of day
//! is not modeled.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Approval status of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for CardStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "completed" => Ok(Self::Completed),
            other => Err(format!("unknown status '{other}'")),
        }
    }
}

/// Delivery format of a training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingFormat {
    Offline,
    Online,
    Mixed,
}

impl TrainingFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Online => "online",
            Self::Mixed => "mixed",
        }
    }
}

impl FromStr for TrainingFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "offline" => Ok(Self::Offline),
            "online" => Ok(Self::Online),
            "mixed" => Ok(Self::Mixed),
            other => Err(format!("unknown format '{other}'")),
        }
    }
}

/// Skill category of a training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainingCategory {
    HardSkills,
    SoftSkills,
    Management,
}

impl TrainingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HardSkills => "hard-skills",
            Self::SoftSkills => "soft-skills",
            Self::Management => "management",
        }
    }
}

impl FromStr for TrainingCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hard-skills" => Ok(Self::HardSkills),
            "soft-skills" => Ok(Self::SoftSkills),
            "management" => Ok(Self::Management),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

/// Kind of training event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingType {
    Course,
    Conference,
    Webinar,
    Training,
}

impl TrainingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Conference => "conference",
            Self::Webinar => "webinar",
            Self::Training => "training",
        }
    }
}

impl FromStr for TrainingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "course" => Ok(Self::Course),
            "conference" => Ok(Self::Conference),
            "webinar" => Ok(Self::Webinar),
            "training" => Ok(Self::Training),
            other => Err(format!("unknown training type '{other}'")),
        }
    }
}

/// A card/event shown on the calendar.
///
/// `id` is the stability key: the lane allocator remembers lanes per id
/// across passes, so ids must be unique and stable for the lifetime of the
/// logical event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarCard {
    pub id: String,
    pub title: String,
    pub status: CardStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub employee: String,
    pub format: TrainingFormat,
    pub category: TrainingCategory,
    #[serde(rename = "type")]
    pub card_type: TrainingType,
}

impl CalendarCard {
    /// Create a new card.
    ///
    /// # Panics
    /// Panics if `end_date < start_date`. Use [`try_new`](Self::try_new)
    /// for a non-panicking version.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self::try_new(id, title, start_date, end_date)
            .expect("CalendarCard::new: end_date must not precede start_date")
    }

    /// Create a new card, returning a Result.
    ///
    /// A single-day card has `start_date == end_date`; only an inverted
    /// range is rejected.
    ///
    /// # Errors
    /// Returns an error if `end_date < start_date`.
    pub fn try_new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if end_date < start_date {
            return Err(ValidationError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            status: CardStatus::Pending,
            start_date,
            end_date,
            description: None,
            employee: String::new(),
            format: TrainingFormat::Offline,
            category: TrainingCategory::HardSkills,
            card_type: TrainingType::Course,
        })
    }

    /// Duration in days, inclusive of both endpoints (a single-day card is 1).
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Closed-interval overlap with a day range.
    pub fn overlaps_range(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date >= start
    }

    /// Set status
    pub fn with_status(mut self, status: CardStatus) -> Self {
        self.status = status;
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set employee
    pub fn with_employee(mut self, employee: impl Into<String>) -> Self {
        self.employee = employee.into();
        self
    }

    /// Set delivery format
    pub fn with_format(mut self, format: TrainingFormat) -> Self {
        self.format = format;
        self
    }

    /// Set skill category
    pub fn with_category(mut self, category: TrainingCategory) -> Self {
        self.category = category;
        self
    }

    /// Set training type
    pub fn with_type(mut self, card_type: TrainingType) -> Self {
        self.card_type = card_type;
        self
    }
}
