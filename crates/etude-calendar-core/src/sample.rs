//! Deterministic sample-card generation for demos and tests.
//!
//! Produces a plausible spread of training cards around a window start
//! date. With a fixed seed the output is reproducible, which the CLI demo
//! commands and fixture-hungry tests both rely on.

use chrono::{Duration, NaiveDate};
use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::event::{CalendarCard, CardStatus, TrainingCategory, TrainingFormat, TrainingType};

const TITLES: &[&str] = &[
    "Rust for backend engineers",
    "Negotiation basics",
    "Kubernetes in production",
    "Public speaking workshop",
    "SQL performance tuning",
    "Team leadership intensive",
    "Incident management drill",
    "Technical writing",
];

const EMPLOYEES: &[&str] = &[
    "Ivanov I.I.",
    "Petrova A.S.",
    "Sidorov M.K.",
    "Fedorova E.V.",
];

const STATUSES: &[CardStatus] = &[
    CardStatus::Pending,
    CardStatus::Approved,
    CardStatus::Rejected,
    CardStatus::Completed,
];

const FORMATS: &[TrainingFormat] = &[
    TrainingFormat::Offline,
    TrainingFormat::Online,
    TrainingFormat::Mixed,
];

const CATEGORIES: &[TrainingCategory] = &[
    TrainingCategory::HardSkills,
    TrainingCategory::SoftSkills,
    TrainingCategory::Management,
];

const TYPES: &[TrainingType] = &[
    TrainingType::Course,
    TrainingType::Conference,
    TrainingType::Webinar,
    TrainingType::Training,
];

/// Configuration for sample-card generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Number of cards to generate
    pub count: usize,
    /// First day cards are spread around
    pub window_start: NaiveDate,
    /// Span (in days) card start dates are drawn from; starts may fall a
    /// few days before `window_start` to exercise open-start bars
    pub window_days: i64,
    /// Maximum card duration in days (inclusive endpoints)
    pub max_duration_days: i64,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl SampleConfig {
    pub fn new(window_start: NaiveDate) -> Self {
        Self {
            count: 12,
            window_start,
            window_days: 30,
            max_duration_days: 7,
            seed: None,
        }
    }

    /// Set card count
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Generate sample cards.
pub fn sample_cards(config: &SampleConfig) -> Vec<CalendarCard> {
    let mut rng = match config.seed {
        Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
        None => Mcg128Xsl64::from_entropy(),
    };

    (0..config.count)
        .map(|_| {
            // Allow a short lead-in before the window so some bars render
            // open-started.
            let start_offset = rng.gen_range(-4..config.window_days.max(1));
            let duration = rng.gen_range(0..=config.max_duration_days.max(0));
            let start = config.window_start + Duration::days(start_offset);
            let end = start + Duration::days(duration);

            CalendarCard::new(uuid::Uuid::new_v4().to_string(), pick(&mut rng, TITLES), start, end)
                .with_status(*pick_item(&mut rng, STATUSES))
                .with_employee(pick(&mut rng, EMPLOYEES))
                .with_format(*pick_item(&mut rng, FORMATS))
                .with_category(*pick_item(&mut rng, CATEGORIES))
                .with_type(*pick_item(&mut rng, TYPES))
        })
        .collect()
}

fn pick(rng: &mut Mcg128Xsl64, values: &[&str]) -> String {
    values[rng.gen_range(0..values.len())].to_string()
}

fn pick_item<'a, T>(rng: &mut Mcg128Xsl64, values: &'a [T]) -> &'a T {
    &values[rng.gen_range(0..values.len())]
}
