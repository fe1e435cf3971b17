pub mod curation;
pub mod engagement;
pub mod momentum;
pub mod recency;
pub mod theme;

use chrono::{DateTime, Utc};

/// Injected clock for scoring. Identical inputs plus an identical `now`
/// always yield identical outputs; tests pin `now` to fixed instants.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext {
    pub now: DateTime<Utc>,
}

impl Default for ScoringContext {
    fn default() -> Self {
        Self { now: Utc::now() }
    }
}

impl ScoringContext {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}
