use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rolling week-over-week interaction counters for one proposal.
///
/// Absence of a record means zero activity, which the scoring engine
/// treats differently from a present-but-all-zero row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionWindow {
    pub views_last7: u64,
    pub views_prev7: u64,
    pub favorites_last7: u64,
    pub favorites_prev7: u64,
    pub shares_last7: u64,
    pub shares_prev7: u64,
}

impl InteractionWindow {
    /// Total interactions over the last 7 days.
    pub fn current_week_total(&self) -> u64 {
        self.views_last7 + self.favorites_last7 + self.shares_last7
    }

    /// Total interactions over the 7 days before that.
    pub fn previous_week_total(&self) -> u64 {
        self.views_prev7 + self.favorites_prev7 + self.shares_prev7
    }
}

/// Manual curator boost for a proposal's ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightOverride {
    /// Curator-assigned priority, typically 0–10.
    pub priority: i32,
    /// Optional expiry. An expired override behaves as if absent.
    pub expires_at: Option<DateTime<Utc>>,
}

impl HighlightOverride {
    /// Whether the override still applies at `now`. An override with an
    /// expiry strictly in the past is inactive.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at >= now,
            None => true,
        }
    }
}

/// Batch-lookup value for one proposal id: its interaction window (if any
/// activity was recorded) and its curator override (at most one).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InteractionContext {
    pub window: Option<InteractionWindow>,
    pub curation: Option<HighlightOverride>,
}
