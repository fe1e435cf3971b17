use serde::{Deserialize, Serialize};

/// Per-proposal engagement aggregates, computed by the collaborator at
/// query time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementCounts {
    /// Number of citizen comments.
    pub comments: u64,
    /// Number of recorded for/against/neutral stances.
    pub stances: u64,
}
