use serde::{Deserialize, Serialize};

use super::defaults;

/// Hot-topics selector configuration.
///
/// The lookback and candidate cap are cost-control heuristics, not
/// correctness requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicsConfig {
    /// Only proposals presented within this many days are candidates.
    pub lookback_days: i64,
    /// Hard cap on candidates fetched per run; beyond it the
    /// least-recently-presented are excluded.
    pub max_candidates: usize,
    /// Result count when the caller does not choose a limit.
    pub default_limit: usize,
}

impl Default for TopicsConfig {
    fn default() -> Self {
        Self {
            lookback_days: defaults::DEFAULT_LOOKBACK_DAYS,
            max_candidates: defaults::DEFAULT_MAX_CANDIDATES,
            default_limit: defaults::DEFAULT_HOT_TOPICS_LIMIT,
        }
    }
}
