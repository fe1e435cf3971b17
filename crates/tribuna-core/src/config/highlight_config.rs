use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights of the four organic factors. They sum to 1.0 by default; the
/// curator override boost is added outside this convex combination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightWeights {
    pub recency: f64,
    pub engagement: f64,
    pub momentum: f64,
    pub theme: f64,
}

impl Default for HighlightWeights {
    fn default() -> Self {
        Self {
            recency: defaults::DEFAULT_RECENCY_WEIGHT,
            engagement: defaults::DEFAULT_ENGAGEMENT_WEIGHT,
            momentum: defaults::DEFAULT_MOMENTUM_WEIGHT,
            theme: defaults::DEFAULT_THEME_WEIGHT,
        }
    }
}

/// Highlight score engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Days over which recency decays linearly to zero.
    pub recency_window_days: i64,
    /// Saturation cap anchoring the engagement log curve.
    pub engagement_cap: f64,
    pub weights: HighlightWeights,
    /// Momentum assigned when no interaction window exists.
    pub neutral_momentum: f64,
    /// Momentum floor for cold-start activity (prior week silent).
    pub cold_start_floor: f64,
    /// Upper bound on the curator override boost.
    pub max_override_boost: f64,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            recency_window_days: defaults::DEFAULT_RECENCY_WINDOW_DAYS,
            engagement_cap: defaults::DEFAULT_ENGAGEMENT_CAP,
            weights: HighlightWeights::default(),
            neutral_momentum: defaults::DEFAULT_NEUTRAL_MOMENTUM,
            cold_start_floor: defaults::DEFAULT_COLD_START_FLOOR,
            max_override_boost: defaults::DEFAULT_MAX_OVERRIDE_BOOST,
        }
    }
}
