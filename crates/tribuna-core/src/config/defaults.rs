//! Default heuristic values for the highlight core.
//!
//! These are the exact constants the scoring behavior is defined against.
//! They are exposed as configuration, but changing them changes ranking
//! behavior.

/// Recency decays linearly to zero over this many days.
pub const DEFAULT_RECENCY_WINDOW_DAYS: i64 = 30;

/// Heuristic saturation cap anchoring the engagement log curve.
pub const DEFAULT_ENGAGEMENT_CAP: f64 = 50.0;

/// Weight of the recency factor in the composite score.
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.4;
/// Weight of the engagement factor in the composite score.
pub const DEFAULT_ENGAGEMENT_WEIGHT: f64 = 0.3;
/// Weight of the momentum factor in the composite score.
pub const DEFAULT_MOMENTUM_WEIGHT: f64 = 0.2;
/// Weight of the theme factor in the composite score.
pub const DEFAULT_THEME_WEIGHT: f64 = 0.1;

/// Momentum assigned when no interaction window exists at all.
pub const DEFAULT_NEUTRAL_MOMENTUM: f64 = 0.25;

/// Momentum floor for a proposal whose prior week was silent but whose
/// current week has activity.
pub const DEFAULT_COLD_START_FLOOR: f64 = 0.4;

/// Maximum boost a curator override can contribute.
pub const DEFAULT_MAX_OVERRIDE_BOOST: f64 = 0.5;

/// Candidate lookback window for the hot-topics selector.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 45;

/// Hard cap on candidates fetched per selector run.
pub const DEFAULT_MAX_CANDIDATES: usize = 80;

/// Number of hot topics returned when the caller does not choose a limit.
pub const DEFAULT_HOT_TOPICS_LIMIT: usize = 5;
