use chrono::{DateTime, Utc};

use tribuna_core::models::HighlightOverride;

/// Divisor mapping a curator priority (typically 0–10) onto [0, 1].
pub const PRIORITY_SCALE: f64 = 10.0;

/// Curator override boost.
///
/// 0.0 when no override exists or its expiry is strictly in the past;
/// otherwise `clamp(priority / 10, 0, maxBoost)`. Added to the composite
/// score outside the weighted sum.
pub fn calculate(
    curation: Option<&HighlightOverride>,
    now: DateTime<Utc>,
    max_boost: f64,
) -> f64 {
    let Some(curation) = curation else {
        return 0.0;
    };
    if !curation.is_active(now) {
        return 0.0;
    }
    (curation.priority as f64 / PRIORITY_SCALE).clamp(0.0, max_boost)
}
