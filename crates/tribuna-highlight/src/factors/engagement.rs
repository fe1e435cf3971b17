use tribuna_core::models::{EngagementCounts, InteractionWindow};

/// Relative weight of each signal in the raw engagement aggregate.
pub const COMMENT_WEIGHT: f64 = 0.4;
pub const STANCE_WEIGHT: f64 = 0.3;
pub const VIEW_WEIGHT: f64 = 0.05;
pub const FAVORITE_WEIGHT: f64 = 0.2;
pub const SHARE_WEIGHT: f64 = 0.25;

/// Engagement factor: weighted raw aggregate compressed with a log curve.
///
/// Formula: `log10(1 + 9 × aggregate / cap)`, clamped to [0.0, 1.0].
/// An aggregate at `cap` maps to exactly 1.0; heavier engagement saturates
/// there instead of growing unbounded, so one viral proposal cannot
/// permanently dominate every comparison.
pub fn calculate(
    engagement: &EngagementCounts,
    window: Option<&InteractionWindow>,
    cap: f64,
) -> f64 {
    let interaction = window
        .map(|w| {
            w.views_last7 as f64 * VIEW_WEIGHT
                + w.favorites_last7 as f64 * FAVORITE_WEIGHT
                + w.shares_last7 as f64 * SHARE_WEIGHT
        })
        .unwrap_or(0.0);

    let aggregate = engagement.comments as f64 * COMMENT_WEIGHT
        + engagement.stances as f64 * STANCE_WEIGHT
        + interaction;

    (1.0 + 9.0 * aggregate / cap).log10().clamp(0.0, 1.0)
}
