use chrono::{DateTime, Utc};

use tribuna_core::config::HighlightConfig;
use tribuna_core::models::{
    EngagementCounts, HighlightComponents, HighlightComputation, HighlightLabel,
    HighlightOverride, InteractionWindow, Proposal,
};

use crate::factors::{self, ScoringContext};

/// Override boost at or above which a proposal is labeled as curated.
pub const CURATION_LABEL_THRESHOLD: f64 = 0.3;
/// Momentum above which a proposal is labeled "Trending now".
pub const TRENDING_MOMENTUM_THRESHOLD: f64 = 0.75;
/// Recency above which a proposal is labeled "New & relevant".
pub const NEW_RECENCY_THRESHOLD: f64 = 0.75;
/// Momentum below which a proposal is labeled "Stable".
pub const STABLE_MOMENTUM_THRESHOLD: f64 = 0.25;

/// Weighted highlight score formula.
///
/// ```text
/// score = 0.4 × recency
///       + 0.3 × engagement
///       + 0.2 × momentum
///       + 0.1 × theme
///       + overrideBoost
/// ```
///
/// The four organic weights form a convex combination; the override boost
/// is additive outside it so curators can push any proposal to near-top
/// regardless of organic signal. Result is clamped to [0.0, 1.0].
pub fn compute(
    proposal: &Proposal,
    engagement: &EngagementCounts,
    window: Option<&InteractionWindow>,
    curation: Option<&HighlightOverride>,
    config: &HighlightConfig,
    ctx: &ScoringContext,
) -> HighlightComputation {
    let components = compute_components(proposal, engagement, window, curation, config, ctx.now);

    let weights = &config.weights;
    let base = weights.recency * components.recency
        + weights.engagement * components.engagement
        + weights.momentum * components.momentum
        + weights.theme * components.theme;

    // Clamp: the curation boost can push the sum above 1.0.
    let score = (base + components.curation).clamp(0.0, 1.0);

    HighlightComputation {
        score,
        label: derive_label(&components),
        components,
    }
}

fn compute_components(
    proposal: &Proposal,
    engagement: &EngagementCounts,
    window: Option<&InteractionWindow>,
    curation: Option<&HighlightOverride>,
    config: &HighlightConfig,
    now: DateTime<Utc>,
) -> HighlightComponents {
    HighlightComponents {
        recency: factors::recency::calculate(
            proposal.presentation_date,
            now,
            config.recency_window_days,
        ),
        engagement: factors::engagement::calculate(engagement, window, config.engagement_cap),
        momentum: factors::momentum::calculate(
            window,
            config.neutral_momentum,
            config.cold_start_floor,
        ),
        theme: factors::theme::calculate(
            proposal.theme.as_deref(),
            proposal.status_situation.as_deref(),
        ),
        curation: factors::curation::calculate(curation, now, config.max_override_boost),
    }
}

/// Derive the categorical label. Priority-ordered; first match wins.
///
/// A curated proposal is always labeled as such even when it would also
/// qualify as trending, and momentum is checked before recency so a
/// fast-rising older proposal is labeled by its momentum, not its age.
pub fn derive_label(components: &HighlightComponents) -> HighlightLabel {
    if components.curation >= CURATION_LABEL_THRESHOLD {
        HighlightLabel::SpecialCuration
    } else if components.momentum > TRENDING_MOMENTUM_THRESHOLD {
        HighlightLabel::TrendingNow
    } else if components.recency > NEW_RECENCY_THRESHOLD {
        HighlightLabel::NewAndRelevant
    } else if components.momentum < STABLE_MOMENTUM_THRESHOLD {
        HighlightLabel::Stable
    } else {
        HighlightLabel::Trending
    }
}
