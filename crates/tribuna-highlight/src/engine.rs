use tribuna_core::config::HighlightConfig;
use tribuna_core::models::{
    EngagementCounts, HighlightComputation, HighlightOverride, InteractionWindow, Proposal,
};

use crate::factors::ScoringContext;
use crate::formula;

/// The highlight score engine. Pure and thread-safe: no shared mutable
/// state, never fails for well-typed input.
#[derive(Debug, Clone, Default)]
pub struct HighlightEngine {
    config: HighlightConfig,
}

impl HighlightEngine {
    /// Create an engine with the default heuristic configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: HighlightConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Score one proposal. `window` is `None` when no interaction record
    /// exists at all (distinct from an all-zero record); `curation` is the
    /// proposal's manual override, if any.
    pub fn compute(
        &self,
        proposal: &Proposal,
        engagement: &EngagementCounts,
        window: Option<&InteractionWindow>,
        curation: Option<&HighlightOverride>,
        ctx: &ScoringContext,
    ) -> HighlightComputation {
        formula::compute(proposal, engagement, window, curation, &self.config, ctx)
    }
}
