use chrono::Duration;
use tracing::{debug, info};

use tribuna_core::config::{HighlightConfig, TopicsConfig};
use tribuna_core::errors::TribunaResult;
use tribuna_core::models::{CandidateProposal, HotTopic, InteractionContext};
use tribuna_core::traits::{IHotTopics, IProposalStore};
use tribuna_highlight::{HighlightEngine, ScoringContext};

/// The hot-topics selector. Orchestrates the full pipeline:
/// fetch candidates → batch context lookup → score → rank → truncate.
///
/// Every call re-fetches and re-scores from scratch; there is no caching
/// and no retry. Store failures propagate to the caller as-is, with no
/// partial results. Independent calls may run fully in parallel.
pub struct HotTopicsEngine<'a> {
    store: &'a dyn IProposalStore,
    highlight: HighlightEngine,
    config: TopicsConfig,
}

impl<'a> HotTopicsEngine<'a> {
    /// Create a selector with the default heuristic configuration.
    pub fn new(store: &'a dyn IProposalStore) -> Self {
        Self {
            store,
            highlight: HighlightEngine::new(),
            config: TopicsConfig::default(),
        }
    }

    /// Create a selector with custom selector and scoring configuration.
    pub fn with_config(
        store: &'a dyn IProposalStore,
        config: TopicsConfig,
        highlight: HighlightConfig,
    ) -> Self {
        Self {
            store,
            highlight: HighlightEngine::with_config(highlight),
            config,
        }
    }

    pub fn config(&self) -> &TopicsConfig {
        &self.config
    }

    /// Rank hot topics using the configured default limit.
    pub fn list_hot_topics_default(&self) -> TribunaResult<Vec<HotTopic>> {
        self.list_hot_topics(self.config.default_limit)
    }

    /// Rank hot topics against an explicit clock. `limit == 0` returns an
    /// empty list; a limit beyond the candidate count returns all
    /// candidates, sorted.
    pub fn list_hot_topics_at(
        &self,
        limit: usize,
        ctx: &ScoringContext,
    ) -> TribunaResult<Vec<HotTopic>> {
        // Step 1: Candidates within the lookback window, most recent first.
        // Beyond `max_candidates` the least recently presented are excluded
        // by the store's hard limit.
        let since = ctx.now.date_naive() - Duration::days(self.config.lookback_days);
        let candidates = self
            .store
            .fetch_candidate_proposals(since, self.config.max_candidates)?;

        if candidates.is_empty() {
            debug!(%since, "no candidate proposals in lookback window");
            return Ok(Vec::new());
        }

        info!(
            candidates = candidates.len(),
            %since,
            "fetched candidate proposals"
        );

        // Step 2: One batch lookup of windows and overrides for exactly
        // the candidate ids. An absent key means no activity, no override.
        let ids: Vec<String> = candidates.iter().map(|c| c.proposal.id.clone()).collect();
        let contexts = self.store.fetch_interaction_context(&ids)?;

        // Step 3: Score every candidate with one shared clock.
        let mut scored: Vec<HotTopic> = candidates
            .into_iter()
            .map(|candidate| {
                let context = contexts
                    .get(&candidate.proposal.id)
                    .copied()
                    .unwrap_or_default();
                self.score_candidate(candidate, context, ctx)
            })
            .collect();

        // Step 4: Stable sort, descending by score. Stability keeps the
        // input's presentation-date-descending order as the de facto
        // tie-break.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // Step 5: Truncate to the requested count.
        scored.truncate(limit);

        debug!(returned = scored.len(), limit, "hot topics ranked");

        Ok(scored)
    }

    fn score_candidate(
        &self,
        candidate: CandidateProposal,
        context: InteractionContext,
        ctx: &ScoringContext,
    ) -> HotTopic {
        let CandidateProposal {
            proposal,
            engagement,
        } = candidate;

        let computation = self.highlight.compute(
            &proposal,
            &engagement,
            context.window.as_ref(),
            context.curation.as_ref(),
            ctx,
        );

        HotTopic {
            id: proposal.id,
            title: proposal.title,
            kind: proposal.kind,
            number: proposal.number,
            year: proposal.year,
            status: proposal.status,
            status_situation: proposal.status_situation,
            theme: proposal.theme,
            author: proposal.author,
            summary: proposal.summary,
            presentation_date: proposal.presentation_date,
            score: computation.score,
            label: computation.label,
            components: computation.components,
            comments_count: engagement.comments,
            stances_count: engagement.stances,
        }
    }
}

impl IHotTopics for HotTopicsEngine<'_> {
    fn list_hot_topics(&self, limit: usize) -> TribunaResult<Vec<HotTopic>> {
        self.list_hot_topics_at(limit, &ScoringContext::default())
    }
}
