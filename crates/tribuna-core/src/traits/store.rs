use std::collections::HashMap;

use chrono::NaiveDate;

use crate::errors::TribunaResult;
use crate::models::{CandidateProposal, InteractionContext};

/// The data-collaborator boundary: the two read operations the hot-topics
/// selector requires. The implementation owns all I/O, timeouts, and
/// retries; this core only propagates its failures.
pub trait IProposalStore: Send + Sync {
    /// Fetch proposals presented on or after `since`, paired with their
    /// engagement aggregates, ordered by presentation date descending and
    /// hard-limited to `max` rows.
    fn fetch_candidate_proposals(
        &self,
        since: NaiveDate,
        max: usize,
    ) -> TribunaResult<Vec<CandidateProposal>>;

    /// Batch lookup of interaction windows and curator overrides for the
    /// given proposal ids. An absent key means no recorded activity and no
    /// override for that proposal.
    fn fetch_interaction_context(
        &self,
        ids: &[String],
    ) -> TribunaResult<HashMap<String, InteractionContext>>;
}
