use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::engagement::EngagementCounts;

/// Read-only projection of a legislative proposal as owned by the
/// persistence collaborator. The core never writes these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    /// Collaborator-assigned identifier.
    pub id: String,
    pub title: String,
    /// Proposition kind, e.g. "PL", "PEC".
    pub kind: Option<String>,
    pub number: Option<i32>,
    pub year: Option<i32>,
    pub status: Option<String>,
    /// Free-text procedural situation, scanned for urgency keywords.
    pub status_situation: Option<String>,
    /// Free-text theme category.
    pub theme: Option<String>,
    pub author: Option<String>,
    /// AI-generated summary, carried through for display only.
    pub summary: Option<String>,
    /// Presentation date, UTC-normalized at day granularity.
    pub presentation_date: NaiveDate,
}

/// A proposal paired with its engagement aggregates, as returned by the
/// candidate fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProposal {
    pub proposal: Proposal,
    pub engagement: EngagementCounts,
}
