use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-factor breakdown of a highlight score.
///
/// `recency`, `engagement`, `momentum`, and `theme` are each clamped to
/// [0.0, 1.0] before weighting. `curation` is the override boost in
/// [0.0, 0.5], added outside the weighted sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightComponents {
    pub recency: f64,
    pub engagement: f64,
    pub momentum: f64,
    pub theme: f64,
    #[serde(rename = "override")]
    pub curation: f64,
}

/// Categorical label attached to a scored proposal.
/// Derivation is priority-ordered; see the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighlightLabel {
    #[serde(rename = "Special Curation")]
    SpecialCuration,
    #[serde(rename = "Trending now")]
    TrendingNow,
    #[serde(rename = "New & relevant")]
    NewAndRelevant,
    #[serde(rename = "Stable")]
    Stable,
    #[serde(rename = "Trending")]
    Trending,
}

impl HighlightLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SpecialCuration => "Special Curation",
            Self::TrendingNow => "Trending now",
            Self::NewAndRelevant => "New & relevant",
            Self::Stable => "Stable",
            Self::Trending => "Trending",
        }
    }
}

impl fmt::Display for HighlightLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the highlight score engine for one proposal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightComputation {
    /// Final composite score, clamped to [0.0, 1.0].
    pub score: f64,
    pub label: HighlightLabel,
    pub components: HighlightComponents,
}
