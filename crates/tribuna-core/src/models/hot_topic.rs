use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::highlight::{HighlightComponents, HighlightLabel};

/// Caller-facing row produced by the hot-topics selector: the proposal's
/// display fields plus its highlight score, label, and factor breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotTopic {
    pub id: String,
    pub title: String,
    pub kind: Option<String>,
    pub number: Option<i32>,
    pub year: Option<i32>,
    pub status: Option<String>,
    pub status_situation: Option<String>,
    pub theme: Option<String>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub presentation_date: NaiveDate,
    pub score: f64,
    pub label: HighlightLabel,
    pub components: HighlightComponents,
    pub comments_count: u64,
    pub stances_count: u64,
}
