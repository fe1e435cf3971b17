use crate::errors::TribunaResult;
use crate::models::HotTopic;

/// Caller-facing contract of the hot-topics selector.
pub trait IHotTopics {
    /// Score, rank, and return up to `limit` hot topics, freshly computed.
    /// `limit == 0` yields an empty list.
    fn list_hot_topics(&self, limit: usize) -> TribunaResult<Vec<HotTopic>>;
}
