/// Data-collaborator (persistence boundary) errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store query failed: {reason}")]
    QueryFailed { reason: String },

    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },
}
