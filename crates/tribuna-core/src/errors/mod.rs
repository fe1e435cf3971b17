pub mod store_error;

pub use store_error::StoreError;

/// Top-level error type for the Tribuna core.
#[derive(Debug, thiserror::Error)]
pub enum TribunaError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result alias used throughout the workspace.
pub type TribunaResult<T> = Result<T, TribunaError>;
