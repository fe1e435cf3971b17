//! # tribuna-highlight
//!
//! The highlight score engine: a pure, synchronous function ranking
//! legislative proposals by a weighted combination of recency, engagement,
//! momentum, and thematic priority, plus an additive curator override
//! boost. No I/O, no shared state; safe to call concurrently.

pub mod engine;
pub mod factors;
pub mod formula;

pub use engine::HighlightEngine;
pub use factors::ScoringContext;
