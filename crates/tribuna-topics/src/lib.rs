//! # tribuna-topics
//!
//! HotTopicsEngine: implements IHotTopics, orchestrates the selector
//! pipeline: fetch candidates → batch context lookup → score → rank →
//! truncate. The only part of the core with I/O, all of it delegated to
//! the `IProposalStore` collaborator.

pub mod engine;

pub use engine::HotTopicsEngine;
