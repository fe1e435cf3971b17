//! # tribuna-core
//!
//! Foundation crate for the Tribuna hot-topics highlight core.
//! Defines all models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TribunaConfig;
pub use errors::{TribunaError, TribunaResult};
pub use models::{
    CandidateProposal, EngagementCounts, HighlightComputation, HighlightLabel, HighlightOverride,
    HotTopic, InteractionContext, InteractionWindow, Proposal,
};
