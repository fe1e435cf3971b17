pub mod engagement;
pub mod highlight;
pub mod hot_topic;
pub mod interaction;
pub mod proposal;

pub use engagement::EngagementCounts;
pub use highlight::{HighlightComponents, HighlightComputation, HighlightLabel};
pub use hot_topic::HotTopic;
pub use interaction::{HighlightOverride, InteractionContext, InteractionWindow};
pub use proposal::{CandidateProposal, Proposal};
