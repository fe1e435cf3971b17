pub mod store;
pub mod topics;

pub use store::IProposalStore;
pub use topics::IHotTopics;
