//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the orchestrator and an external
//! system (filesystem, version control, the suggestion service, the pull
//! request host). Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod publish;
pub mod repo;
pub mod suggest;

pub use filesystem::FileSystem;
pub use publish::PullRequestPublisher;
pub use repo::RepoGateway;
pub use suggest::{SuggestionClient, SuggestionFuture};
