//! Service context bundling all port trait objects.

use crate::ports::filesystem::FileSystem;
use crate::ports::publish::PullRequestPublisher;
use crate::ports::repo::RepoGateway;
use crate::ports::suggest::SuggestionClient;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. The orchestrator
/// only ever talks to these trait objects, so tests can swap in recording
/// fakes without touching a real checkout or the network.
pub struct ServiceContext {
    /// Filesystem for backlog and working-tree I/O.
    pub fs: Box<dyn FileSystem>,
    /// Version-control gateway for the local checkout.
    pub repo: Box<dyn RepoGateway>,
    /// Client for the external suggestion service.
    pub suggestions: Box<dyn SuggestionClient>,
    /// Pull request publisher for the hosting service.
    pub publisher: Box<dyn PullRequestPublisher>,
}

impl ServiceContext {
    /// Creates a live context: real disk, `git` CLI, HTTP suggestion client,
    /// and `gh` CLI publisher.
    #[must_use]
    pub fn live(suggestion_endpoint: &str) -> Self {
        use crate::adapters::live::filesystem::LiveFileSystem;
        use crate::adapters::live::publish::LivePullRequestPublisher;
        use crate::adapters::live::repo::LiveRepoGateway;
        use crate::adapters::live::suggest::LiveSuggestionClient;

        Self {
            fs: Box::new(LiveFileSystem),
            repo: Box::new(LiveRepoGateway),
            suggestions: Box::new(LiveSuggestionClient::new(suggestion_endpoint)),
            publisher: Box::new(LivePullRequestPublisher),
        }
    }
}
