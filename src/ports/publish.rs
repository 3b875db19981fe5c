//! Pull request publisher port.

use std::path::Path;

/// Creates pull requests on the repository's hosting service.
///
/// Publishing may fail when the hosting CLI is missing or unauthenticated;
/// that failure is task-local and never rolls back an already-pushed branch.
pub trait PullRequestPublisher: Send + Sync {
    /// Opens a pull request for the branch currently checked out at
    /// `local_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the hosting integration is unavailable or the
    /// request is rejected.
    fn create_pull_request(
        &self,
        local_path: &Path,
        title: &str,
        body: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
