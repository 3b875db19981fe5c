//! Repository gateway port for version-control operations.

use std::path::Path;

/// The version-control capabilities the orchestrator needs.
///
/// Each operation either succeeds or fails with enough diagnostic detail
/// (the underlying command's captured output) to log the cause. Abstracting
/// these behind a trait lets the orchestrator be tested with an in-memory
/// fake that records calls instead of mutating a real checkout.
pub trait RepoGateway: Send + Sync {
    /// Clones `remote_url` to `local_path` if absent, otherwise pulls the
    /// current branch to pick up remote changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the clone or pull fails.
    fn ensure_cloned(
        &self,
        remote_url: &str,
        local_path: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Checks out the primary branch and pulls it up to date.
    ///
    /// # Errors
    ///
    /// Returns an error if the checkout or pull fails.
    fn sync_primary_branch(
        &self,
        local_path: &Path,
        branch: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Creates a new branch and switches the working tree to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch cannot be created.
    fn create_and_switch_branch(
        &self,
        local_path: &Path,
        name: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Stages every working-tree change.
    ///
    /// # Errors
    ///
    /// Returns an error if staging fails.
    fn stage_all(&self, local_path: &Path)
        -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Commits the staged changes with the given message.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails (e.g. nothing staged).
    fn commit(
        &self,
        local_path: &Path,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Pushes `name` to the remote, setting it to track the same-named
    /// remote branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the push fails.
    fn push_new_branch(
        &self,
        local_path: &Path,
        name: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
