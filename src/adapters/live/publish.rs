//! Live pull request publisher using the `gh` CLI.

use std::path::Path;
use std::process::Command;

use crate::ports::publish::PullRequestPublisher;

/// Publishes pull requests by shelling out to `gh pr create`.
///
/// Requires the `gh` CLI to be installed and authenticated; any failure is
/// reported with the command's captured stderr.
pub struct LivePullRequestPublisher;

impl PullRequestPublisher for LivePullRequestPublisher {
    fn create_pull_request(
        &self,
        local_path: &Path,
        title: &str,
        body: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new("gh")
            .args(["pr", "create", "--title", title, "--body", body, "--fill"])
            .current_dir(local_path)
            .output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("gh pr create failed: {}", stderr.trim()).into());
        }
        Ok(())
    }
}
