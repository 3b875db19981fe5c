//! Live repository gateway that shells out to the `git` CLI.

use std::path::Path;
use std::process::Command;

use crate::ports::repo::RepoGateway;

/// Live gateway running `git` commands inside the local checkout.
pub struct LiveRepoGateway;

/// Runs `git` with the given args in `working_dir`, folding stderr into the
/// error on non-zero exit.
fn run_git(
    working_dir: &Path,
    args: &[&str],
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let output = Command::new("git").args(args).current_dir(working_dir).output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("git {} failed: {}", args.join(" "), stderr.trim()).into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl RepoGateway for LiveRepoGateway {
    fn ensure_cloned(
        &self,
        remote_url: &str,
        local_path: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if local_path.exists() {
            println!("Repository already exists at {}. Pulling latest changes.", local_path.display());
            run_git(local_path, &["pull"])?;
            return Ok(());
        }
        println!("Cloning repository {remote_url}...");
        if let Some(parent) = local_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let output = Command::new("git")
            .arg("clone")
            .arg(remote_url)
            .arg(local_path)
            .output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("git clone {remote_url} failed: {}", stderr.trim()).into());
        }
        Ok(())
    }

    fn sync_primary_branch(
        &self,
        local_path: &Path,
        branch: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        run_git(local_path, &["checkout", branch])?;
        run_git(local_path, &["pull"])?;
        Ok(())
    }

    fn create_and_switch_branch(
        &self,
        local_path: &Path,
        name: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        run_git(local_path, &["checkout", "-b", name])?;
        Ok(())
    }

    fn stage_all(
        &self,
        local_path: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        run_git(local_path, &["add", "."])?;
        Ok(())
    }

    fn commit(
        &self,
        local_path: &Path,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        run_git(local_path, &["commit", "-m", message])?;
        Ok(())
    }

    fn push_new_branch(
        &self,
        local_path: &Path,
        name: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        run_git(local_path, &["push", "-u", "origin", name])?;
        Ok(())
    }
}
