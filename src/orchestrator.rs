//! Task orchestration: drives each backlog task from parse to pull request.
//!
//! Tasks run strictly in backlog order, fully sequentially. Each task is
//! isolated: malformed lines, missing suggestions, and pull-request failures
//! end that task only, while a checkout that cannot sync or branch ends the
//! whole batch.

use std::path::Path;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::task::Task;

/// Terminal state of one backlog task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The file was rewritten, committed, pushed, and a pull request opened.
    Applied,
    /// The backlog line did not match the task grammar.
    SkippedMalformed,
    /// The suggestion service returned nothing; no edit was made.
    SkippedNoSuggestion,
    /// The branch was pushed but pull-request creation failed.
    PrFailed,
}

/// Processes the whole backlog against the configured repository.
///
/// Clones or updates the working checkout once, then runs every non-blank
/// backlog line through the per-task lifecycle. Task-local failures are
/// recorded as outcomes; only an unusable checkout aborts the batch.
///
/// # Errors
///
/// Returns an error string when the checkout cannot be prepared, the backlog
/// cannot be read, or a task hits a batch-fatal git failure.
pub async fn process_backlog(
    ctx: &ServiceContext,
    config: &Config,
) -> Result<Vec<TaskOutcome>, String> {
    let local_path = config.local_repo_path();
    ctx.repo
        .ensure_cloned(&config.github_repository_url, &local_path)
        .map_err(|e| format!("Failed to prepare working repository: {e}"))?;

    let backlog = ctx.fs.read_to_string(&config.tasks_file_path).map_err(|e| {
        format!("Failed to read tasks file {}: {e}", config.tasks_file_path.display())
    })?;

    let mut outcomes = Vec::new();
    for line in backlog.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let outcome = match Task::parse(line) {
            Some(task) => process_task(ctx, config, &local_path, &task).await?,
            None => {
                println!("Skipping malformed task: {}", line.trim());
                TaskOutcome::SkippedMalformed
            }
        };
        outcomes.push(outcome);
    }

    println!("\nAll tasks processed.");
    Ok(outcomes)
}

/// Runs one parsed task through branch, suggest, write, commit, push, PR.
///
/// Branch setup and working-tree failures are batch-fatal `Err`s: a checkout
/// that cannot sync, branch, or commit invalidates every remaining task. An
/// empty suggestion and a failed pull request are task-local outcomes.
async fn process_task(
    ctx: &ServiceContext,
    config: &Config,
    local_path: &Path,
    task: &Task,
) -> Result<TaskOutcome, String> {
    println!("\n--- Processing Task: {} in {} ---", task.instruction, task.target_path);

    // Always re-base onto the primary branch so task branches are siblings,
    // never stacked on the previous task's branch.
    ctx.repo
        .sync_primary_branch(local_path, &config.primary_branch)
        .map_err(|e| format!("Failed to sync branch '{}': {e}", config.primary_branch))?;

    let branch = task.branch_name();
    println!("Creating new branch: {branch}");
    ctx.repo
        .create_and_switch_branch(local_path, &branch)
        .map_err(|e| format!("Failed to create branch '{branch}': {e}"))?;

    let target = local_path.join(&task.target_path);
    let snapshot = if ctx.fs.exists(&target) {
        ctx.fs
            .read_to_string(&target)
            .map_err(|e| format!("Failed to read {}: {e}", target.display()))?
    } else {
        println!("File {} does not exist. Creating it.", task.target_path);
        String::new()
    };

    println!("Sending prompt to AI...");
    let prompt = build_prompt(&task.instruction, &snapshot);
    let suggestion = ctx.suggestions.suggest(&prompt).await;
    if suggestion.is_empty() {
        println!("Failed to get suggestion from AI. Skipping task.");
        return Ok(TaskOutcome::SkippedNoSuggestion);
    }

    println!("Applying AI suggestion to {}", task.target_path);
    ctx.fs
        .write(&target, &suggestion)
        .map_err(|e| format!("Failed to write {}: {e}", target.display()))?;

    println!("Committing changes...");
    ctx.repo.stage_all(local_path).map_err(|e| format!("Failed to stage changes: {e}"))?;
    ctx.repo
        .commit(local_path, &format!("feat: {}", task.instruction))
        .map_err(|e| format!("Failed to commit changes: {e}"))?;

    println!("Pushing changes...");
    ctx.repo
        .push_new_branch(local_path, &branch)
        .map_err(|e| format!("Failed to push branch '{branch}': {e}"))?;

    println!("Creating Pull Request...");
    let title = format!("AI: {}", task.instruction);
    let body = format!(
        "This PR was automatically generated by an AI agent to address the following task:\n\n> {}",
        task.raw_line.trim()
    );
    match ctx.publisher.create_pull_request(local_path, &title, &body) {
        Ok(()) => Ok(TaskOutcome::Applied),
        Err(e) => {
            // The branch and commit stay on the remote; only the PR is lost.
            println!(
                "Failed to create pull request. Please ensure the 'gh' CLI is installed and authenticated."
            );
            println!("{e}");
            Ok(TaskOutcome::PrFailed)
        }
    }
}

/// Builds the suggestion prompt: fixed system instruction, the task's
/// instruction, and the file snapshot verbatim between `---` delimiters.
fn build_prompt(instruction: &str, snapshot: &str) -> String {
    format!(
        "You are an autonomous AI developer. Your task is to modify a codebase based on the user's instruction.\n\
         You will be given the content of a file and an instruction.\n\
         Your response MUST be the complete, updated content of the file. Do not add any explanations, comments, or markdown formatting around the code.\n\
         \n\
         Instruction: \"{instruction}\"\n\
         \n\
         File Content:\n\
         ---\n\
         {snapshot}\n\
         ---\n"
    )
}
