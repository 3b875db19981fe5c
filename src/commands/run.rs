//! `aidev run` command: process the whole backlog.

use std::path::Path;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::orchestrator::{self, TaskOutcome};

/// Execute the `run` command.
///
/// Loads the configuration, wires up live adapters, and drives the
/// orchestrator over the full backlog on a current-thread runtime so tasks
/// stay strictly sequential.
///
/// # Errors
///
/// Returns an error string if the configuration cannot be loaded, the
/// runtime cannot start, or the batch hits a batch-fatal failure.
pub fn run(config_path: Option<&Path>) -> Result<(), String> {
    let path = Config::resolve_path(config_path);
    let config = Config::load(&path)?;
    let ctx = ServiceContext::live(&config.ollama_api_endpoint);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;

    let outcomes = runtime.block_on(orchestrator::process_backlog(&ctx, &config))?;
    print_summary(&outcomes);
    Ok(())
}

/// Prints a per-outcome summary for the finished batch.
fn print_summary(outcomes: &[TaskOutcome]) {
    let count = |wanted: TaskOutcome| outcomes.iter().filter(|o| **o == wanted).count();
    println!(
        "Summary: {} applied, {} malformed, {} without suggestion, {} with failed PR ({} task lines total)",
        count(TaskOutcome::Applied),
        count(TaskOutcome::SkippedMalformed),
        count(TaskOutcome::SkippedNoSuggestion),
        count(TaskOutcome::PrFailed),
        outcomes.len()
    );
}

#[cfg(test)]
mod tests {
    use super::run;
    use std::path::Path;

    #[test]
    fn run_errors_when_config_is_missing() {
        let result = run(Some(Path::new("/nonexistent/aidev/config.json")));
        assert!(result.unwrap_err().contains("Failed to read config file"));
    }
}
