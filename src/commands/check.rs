//! `aidev check` command: parse the backlog without executing anything.

use std::path::Path;

use crate::config::Config;
use crate::task::Task;

/// Execute the `check` command.
///
/// Reads the backlog, parses every non-blank line, and reports each task's
/// target, branch name, and instruction plus any malformed lines. Touches
/// neither git nor the network.
///
/// # Errors
///
/// Returns an error string if the configuration or the backlog file cannot
/// be read.
pub fn run(config_path: Option<&Path>) -> Result<(), String> {
    let path = Config::resolve_path(config_path);
    let config = Config::load(&path)?;

    let backlog = std::fs::read_to_string(&config.tasks_file_path).map_err(|e| {
        format!("Failed to read tasks file {}: {e}", config.tasks_file_path.display())
    })?;

    let mut valid = 0;
    let mut malformed = 0;
    for line in backlog.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match Task::parse(line) {
            Some(task) => {
                valid += 1;
                println!("{} -> {} ({})", task.target_path, task.branch_name(), task.instruction);
            }
            None => {
                malformed += 1;
                println!("malformed: {}", line.trim());
            }
        }
    }

    println!("{valid} task(s), {malformed} malformed line(s)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use std::path::Path;

    fn write_fixture(dir: &Path, tasks: &str) -> std::path::PathBuf {
        std::fs::create_dir_all(dir).unwrap();
        let tasks_path = dir.join("tasks.md");
        std::fs::write(&tasks_path, tasks).unwrap();
        let config_path = dir.join("config.json");
        let config = serde_json::json!({
            "github_repository_url": "https://example.com/acme/demo.git",
            "tasks_file_path": tasks_path,
            "ollama_api_endpoint": "http://localhost:5000/ask"
        });
        std::fs::write(&config_path, config.to_string()).unwrap();
        config_path
    }

    #[test]
    fn check_reads_config_and_backlog() {
        let dir = std::env::temp_dir().join("aidev_check_test_ok");
        let config_path =
            write_fixture(&dir, "- In `src/app.py`, add a health check endpoint.\n\nnot a task\n");

        let result = run(Some(&config_path));
        assert!(result.is_ok());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn check_errors_when_backlog_is_missing() {
        let dir = std::env::temp_dir().join("aidev_check_test_missing");
        std::fs::create_dir_all(&dir).unwrap();
        let config_path = dir.join("config.json");
        let config = serde_json::json!({
            "github_repository_url": "https://example.com/acme/demo.git",
            "tasks_file_path": dir.join("absent.md"),
            "ollama_api_endpoint": "http://localhost:5000/ask"
        });
        std::fs::write(&config_path, config.to_string()).unwrap();

        let result = run(Some(&config_path));
        assert!(result.unwrap_err().contains("Failed to read tasks file"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
