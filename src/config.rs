//! JSON configuration for a backlog run.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable that overrides the default config path.
const CONFIG_ENV_VAR: &str = "AIDEV_CONFIG";

/// Default config path relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "config/config.json";

/// Runtime configuration loaded from a JSON file.
///
/// Field names match the on-disk keys exactly. `workspace_dir` and
/// `primary_branch` are optional in the file and default to `workspace`
/// and `main`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// URL of the remote repository to patch.
    pub github_repository_url: String,
    /// Path to the backlog file (one task per non-blank line).
    pub tasks_file_path: PathBuf,
    /// Network address of the suggestion service.
    pub ollama_api_endpoint: String,
    /// Directory that holds local checkouts.
    #[serde(default = "default_workspace_dir")]
    pub workspace_dir: PathBuf,
    /// The repository's main integration branch.
    #[serde(default = "default_primary_branch")]
    pub primary_branch: String,
}

fn default_workspace_dir() -> PathBuf {
    PathBuf::from("workspace")
}

fn default_primary_branch() -> String {
    "main".to_string()
}

impl Config {
    /// Loads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config file {}: {e}", path.display()))
    }

    /// Resolves the config path: explicit flag, then `AIDEV_CONFIG`, then the default.
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(value) => PathBuf::from(value),
            Err(_) => PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// The repository name: final URL path segment with any `.git` suffix stripped.
    #[must_use]
    pub fn repo_name(&self) -> String {
        let url = self.github_repository_url.trim_end_matches('/');
        let segment = url.rsplit('/').next().unwrap_or(url);
        segment.trim_end_matches(".git").to_string()
    }

    /// The local checkout path for this repository inside the workspace.
    #[must_use]
    pub fn local_repo_path(&self) -> PathBuf {
        self.workspace_dir.join(self.repo_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        Config {
            github_repository_url: "https://github.com/acme/demo-service.git".into(),
            tasks_file_path: PathBuf::from("tasks.md"),
            ollama_api_endpoint: "http://localhost:5000/ask".into(),
            workspace_dir: PathBuf::from("workspace"),
            primary_branch: "main".into(),
        }
    }

    #[test]
    fn parses_minimal_json_with_defaults() {
        let json = r#"{
            "github_repository_url": "https://github.com/acme/demo-service.git",
            "tasks_file_path": "backlog/tasks.md",
            "ollama_api_endpoint": "http://localhost:11434/api/generate"
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.workspace_dir, PathBuf::from("workspace"));
        assert_eq!(config.primary_branch, "main");
        assert_eq!(config.tasks_file_path, PathBuf::from("backlog/tasks.md"));
    }

    #[test]
    fn parses_explicit_overrides() {
        let json = r#"{
            "github_repository_url": "git@github.com:acme/demo.git",
            "tasks_file_path": "tasks.md",
            "ollama_api_endpoint": "http://localhost:5000/ask",
            "workspace_dir": "/tmp/checkouts",
            "primary_branch": "trunk"
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.workspace_dir, PathBuf::from("/tmp/checkouts"));
        assert_eq!(config.primary_branch, "trunk");
    }

    #[test]
    fn repo_name_strips_git_suffix() {
        let config = sample_config();
        assert_eq!(config.repo_name(), "demo-service");
    }

    #[test]
    fn repo_name_without_git_suffix() {
        let mut config = sample_config();
        config.github_repository_url = "https://github.com/acme/demo-service".into();
        assert_eq!(config.repo_name(), "demo-service");
    }

    #[test]
    fn local_repo_path_joins_workspace_and_name() {
        let config = sample_config();
        assert_eq!(config.local_repo_path(), PathBuf::from("workspace/demo-service"));
    }

    #[test]
    fn load_rejects_missing_file() {
        let result = Config::load(Path::new("/nonexistent/config.json"));
        assert!(result.unwrap_err().contains("Failed to read config file"));
    }

    #[test]
    fn load_rejects_invalid_json() {
        let dir = std::env::temp_dir().join("aidev_config_test_invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let result = Config::load(&path);
        assert!(result.unwrap_err().contains("Failed to parse config file"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn resolve_path_prefers_explicit_flag() {
        let path = Config::resolve_path(Some(Path::new("custom.json")));
        assert_eq!(path, PathBuf::from("custom.json"));
    }
}
