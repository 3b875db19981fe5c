//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `aidev`.
#[derive(Debug, Parser)]
#[command(name = "aidev", version, about = "Turn a task backlog into AI-authored pull requests")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process the whole backlog: branch, edit, commit, push, and open a PR per task.
    Run {
        /// Path to the JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Parse the backlog and report tasks without touching git or the network.
    Check {
        /// Path to the JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_run_subcommand() {
        let cli = Cli::parse_from(["aidev", "run"]);
        assert!(matches!(cli.command, Command::Run { config: None }));
    }

    #[test]
    fn parses_run_with_config_flag() {
        let cli = Cli::parse_from(["aidev", "run", "--config", "conf.json"]);
        match cli.command {
            Command::Run { config: Some(path) } => {
                assert_eq!(path.to_string_lossy(), "conf.json");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_check_subcommand() {
        let cli = Cli::parse_from(["aidev", "check"]);
        assert!(matches!(cli.command, Command::Check { config: None }));
    }
}
