//! Command dispatch and handlers.

pub mod check;
pub mod run;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Run { config } => run::run(config.as_deref()),
        Command::Check { config } => check::run(config.as_deref()),
    }
}
