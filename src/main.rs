//! Binary entrypoint for the `aidev` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Pick up AIDEV_CONFIG and friends from a local .env if present.
    dotenvy::dotenv().ok();
    match aidev::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
