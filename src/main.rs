//! Locsmith binary entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    match locsmith::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            locsmith::ui::output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
