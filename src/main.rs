//! dock - Anchor-based docking for habitat modules

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = habitat_dock::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
