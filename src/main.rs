//! gitrig: drive git repository operations from the command line.
//!
//! This is the main entry point for the `gitrig` CLI. It parses arguments,
//! dispatches to the matching session operation, and handles errors with
//! proper exit codes.

mod cli;
mod commands;

use cli::Cli;
use gitrig::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
