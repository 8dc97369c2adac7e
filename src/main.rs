//! tgrep: grep with templated regular expressions.
//!
//! This is the main entry point for the `tgrep` CLI. It parses arguments,
//! dispatches to the command handler, and handles errors with proper exit
//! codes.

use std::io::{self, BufWriter};
use std::process::ExitCode;
use tgrep::cli::Cli;
use tgrep::{commands, exit_codes, logging};

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse_args();

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());

    match commands::dispatch(cli, stdin, &mut stdout) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) if err.is_broken_pipe() => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
