//! Binary entrypoint for the `locklint` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match locklint::run(std::env::args()) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
