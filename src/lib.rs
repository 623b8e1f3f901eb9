//! Core library for the `locklint` CLI.
//!
//! Checks whether `package-lock.json` is consistent with `package.json` by
//! regenerating the lockfile in place and comparing before/after snapshots.

pub mod adapters;
pub mod analyze;
pub mod cli;
pub mod context;
pub mod diff;
pub mod error;
pub mod guard;
pub mod pipeline;
pub mod ports;
pub mod regen;
pub mod report;
pub mod resolve;
pub mod snapshot;
pub mod verify;

use clap::Parser;

use crate::context::ServiceContext;
use crate::error::LintError;
use crate::pipeline::RunConfig;
use crate::report::RunOutcome;

/// Run the CLI with the provided arguments against the live environment.
///
/// # Errors
///
/// Returns an error when argument parsing fails or the check run aborts;
/// `LintError::exit_code` distinguishes check failures from fatal errors.
pub fn run<I, T>(args: I) -> Result<RunOutcome, LintError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // Help and version requests are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(RunOutcome::InSync);
        }
        Err(err) => return Err(LintError::External(err.to_string())),
    };

    let cwd = std::env::current_dir().map_err(|e| LintError::External(e.to_string()))?;
    let start_dir = match cli.directory {
        Some(ref dir) if dir.is_absolute() => dir.clone(),
        Some(ref dir) => cwd.join(dir),
        None => cwd,
    };
    let config = RunConfig { start_dir, mode: cli.mode(), skip_guard: cli.skip_guard() };

    let ctx = ServiceContext::live();
    pipeline::run(&ctx, &config)
}
