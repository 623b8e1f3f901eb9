//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::verify::Mode;

/// Top-level CLI parser for `locklint`.
#[derive(Debug, Parser)]
#[command(
    name = "locklint",
    version,
    about = "Check that package-lock.json is consistent with package.json"
)]
pub struct Cli {
    /// Collect check failures as warnings instead of aborting on the first one.
    #[arg(long)]
    pub warn: bool,

    /// Skip the uncommitted-changes preflight (the default under CI).
    #[arg(long)]
    pub skip_git: bool,

    /// Directory to search for the manifest; defaults to the current directory.
    pub directory: Option<PathBuf>,
}

impl Cli {
    /// The check-dispatch mode selected by `--warn`.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.warn {
            Mode::Warn
        } else {
            Mode::Strict
        }
    }

    /// Whether the version-control preflight should be skipped.
    ///
    /// True when `--skip-git` was passed or a recognized CI environment
    /// variable is set (the guard is redundant on CI checkouts).
    #[must_use]
    pub fn skip_guard(&self) -> bool {
        self.skip_guard_given(running_under_ci())
    }

    fn skip_guard_given(&self, under_ci: bool) -> bool {
        self.skip_git || under_ci
    }
}

fn running_under_ci() -> bool {
    ["CI", "GITHUB_ACTIONS"]
        .iter()
        .any(|name| std::env::var_os(name).is_some_and(|value| !value.is_empty()))
}
