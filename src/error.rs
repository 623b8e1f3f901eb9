//! Error taxonomy for a lockfile check run.

use std::path::PathBuf;

/// Exit code reported when the lockfile (or working tree) needs attention.
pub const DRIFT_EXIT_CODE: u8 = 2;

/// Exit code for fatal errors: unreadable inputs, missing tooling, or an
/// environment that mutated the manifest.
pub const FATAL_EXIT_CODE: u8 = 1;

/// Everything that can go wrong during a check run.
///
/// Variants split into two families. Fatal errors abort the run in both
/// modes and exit 1. Check failures (`UncommittedChanges`, `LockfileDrift`)
/// abort only in strict mode and carry the distinguished drift exit code so
/// callers can script against them.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// No manifest was found in the starting directory or any ancestor.
    #[error("no package.json found in {0} or any parent directory")]
    ManifestNotFound(PathBuf),

    /// A tracked file is missing from disk.
    #[error("{0} does not exist")]
    NotFound(PathBuf),

    /// A tracked file exists but is not valid JSON.
    #[error("{path} is not valid JSON: {detail}")]
    Malformed {
        /// The unparsable file.
        path: PathBuf,
        /// Parser error text.
        detail: String,
    },

    /// The package manager could not be resolved at all.
    #[error("{tool} is not available: {detail}")]
    ToolUnavailable {
        /// The tool that was probed.
        tool: String,
        /// Why resolution failed.
        detail: String,
    },

    /// The package manager ran but exited nonzero.
    #[error("lockfile regeneration failed with exit code {exit_code}: {detail}")]
    RegenerationFailed {
        /// The tool's exit code.
        exit_code: i32,
        /// Trailing stderr from the tool.
        detail: String,
    },

    /// The manifest differed between the expected and actual snapshots.
    /// Regeneration must never touch the manifest, so this signals a broken
    /// environment rather than ordinary drift. Always fatal.
    #[error("{0} was modified by lockfile regeneration; refusing to continue")]
    ManifestMutated(PathBuf),

    /// A tracked file had uncommitted modifications before regeneration.
    #[error("{0} has uncommitted changes")]
    UncommittedChanges(PathBuf),

    /// The lockfile no longer matches what regeneration produces.
    #[error("Lockfile drift detected:\n{0}")]
    LockfileDrift(String),

    /// A port-boundary failure (filesystem, git, process spawning).
    #[error("{0}")]
    External(String),
}

impl LintError {
    /// The process exit code this error maps to.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UncommittedChanges(_) | Self::LockfileDrift(_) => DRIFT_EXIT_CODE,
            _ => FATAL_EXIT_CODE,
        }
    }

    /// Returns `true` for errors that abort the run regardless of mode.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::UncommittedChanges(_) | Self::LockfileDrift(_))
    }
}
