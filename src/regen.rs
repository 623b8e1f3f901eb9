//! Regeneration driver: rewrite the lockfile via the package manager.

use std::path::Path;

use crate::context::ServiceContext;
use crate::error::LintError;

/// Lines of tool stderr carried into a regeneration-failure error.
const STDERR_TAIL_LINES: usize = 10;

/// Regenerates the lockfile in `lockfile_dir` in lock-only mode.
///
/// The tool's version is resolved first so a missing package manager fails
/// before anything on disk changes. There is no fallback: regeneration is
/// the detection mechanism itself. On success the lockfile on disk has been
/// rewritten, whether or not it differs from what was there before.
///
/// # Errors
///
/// Returns [`LintError::ToolUnavailable`] when the package manager cannot be
/// resolved and [`LintError::RegenerationFailed`] (carrying the tail of the
/// tool's stderr) when it exits nonzero.
pub fn regenerate(ctx: &ServiceContext, lockfile_dir: &Path) -> Result<(), LintError> {
    let version = ctx.pkg.version().map_err(|e| LintError::ToolUnavailable {
        tool: "npm".to_string(),
        detail: e.to_string(),
    })?;
    println!("Regenerating lockfile with npm {version} (lock-only)...");

    let output = ctx
        .pkg
        .lock_only(lockfile_dir)
        .map_err(|e| LintError::External(e.to_string()))?;
    if output.exit_code != 0 {
        return Err(LintError::RegenerationFailed {
            exit_code: output.exit_code,
            detail: stderr_tail(&output.stderr),
        });
    }
    Ok(())
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.trim().lines().collect();
    if lines.is_empty() {
        return "(no output)".to_string();
    }
    let skip = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[skip..].join("\n")
}
