//! The sequential check pipeline.
//!
//! Resolving → Reading(expected) → Guarding → Regenerating → Reading(actual)
//! → Comparing → Reporting. Every external call is attempted exactly once;
//! recovery from transient failures is the caller's re-run.

use std::path::PathBuf;

use crate::context::ServiceContext;
use crate::error::LintError;
use crate::report::{report, RunOutcome};
use crate::verify::{Mode, Verifier};
use crate::{analyze, guard, regen, resolve, snapshot};

/// Configuration for one check run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory to start the manifest search from.
    pub start_dir: PathBuf,
    /// Strict or warn dispatch for check failures.
    pub mode: Mode,
    /// Whether to skip the version-control preflight.
    pub skip_guard: bool,
}

/// Executes one check run against the given ports.
///
/// Exactly one lockfile regeneration happens per run, and the regenerated
/// lockfile is left on disk regardless of the outcome.
///
/// # Errors
///
/// Fatal errors (unreadable inputs, missing tooling, a mutated manifest)
/// abort in both modes. In strict mode the first failing check aborts too.
pub fn run(ctx: &ServiceContext, config: &RunConfig) -> Result<RunOutcome, LintError> {
    let paths = resolve::resolve(ctx.fs.as_ref(), &config.start_dir)?;
    println!("Manifest: {}", paths.manifest_path.display());
    println!(
        "Lockfile: {}{}",
        paths.lockfile_path.display(),
        if paths.is_workspace_root { " (workspace root)" } else { "" }
    );

    let expected_manifest = snapshot::load(ctx.fs.as_ref(), &paths.manifest_path)?;
    let expected_lockfile = snapshot::load(ctx.fs.as_ref(), &paths.lockfile_path)?;

    let mut verifier = Verifier::new(config.mode);
    guard::preflight(ctx, &mut verifier, &paths, config.skip_guard)?;

    regen::regenerate(ctx, &paths.lockfile_dir)?;

    let actual_manifest = snapshot::load(ctx.fs.as_ref(), &paths.manifest_path)?;
    let actual_lockfile = snapshot::load(ctx.fs.as_ref(), &paths.lockfile_path)?;

    analyze::check_manifest(&expected_manifest, &actual_manifest, &paths.manifest_path)?;
    analyze::check_lockfile(
        &mut verifier,
        &expected_lockfile,
        &actual_lockfile,
        &paths.lockfile_path,
    )?;

    Ok(report(&verifier.into_issues()))
}
