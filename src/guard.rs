//! Preflight guard: refuse to mask pre-existing local edits as drift.

use crate::context::ServiceContext;
use crate::error::LintError;
use crate::resolve::PathContext;
use crate::verify::Verifier;

/// Checks the manifest and lockfile for uncommitted modifications.
///
/// Regeneration rewrites the lockfile in place, so a dirty lockfile before
/// the run would make local edits indistinguishable from drift. When version
/// control cannot be queried for a path the check is skipped for that path
/// with a warning; absence of a repository is not drift. With `skip` set the
/// guard performs no queries at all.
///
/// # Errors
///
/// In strict mode, returns [`LintError::UncommittedChanges`] for the first
/// dirty path.
pub fn preflight(
    ctx: &ServiceContext,
    verifier: &mut Verifier,
    paths: &PathContext,
    skip: bool,
) -> Result<(), LintError> {
    if skip {
        println!("Skipping version-control preflight (--skip-git or CI).");
        return Ok(());
    }

    for path in [&paths.manifest_path, &paths.lockfile_path] {
        let status = ctx.git.status(path);
        if !status.available {
            eprintln!(
                "warning: version control unavailable for {}; skipping dirty check",
                path.display()
            );
            continue;
        }
        verifier.check(status.clean, || LintError::UncommittedChanges(path.clone()))?;
    }
    Ok(())
}
