//! Divergence analysis between expected and actual snapshots.

use std::path::Path;

use serde_json::Value;

use crate::diff::changed_lines;
use crate::error::LintError;
use crate::verify::Verifier;

/// Known-noisy substring in lockfile diffs: some npm versions reorder or
/// re-emit optional peer-dependency bookkeeping nondeterministically.
const PEER_NOISE: &str = "peer:";

/// Verifies the manifest was untouched by regeneration.
///
/// Deep structural equality; map key order is insignificant. Any difference
/// is fatal in both modes, since lock-only regeneration writing to the
/// manifest means the environment is broken, not that the lockfile drifted.
///
/// # Errors
///
/// Returns [`LintError::ManifestMutated`] when the snapshots differ.
pub fn check_manifest(expected: &Value, actual: &Value, path: &Path) -> Result<(), LintError> {
    if expected == actual {
        Ok(())
    } else {
        Err(LintError::ManifestMutated(path.to_path_buf()))
    }
}

/// Compares lockfile snapshots, tolerating peer-dependency noise.
///
/// Unequal snapshots are rendered to a structural diff and every changed
/// line containing `peer:` is discarded. Lines that survive the filter are
/// real drift and route through the verifier. When the filter eats every
/// line, only tolerated noise changed: an advisory note is printed and no
/// issue is recorded. The filter is a substring heuristic; a genuine change
/// whose line happens to mention `peer:` would be masked.
///
/// # Errors
///
/// In strict mode, returns [`LintError::LockfileDrift`] when filtered
/// changes remain.
pub fn check_lockfile(
    verifier: &mut Verifier,
    expected: &Value,
    actual: &Value,
    path: &Path,
) -> Result<(), LintError> {
    if expected == actual {
        return Ok(());
    }

    let filtered: Vec<String> = changed_lines(expected, actual)
        .into_iter()
        .filter(|line| !line.contains(PEER_NOISE))
        .collect();

    if filtered.is_empty() {
        eprintln!(
            "warning: {} changed only in optional peer-dependency bookkeeping; \
             consider committing the regenerated lockfile after review",
            path.display()
        );
        return Ok(());
    }

    verifier.check(false, || LintError::LockfileDrift(filtered.join("\n")))
}
