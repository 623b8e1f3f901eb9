//! Package-manager port for lockfile regeneration.

use std::path::Path;

/// The outcome of a package-manager invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// The exit code of the process.
    pub exit_code: i32,
    /// The captured standard error, where npm reports failures.
    pub stderr: String,
}

/// Drives the external package manager.
///
/// The checker only needs two operations: a version probe (to confirm the
/// tool is resolvable before mutating anything) and a lock-only install
/// that rewrites the lockfile without populating a package cache.
pub trait PackageManager: Send + Sync {
    /// Returns the package manager's version string.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be resolved or spawned.
    fn version(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Regenerates the lockfile in `cwd` without installing packages.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be spawned. A nonzero exit is
    /// reported through [`ToolOutput`], not as an error.
    fn lock_only(
        &self,
        cwd: &Path,
    ) -> Result<ToolOutput, Box<dyn std::error::Error + Send + Sync>>;
}
