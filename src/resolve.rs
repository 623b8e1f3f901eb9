//! Environment resolution: locating the manifest and its lockfile.

use std::path::{Path, PathBuf};

use crate::error::LintError;
use crate::ports::filesystem::FileSystem;

/// The dependency manifest file name.
pub const MANIFEST_FILE: &str = "package.json";

/// The generated lockfile file name.
pub const LOCKFILE_FILE: &str = "package-lock.json";

/// Resolved filesystem facts for one run. Computed once, immutable after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathContext {
    /// Absolute path of the manifest.
    pub manifest_path: PathBuf,
    /// Directory owning the manifest.
    pub package_dir: PathBuf,
    /// Absolute path of the lockfile.
    pub lockfile_path: PathBuf,
    /// Directory holding the lockfile; the regeneration working directory.
    pub lockfile_dir: PathBuf,
    /// True when the lockfile lives above the package, i.e. the package is a
    /// workspace member sharing a workspace-root lockfile.
    pub is_workspace_root: bool,
}

/// Locates the nearest manifest above `start` and the lockfile it belongs to.
///
/// The manifest is found by walking ancestor directories up to the
/// filesystem root. The lockfile is the nearest `package-lock.json` at or
/// above the manifest's directory; in an npm workspace that is the workspace
/// root rather than the member package. When no lockfile exists anywhere the
/// path defaults to the package directory so the snapshot reader reports the
/// missing file.
///
/// # Errors
///
/// Returns [`LintError::ManifestNotFound`] when no ancestor of `start`
/// contains a manifest.
pub fn resolve(fs: &dyn FileSystem, start: &Path) -> Result<PathContext, LintError> {
    let package_dir = start
        .ancestors()
        .find(|dir| fs.exists(&dir.join(MANIFEST_FILE)))
        .map(Path::to_path_buf)
        .ok_or_else(|| LintError::ManifestNotFound(start.to_path_buf()))?;

    let lockfile_dir = package_dir
        .ancestors()
        .find(|dir| fs.exists(&dir.join(LOCKFILE_FILE)))
        .map_or_else(|| package_dir.clone(), Path::to_path_buf);

    Ok(PathContext {
        manifest_path: package_dir.join(MANIFEST_FILE),
        lockfile_path: lockfile_dir.join(LOCKFILE_FILE),
        is_workspace_root: lockfile_dir != package_dir,
        package_dir,
        lockfile_dir,
    })
}
