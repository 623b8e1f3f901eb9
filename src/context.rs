//! Service context bundling all port trait objects.

use crate::ports::filesystem::FileSystem;
use crate::ports::git::GitStatus;
use crate::ports::package_manager::PackageManager;

/// Bundles the checker's port trait objects into a single context.
///
/// Each field provides access to one external boundary. The live
/// constructor wires real adapters; tests inject fakes through [`Self::with`].
pub struct ServiceContext {
    /// Filesystem for reading tracked files.
    pub fs: Box<dyn FileSystem>,
    /// Version-control status queries.
    pub git: Box<dyn GitStatus>,
    /// Package manager for lockfile regeneration.
    pub pkg: Box<dyn PackageManager>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for filesystem, git, and npm.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::{LiveFileSystem, LiveGitStatus, NpmClient};

        Self {
            fs: Box::new(LiveFileSystem),
            git: Box::new(LiveGitStatus),
            pkg: Box::new(NpmClient::new()),
        }
    }

    /// Creates a context from explicit port implementations.
    #[must_use]
    pub fn with(
        fs: Box<dyn FileSystem>,
        git: Box<dyn GitStatus>,
        pkg: Box<dyn PackageManager>,
    ) -> Self {
        Self { fs, git, pkg }
    }
}
