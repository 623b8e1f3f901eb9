//! Version-control status port.

use std::path::Path;

/// The version-control state of a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VcsStatus {
    /// Whether version-control tooling could be queried for this path at all.
    pub available: bool,
    /// Whether the path has no pending local modifications. Meaningless when
    /// `available` is false.
    pub clean: bool,
}

/// Queries version control for per-path cleanliness.
///
/// Implementations never fail: an environment without usable git tooling is
/// reported as `available: false`, since the absence of version control is
/// not itself a check failure.
pub trait GitStatus: Send + Sync {
    /// Returns the status of `path` in its containing repository.
    fn status(&self, path: &Path) -> VcsStatus;
}
