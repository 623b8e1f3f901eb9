//! Filesystem port for file I/O operations.

use std::path::Path;

/// Provides read access to the filesystem.
///
/// The checker itself never writes; the only on-disk mutation is performed
/// by the invoked package manager. Abstracting reads allows the pipeline to
/// be tested against an in-memory tree.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;
}
