//! Snapshot loading of manifest and lockfile documents.

use std::path::Path;

use serde_json::Value;

use crate::error::LintError;
use crate::ports::filesystem::FileSystem;

/// Loads a structured document from `path`.
///
/// Documents are treated as opaque JSON trees; the checker never interprets
/// their schema. Each tracked file is loaded twice per run, once before
/// regeneration (the "expected" snapshot) and once after (the "actual").
///
/// # Errors
///
/// Returns [`LintError::NotFound`] when the file is missing and
/// [`LintError::Malformed`] when it exists but is not valid JSON.
pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Value, LintError> {
    if !fs.exists(path) {
        return Err(LintError::NotFound(path.to_path_buf()));
    }
    let content = fs.read_to_string(path).map_err(|e| LintError::External(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| LintError::Malformed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}
