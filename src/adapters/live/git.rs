//! Live git adapter using the `git` CLI.

use std::path::Path;
use std::process::Command;

use crate::ports::git::{GitStatus, VcsStatus};

/// Live git adapter that shells out to `git status --porcelain`.
pub struct LiveGitStatus;

impl GitStatus for LiveGitStatus {
    fn status(&self, path: &Path) -> VcsStatus {
        let cwd = path.parent().unwrap_or_else(|| Path::new("."));
        let output = Command::new("git")
            .args(["status", "--porcelain", "--"])
            .arg(path)
            .current_dir(cwd)
            .output();

        match output {
            // Nonzero exit means git itself could not answer (not a
            // repository, corrupt index); treat the same as a missing binary.
            Ok(out) if out.status.success() => VcsStatus {
                available: true,
                clean: out.stdout.iter().all(u8::is_ascii_whitespace),
            },
            _ => VcsStatus { available: false, clean: false },
        }
    }
}
