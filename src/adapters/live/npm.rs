//! Live npm adapter, optionally routed through the `mise` pinning proxy.

use std::path::Path;
use std::process::Command;

use crate::ports::package_manager::{PackageManager, ToolOutput};

/// Live package-manager adapter that shells out to `npm`.
///
/// When the `mise` environment-pinning proxy is resolvable, npm is invoked
/// through `mise exec -- npm` so the pinned node/npm versions apply.
pub struct NpmClient {
    via_mise: bool,
}

impl NpmClient {
    /// Creates a client, probing once for a usable `mise` proxy.
    #[must_use]
    pub fn new() -> Self {
        let via_mise = Command::new("mise")
            .arg("--version")
            .output()
            .is_ok_and(|out| out.status.success());
        Self { via_mise }
    }

    fn npm(&self) -> Command {
        if self.via_mise {
            let mut cmd = Command::new("mise");
            cmd.args(["exec", "--", "npm"]);
            cmd
        } else {
            Command::new("npm")
        }
    }
}

impl Default for NpmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageManager for NpmClient {
    fn version(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let output = self.npm().arg("--version").output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("npm --version failed: {stderr}").into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn lock_only(
        &self,
        cwd: &Path,
    ) -> Result<ToolOutput, Box<dyn std::error::Error + Send + Sync>> {
        let output = self.npm().args(["install", "--package-lock-only"]).current_dir(cwd).output()?;
        Ok(ToolOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
