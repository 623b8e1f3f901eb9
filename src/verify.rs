//! Mode-gated check dispatch.

use crate::error::LintError;

/// How failing checks are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The first failing check aborts the run.
    Strict,
    /// Failing checks are collected and reported at the end of the run.
    Warn,
}

/// Dispatches check failures according to the run's mode.
///
/// Constructed once from the mode flag; every check in the pipeline routes
/// through [`Verifier::check`] so strict/warn behavior is decided in exactly
/// one place. Fatal errors never route through here.
#[derive(Debug)]
pub struct Verifier {
    mode: Mode,
    issues: Vec<String>,
}

impl Verifier {
    /// Creates a verifier for the given mode with no issues recorded.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self { mode, issues: Vec::new() }
    }

    /// Records a check result.
    ///
    /// A passing check (`ok == true`) is a no-op. A failing check raises in
    /// strict mode and appends the error's message to the issue list in warn
    /// mode.
    ///
    /// # Errors
    ///
    /// In strict mode, returns the error produced by `err`.
    pub fn check(
        &mut self,
        ok: bool,
        err: impl FnOnce() -> LintError,
    ) -> Result<(), LintError> {
        if ok {
            return Ok(());
        }
        match self.mode {
            Mode::Strict => Err(err()),
            Mode::Warn => {
                self.issues.push(err().to_string());
                Ok(())
            }
        }
    }

    /// The issues collected so far (always empty in strict mode).
    #[must_use]
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    /// Consumes the verifier, yielding the collected issues.
    #[must_use]
    pub fn into_issues(self) -> Vec<String> {
        self.issues
    }
}
