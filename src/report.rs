//! Run outcome reporting and exit-code selection.

use crate::error::DRIFT_EXIT_CODE;

/// The terminal state of a completed (non-aborted) run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No issues: the lockfile matches what regeneration produces.
    InSync,
    /// One or more issues were collected (warn mode only).
    IssuesReported,
}

impl RunOutcome {
    /// The process exit code for this outcome.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::InSync => 0,
            Self::IssuesReported => DRIFT_EXIT_CODE,
        }
    }
}

/// Prints the end-of-run report and selects the outcome.
///
/// An empty issue list reports "in sync". Otherwise every issue is printed
/// along with a reminder that the lockfile on disk has already been
/// regenerated, so committing it is usually the whole fix.
#[must_use]
pub fn report(issues: &[String]) -> RunOutcome {
    if issues.is_empty() {
        println!("Lockfile is in sync with the manifest.");
        return RunOutcome::InSync;
    }

    eprintln!("{} issue(s) found:", issues.len());
    for issue in issues {
        for line in issue.lines() {
            eprintln!("  {line}");
        }
    }
    eprintln!("The lockfile on disk was regenerated; review and commit it to resolve drift.");
    RunOutcome::IssuesReported
}
