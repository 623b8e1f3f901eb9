//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the checker core and an external
//! system (filesystem, version control, package manager). Implementations
//! live in `src/adapters/`.

pub mod filesystem;
pub mod git;
pub mod package_manager;

pub use filesystem::FileSystem;
pub use git::{GitStatus, VcsStatus};
pub use package_manager::{PackageManager, ToolOutput};
