//! Live adapters backed by the real filesystem and external tools.

pub mod filesystem;
pub mod git;
pub mod npm;

pub use filesystem::LiveFileSystem;
pub use git::LiveGitStatus;
pub use npm::NpmClient;
