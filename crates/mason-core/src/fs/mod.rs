//! Filesystem port and its adapters.
//!
//! The scaffolding services never touch `std::fs` directly; they go through
//! the [`Filesystem`] trait so the same code paths run against the real disk
//! in production and against [`MemoryFilesystem`] (or a mockall mock) in
//! tests.
//!
//! Implemented by:
//! - [`LocalFilesystem`] (production, `std::fs`)
//! - [`MemoryFilesystem`] (testing)

use std::path::{Path, PathBuf};

use crate::error::ScaffoldResult;

pub mod local;
pub mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;

/// Port for filesystem operations.
///
/// Paths are interpreted by the adapter; services pass through whatever the
/// caller resolved (absolute in the CLI, plain relative paths in tests).
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Read an entire file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List the direct children of a directory, sorted by path.
    fn read_dir(&self, path: &Path) -> ScaffoldResult<Vec<PathBuf>>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ScaffoldResult<()>;
}
