//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stubsmith-adapters` crate provides implementations.

use crate::domain::StubFile;
use crate::error::StubsmithResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stubsmith_adapters::filesystem::LocalFilesystem` (production)
/// - `stubsmith_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `list_files` returns paths relative to `root`; ordering is not part of
///   the contract (the processor sorts)
/// - `write_file` creates or truncates; the overwrite policy lives in the
///   processor, not here
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StubsmithResult<()>;

    /// Recursively read every file under `root`.
    fn list_files(&self, root: &Path) -> StubsmithResult<Vec<StubFile>>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &[u8]) -> StubsmithResult<()>;
}
