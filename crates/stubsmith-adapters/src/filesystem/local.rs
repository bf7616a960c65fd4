//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::Path;

use tracing::{debug, instrument};
use walkdir::WalkDir;

use stubsmith_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::StubFile,
    error::{StubsmithError, StubsmithResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> StubsmithResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    #[instrument(skip(self), fields(root = %root.display()))]
    fn list_files(&self, root: &Path) -> StubsmithResult<Vec<StubFile>> {
        let mut stubs = Vec::new();

        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                StubsmithError::from(ApplicationError::FilesystemError {
                    path,
                    reason: format!("Failed to walk directory: {e}"),
                })
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(root).map_err(|_| StubsmithError::Internal {
                message: format!("{} is not under {}", path.display(), root.display()),
            })?;
            let content = std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))?;

            debug!(stub = %relative.display(), bytes = content.len(), "Found stub");
            stubs.push(StubFile::new(relative, content));
        }

        Ok(stubs)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> StubsmithResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StubsmithError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn list_files_returns_relative_paths_and_content() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("sub/dir")).unwrap();
        fs::write(temp.path().join("FooController.php"), "class FooController {}").unwrap();
        fs::write(temp.path().join("sub/dir/Thing.php"), "class Thing {}").unwrap();

        let stubs = LocalFilesystem::new().list_files(temp.path()).unwrap();

        let paths: Vec<PathBuf> = stubs.iter().map(|s| s.relative_path().to_path_buf()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("FooController.php"),
                PathBuf::from("sub/dir/Thing.php"),
            ]
        );
        assert_eq!(stubs[1].content(), b"class Thing {}");
    }

    #[test]
    fn list_files_skips_empty_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("empty")).unwrap();

        let stubs = LocalFilesystem::new().list_files(temp.path()).unwrap();
        assert!(stubs.is_empty());
    }

    #[test]
    fn list_files_on_missing_dir_is_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let err = LocalFilesystem::new().list_files(&missing).unwrap_err();
        assert!(matches!(
            err,
            StubsmithError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn write_file_truncates_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Out.php");
        fs::write(&path, "a much longer original body").unwrap();

        LocalFilesystem::new().write_file(&path, b"short").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"short");
    }

    #[test]
    fn write_into_missing_parent_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing/Out.php");

        let err = LocalFilesystem::new().write_file(&path, b"x").unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
    }

    #[test]
    fn create_dir_all_and_is_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b/c");
        let fs_adapter = LocalFilesystem::new();

        assert!(!fs_adapter.is_dir(&nested));
        fs_adapter.create_dir_all(&nested).unwrap();
        assert!(fs_adapter.is_dir(&nested));
        assert!(fs_adapter.exists(&nested));
    }
}
