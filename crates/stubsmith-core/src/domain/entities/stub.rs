//! Stub inputs and generated outputs.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A template file read from the stub source tree.
///
/// `relative_path` is relative to the stub source directory and includes the
/// file name. Never mutated once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubFile {
    relative_path: PathBuf,
    content: Vec<u8>,
}

impl StubFile {
    pub fn new(relative_path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Directory part of the relative path; empty for top-level stubs.
    pub fn relative_dir(&self) -> &Path {
        self.relative_path.parent().unwrap_or(Path::new(""))
    }

    /// Leaf file name, lossily decoded.
    pub fn file_name(&self) -> String {
        self.relative_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

/// The result of transforming one [`StubFile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Stub this file was generated from (relative to the stub directory).
    pub source: PathBuf,
    /// Full output path (target directory + mirrored relative directory).
    pub target_path: PathBuf,
    /// Whether `target_path` already existed when the plan was made.
    pub exists: bool,
    #[serde(skip)]
    pub content: Vec<u8>,
}

impl GeneratedFile {
    pub fn new(source: impl Into<PathBuf>, target_path: impl Into<PathBuf>, content: Vec<u8>) -> Self {
        Self {
            source: source.into(),
            target_path: target_path.into(),
            exists: false,
            content,
        }
    }

    pub fn with_exists(mut self, exists: bool) -> Self {
        self.exists = exists;
        self
    }

    /// Parent directory of the output file.
    pub fn target_dir(&self) -> &Path {
        self.target_path.parent().unwrap_or(Path::new(""))
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
