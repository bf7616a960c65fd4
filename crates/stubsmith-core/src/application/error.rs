//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in the
//! naming rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while generating files from stubs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The stub source directory does not exist.
    #[error("Stubs directory not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The target directory is missing and could not be created.
    #[error("Target directory {} cannot be created: {reason}", path.display())]
    TargetUnwritable { path: PathBuf, reason: String },

    /// Overwrite is disabled and a generated file would replace an existing one.
    #[error("File {} already exists. To overwrite, use the --force option.", path.display())]
    FileAlreadyExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// Adapter state could not be accessed (lock poisoned, etc.).
    #[error("Filesystem adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceNotFound { path } => vec![
                format!("No stubs at: {}", path.display()),
                "Check `stubs_path` for the selected profile".into(),
                "Try: stubsmith profiles to see configured profiles".into(),
            ],
            Self::TargetUnwritable { path, .. } => vec![
                format!("Cannot create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Pass a different directory with --target".into(),
            ],
            Self::FileAlreadyExists { path } => vec![
                format!("Existing file: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Files generated before this one were kept".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read/write permissions".into(),
            ],
            Self::LockPoisoned => vec!["Retry the command".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceNotFound { .. } => ErrorCategory::NotFound,
            Self::FileAlreadyExists { .. } => ErrorCategory::Validation,
            Self::TargetUnwritable { .. } | Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
