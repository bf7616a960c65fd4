//! Generation request and its builder.

use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// A validated request to generate files for one base name.
///
/// Invariants (enforced by [`GenerationRequestBuilder::build`]):
/// - `base_name` has no surrounding whitespace and is non-empty
/// - `base_name` contains no path separator
/// - `explicit_target_dir`, when present, is non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    base_name: String,
    explicit_target_dir: Option<PathBuf>,
    overwrite: bool,
}

impl GenerationRequest {
    /// Start building a request.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Shorthand for a request with no target override and no overwrite.
    pub fn new(base_name: impl Into<String>) -> Result<Self, DomainError> {
        Self::builder().base_name(base_name).build()
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn explicit_target_dir(&self) -> Option<&Path> {
        self.explicit_target_dir.as_deref()
    }

    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// The explicit target if one was given, else `fallback`.
    pub fn resolve_target_dir<'a>(&'a self, fallback: &'a Path) -> &'a Path {
        self.explicit_target_dir().unwrap_or(fallback)
    }

    /// Re-check invariants; used after construction outside the builder.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_base_name(&self.base_name)
    }
}

/// Builder for [`GenerationRequest`].
#[derive(Debug, Default)]
pub struct GenerationRequestBuilder {
    base_name: Option<String>,
    explicit_target_dir: Option<PathBuf>,
    overwrite: bool,
}

impl GenerationRequestBuilder {
    /// Surrounding whitespace is stripped; it would end up in file names.
    pub fn base_name(mut self, name: impl Into<String>) -> Self {
        let name: String = name.into();
        self.base_name = Some(name.trim().to_owned());
        self
    }

    /// Override the profile's target directory. An empty path is ignored.
    pub fn target_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.explicit_target_dir = (!dir.as_os_str().is_empty()).then_some(dir);
        self
    }

    /// Same as [`Self::target_dir`] but accepts an optional value.
    pub fn maybe_target_dir(self, dir: Option<impl Into<PathBuf>>) -> Self {
        match dir {
            Some(dir) => self.target_dir(dir),
            None => self,
        }
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn build(self) -> Result<GenerationRequest, DomainError> {
        let base_name = self
            .base_name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        validate_base_name(&base_name)?;

        Ok(GenerationRequest {
            base_name,
            explicit_target_dir: self.explicit_target_dir,
            overwrite: self.overwrite,
        })
    }
}

fn validate_base_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidRequest {
            reason: "name cannot be empty".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(DomainError::InvalidRequest {
            reason: format!("name '{name}' cannot contain path separators"),
        });
    }
    Ok(())
}
