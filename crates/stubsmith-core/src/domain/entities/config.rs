//! Resolved generation configuration.
//!
//! A `GenerationConfig` is what a named profile resolves to. It is built once
//! per invocation by the caller (the CLI resolves profiles from its config
//! file) and is immutable for the duration of a run.

use std::path::{Path, PathBuf};

use crate::domain::{
    declaration::DeclarationScanner,
    error::DomainError,
    suffix::PreserveSuffixes,
};

/// Where stubs come from, where generated files go, and how names are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    stub_source_dir: PathBuf,
    target_base_dir: PathBuf,
    preserve_suffixes: PreserveSuffixes,
    scanner: DeclarationScanner,
}

impl GenerationConfig {
    /// Config with the default `class` keyword and no preserve suffixes.
    pub fn new(stub_source_dir: impl Into<PathBuf>, target_base_dir: impl Into<PathBuf>) -> Self {
        Self {
            stub_source_dir: stub_source_dir.into(),
            target_base_dir: target_base_dir.into(),
            preserve_suffixes: PreserveSuffixes::empty(),
            scanner: DeclarationScanner::default(),
        }
    }

    /// Replace the preserve suffixes (normalised on the way in).
    pub fn with_preserve_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preserve_suffixes = PreserveSuffixes::normalize(suffixes);
        self
    }

    /// Replace the declaration keywords.
    pub fn with_declaration_keywords<I, S>(mut self, keywords: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scanner = DeclarationScanner::new(keywords)?;
        Ok(self)
    }

    pub fn stub_source_dir(&self) -> &Path {
        &self.stub_source_dir
    }

    pub fn target_base_dir(&self) -> &Path {
        &self.target_base_dir
    }

    pub fn preserve_suffixes(&self) -> &PreserveSuffixes {
        &self.preserve_suffixes
    }

    pub fn scanner(&self) -> &DeclarationScanner {
        &self.scanner
    }

    pub fn declaration_keywords(&self) -> &[String] {
        self.scanner.keywords()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new("stubs", ".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_KEYWORD;

    #[test]
    fn defaults_to_class_keyword() {
        let cfg = GenerationConfig::new("stubs", "out");
        assert_eq!(cfg.declaration_keywords(), [DEFAULT_KEYWORD]);
        assert!(cfg.preserve_suffixes().is_empty());
    }

    #[test]
    fn suffixes_are_normalised() {
        let cfg = GenerationConfig::new("stubs", "out")
            .with_preserve_suffixes(["Service", "ApiService", "Service"]);
        assert_eq!(cfg.preserve_suffixes().as_slice(), ["ApiService", "Service"]);
    }

    #[test]
    fn bad_keyword_is_rejected() {
        let result = GenerationConfig::new("stubs", "out").with_declaration_keywords(["cla ss"]);
        assert!(result.is_err());
    }
}
