//! Stub Processor - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Validate the request and resolve the target directory
//! 2. Enumerate stubs (sorted by relative path for a stable order)
//! 3. Rewrite each stub's file name and first declaration
//! 4. Write to the mirrored location under the overwrite policy
//!
//! Processing stops at the first error. Files written before the failure are
//! left on disk; there is no rollback.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        DomainValidator as validator, GeneratedFile, GenerationConfig, GenerationRequest,
        StubFile, derive_file_name,
    },
    error::{StubsmithError, StubsmithResult},
};

/// Summary of a completed generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Directory the stub tree was mirrored into.
    pub target_dir: PathBuf,
    /// Files written, in processing order.
    pub written: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn count(&self) -> usize {
        self.written.len()
    }
}

/// Generates concrete files from a directory of stubs.
pub struct StubProcessor {
    filesystem: Box<dyn Filesystem>,
}

impl StubProcessor {
    /// Create a new processor over the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use stubsmith_core::application::{StubProcessor, ports::Filesystem};
    /// # fn demo(filesystem: Box<dyn Filesystem>) {
    /// let processor = StubProcessor::new(filesystem);
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate files and return how many were written.
    pub fn generate(
        &self,
        config: &GenerationConfig,
        request: &GenerationRequest,
    ) -> StubsmithResult<usize> {
        self.generate_report(config, request)
            .map(|report| report.count())
    }

    /// Generate files and return the list of written paths.
    #[instrument(
        skip_all,
        fields(
            name = %request.base_name(),
            stubs = %config.stub_source_dir().display(),
            overwrite = request.overwrite()
        )
    )]
    pub fn generate_report(
        &self,
        config: &GenerationConfig,
        request: &GenerationRequest,
    ) -> StubsmithResult<GenerationReport> {
        let target_dir = self.prepare(config, request)?;
        self.ensure_target_dir(&target_dir)?;

        let stubs = self.read_stubs(config.stub_source_dir())?;
        info!(stubs = stubs.len(), target = %target_dir.display(), "Generating from stubs");

        let mut written = Vec::with_capacity(stubs.len());
        for stub in &stubs {
            let file = transform(stub, &target_dir, config, request);
            self.write(&file, request.overwrite())?;
            written.push(file.target_path);
        }

        info!(files = written.len(), "Generation completed");
        Ok(GenerationReport {
            target_dir,
            written,
        })
    }

    /// Compute what [`Self::generate`] would write, without touching the
    /// target tree.
    ///
    /// Each planned file carries an `exists` flag so callers can report
    /// conflicts up front.
    #[instrument(skip_all, fields(name = %request.base_name()))]
    pub fn plan(
        &self,
        config: &GenerationConfig,
        request: &GenerationRequest,
    ) -> StubsmithResult<Vec<GeneratedFile>> {
        let target_dir = self.prepare(config, request)?;
        let stubs = self.read_stubs(config.stub_source_dir())?;

        Ok(stubs
            .iter()
            .map(|stub| {
                let file = transform(stub, &target_dir, config, request);
                let exists = self.filesystem.exists(&file.target_path);
                file.with_exists(exists)
            })
            .collect())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Validate inputs and resolve the target directory.
    fn prepare(
        &self,
        config: &GenerationConfig,
        request: &GenerationRequest,
    ) -> StubsmithResult<PathBuf> {
        validator::validate_request(request).map_err(StubsmithError::Domain)?;
        validator::validate_config(config).map_err(StubsmithError::Domain)?;

        let source = config.stub_source_dir();
        if !self.filesystem.is_dir(source) {
            return Err(ApplicationError::SourceNotFound {
                path: source.to_path_buf(),
            }
            .into());
        }

        let target_dir = request.resolve_target_dir(config.target_base_dir());
        if target_dir.as_os_str().is_empty() {
            return Err(ApplicationError::TargetUnwritable {
                path: PathBuf::new(),
                reason: "no target directory configured".into(),
            }
            .into());
        }

        Ok(target_dir.to_path_buf())
    }

    fn ensure_target_dir(&self, target_dir: &Path) -> StubsmithResult<()> {
        if self.filesystem.is_dir(target_dir) {
            return Ok(());
        }

        debug!(path = %target_dir.display(), "Creating target directory");
        self.filesystem.create_dir_all(target_dir).map_err(|e| {
            ApplicationError::TargetUnwritable {
                path: target_dir.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Enumerate stubs in a deterministic (lexicographic path) order.
    fn read_stubs(&self, source: &Path) -> StubsmithResult<Vec<StubFile>> {
        let mut stubs = self.filesystem.list_files(source)?;
        stubs.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
        Ok(stubs)
    }

    /// Write one file, honouring the overwrite policy.
    fn write(&self, file: &GeneratedFile, overwrite: bool) -> StubsmithResult<()> {
        let dir = file.target_dir();
        if !dir.as_os_str().is_empty() && !self.filesystem.is_dir(dir) {
            self.filesystem.create_dir_all(dir)?;
        }

        if !overwrite && self.filesystem.exists(&file.target_path) {
            warn!(path = %file.target_path.display(), "Target file exists, aborting");
            return Err(ApplicationError::FileAlreadyExists {
                path: file.target_path.clone(),
            }
            .into());
        }

        self.filesystem.write_file(&file.target_path, &file.content)?;
        debug!(
            source = %file.source.display(),
            path = %file.target_path.display(),
            bytes = file.len(),
            "Wrote file"
        );
        Ok(())
    }
}

/// Apply both rewrites to one stub and place it under `target_dir`.
fn transform(
    stub: &StubFile,
    target_dir: &Path,
    config: &GenerationConfig,
    request: &GenerationRequest,
) -> GeneratedFile {
    let suffixes = config.preserve_suffixes();
    let base_name = request.base_name();

    let file_name = derive_file_name(&stub.file_name(), base_name, suffixes);
    let content = config.scanner().rewrite(stub.content(), base_name, suffixes);

    let relative_dir = stub.relative_dir();
    let dir = if relative_dir.as_os_str().is_empty() {
        target_dir.to_path_buf()
    } else {
        target_dir.join(relative_dir)
    };

    GeneratedFile::new(stub.relative_path(), dir.join(file_name), content)
}
