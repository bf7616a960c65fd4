//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`GenerationConfig`] resolved from a single profile.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--target`, handled at the call-site, not here)
//! 2. Environment variables: `STUBSMITH_PROFILES__<KEY>__STUBS_PATH`, ...
//! 3. Config file: `--config FILE`, otherwise `.stubsmith.toml` in the
//!    current directory and the user config file
//! 4. Built-in defaults (always present)
//!
//! Relative paths in a profile are resolved against the current directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stubsmith_core::domain::{DEFAULT_KEYWORD, GenerationConfig};

use crate::cli::DEFAULT_PROFILE;
use crate::error::{CliError, CliResult};

/// File name used by `stubsmith init --local`.
pub const LOCAL_CONFIG_FILE: &str = ".stubsmith.toml";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "STUBSMITH";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// Stub profiles, keyed by the value passed to `--stub-id`.
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub no_color: bool,
}

/// One named stub profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Directory containing the stub tree.
    pub stubs_path: PathBuf,
    /// Directory generated files are written into unless `--target` is given.
    #[serde(default = "default_target_path")]
    pub target_path: PathBuf,
    #[serde(default)]
    pub preserve_suffixes: Vec<String>,
    #[serde(default = "default_keywords")]
    pub declaration_keywords: Vec<String>,
}

fn default_target_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_keywords() -> Vec<String> {
    vec![DEFAULT_KEYWORD.to_owned()]
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            stubs_path: PathBuf::from("stubs"),
            target_path: default_target_path(),
            preserve_suffixes: vec!["Controller".into(), "Service".into()],
            declaration_keywords: default_keywords(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            profiles: BTreeMap::from([(DEFAULT_PROFILE.to_owned(), ProfileConfig::default())]),
        }
    }
}

impl AppConfig {
    /// Load configuration by layering defaults, files and environment.
    ///
    /// `config_file` is the path the user passed via `--config`.  When given
    /// it must exist; the implicit locations are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let toml_file = |path: &Path| File::from(path).format(FileFormat::Toml);
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                builder = builder.add_source(toml_file(path.as_path()).required(true));
            }
            None => {
                builder = builder
                    .add_source(toml_file(&Self::config_path()).required(false))
                    .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE)).required(false));
            }
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<Self>()?;

        debug!(profiles = config.profiles.len(), "Configuration loaded");
        Ok(config)
    }

    /// Resolve a profile into the core's [`GenerationConfig`].
    pub fn profile(&self, key: &str) -> CliResult<GenerationConfig> {
        let profile = self
            .profiles
            .get(key)
            .ok_or_else(|| CliError::ProfileNotFound {
                key: key.to_owned(),
                available: self.profiles.keys().cloned().collect(),
            })?;

        if profile.stubs_path.as_os_str().is_empty() {
            return Err(CliError::ConfigError {
                message: format!("profile '{key}' has an empty stubs_path"),
                source: None,
            });
        }

        let config = GenerationConfig::new(&profile.stubs_path, &profile.target_path)
            .with_preserve_suffixes(profile.preserve_suffixes.iter().cloned())
            .with_declaration_keywords(profile.declaration_keywords.iter().cloned())
            .map_err(|e| CliError::Core(e.into()))?;

        Ok(config)
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stubsmith.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "stubsmith", "stubsmith")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file that wins for this invocation: the explicit one, a local
    /// `.stubsmith.toml`, or the user config file.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        if let Some(path) = config_file {
            return path.clone();
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return local;
        }
        Self::config_path()
    }
}
