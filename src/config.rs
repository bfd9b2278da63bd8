//! Configuration loading
//!
//! `defaults/acc2omp.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. User files and CLI overrides are layered on
//! top of those defaults via [`Loader`] before deserializing into
//! [`Acc2OmpConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/acc2omp.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Acc2OmpConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub permissions: String,
}

impl OutputConfig {
    /// Permission bits to apply to written files, if any were configured
    pub fn permission_bits(&self) -> Result<Option<u32>, ConfigError> {
        let raw = self.permissions.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let digits = raw.strip_prefix("0o").unwrap_or(raw);
        u32::from_str_radix(digits, 8)
            .ok()
            .filter(|mode| *mode <= 0o7777)
            .map(Some)
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "output.permissions must be an octal mode, got '{}'",
                    raw
                ))
            })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Layers `acc2omp.toml` files and command-line settings over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start from `defaults/acc2omp.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a file passed with `--config`; it must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a project `acc2omp.toml` if one is present.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one key, e.g. `output.format` from `--format`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer into an [`Acc2OmpConfig`].
    pub fn build(self) -> Result<Acc2OmpConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The configuration with no files or overrides applied.
pub fn load_defaults() -> Result<Acc2OmpConfig, ConfigError> {
    Loader::new().build()
}
