//! Shared configuration loader for the gramgen generators.
//!
//! `defaults/gramgen.default.toml` is embedded into every binary so that the
//! generators run with no arguments and no mandatory external files.
//! Deployments layer a `gramgen.toml` on top of those defaults via [`Loader`]
//! before deserializing into [`GenConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use gramgen::KeywordCategories;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/gramgen.default.toml");

/// Conventional name of the per-deployment override file, looked up in the
/// working directory of the invoking build step.
pub const OVERRIDE_FILE: &str = "gramgen.toml";

/// Top-level configuration consumed by the generator binaries.
#[derive(Debug, Clone, Deserialize)]
pub struct GenConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub keywords: KeywordCategories,
}

/// Where the grammar description is read from.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub grammar: PathBuf,
}

/// Where the generated artifacts are written. The keyword pass and the
/// parser pass touch disjoint entries here.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub keyword_list: PathBuf,
    pub reserved_set: PathBuf,
    pub parser_list: PathBuf,
    pub parser_members: PathBuf,
}

/// Helper for layering deployment overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GenConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GenConfig, ConfigError> {
    Loader::new().build()
}
