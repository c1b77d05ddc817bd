//! Shared configuration loader for the mdjson toolchain.
//!
//! `defaults/mdjson.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`MdjsonConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdjson_convert::pandoc::PandocEngine;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const DEFAULT_TOML: &str = include_str!("../defaults/mdjson.default.toml");

/// Top-level configuration consumed by mdjson applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdjsonConfig {
    pub convert: ConvertConfig,
}

/// Conversion behavior knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub check_reversibility: bool,
    pub json: JsonConfig,
    pub pandoc: PandocConfig,
}

/// Simplified-JSON output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub indent: usize,
}

/// Settings for the pandoc subprocess engine.
#[derive(Debug, Clone, Deserialize)]
pub struct PandocConfig {
    #[serde(default)]
    pub binary: Option<String>,
    pub timeout_secs: u64,
}

impl From<&PandocConfig> for PandocEngine {
    fn from(config: &PandocConfig) -> Self {
        let engine = PandocEngine::new()
            .with_timeout(Duration::from_secs(config.timeout_secs));
        match &config.binary {
            Some(path) => engine.with_binary(path),
            None => engine,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdjsonConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdjsonConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.convert.check_reversibility);
        assert_eq!(config.convert.json.indent, 2);
        assert_eq!(config.convert.pandoc.timeout_secs, 30);
        assert!(config.convert.pandoc.binary.is_none());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("convert.json.indent", 4i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.convert.json.indent, 4);
    }

    #[test]
    fn supports_binary_override() {
        let config = Loader::new()
            .set_override("convert.pandoc.binary", "/opt/pandoc")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.convert.pandoc.binary.as_deref(), Some("/opt/pandoc"));
    }

    #[test]
    fn pandoc_config_converts_to_an_engine() {
        let config = load_defaults().expect("defaults to deserialize");
        let _engine: PandocEngine = (&config.convert.pandoc).into();
    }
}
