//! Shared configuration loader for the linemark toolchain.
//!
//! `defaults/linemark.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`LinemarkConfig`]. The dialect section deserializes into the rule table
//! that parser and serializer share, which is how alternate dialects get
//! injected without touching code.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use linemark::{FormatError, PatternRule, RuleTable, Tag};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/linemark.default.toml");

/// Top-level configuration consumed by linemark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct LinemarkConfig {
    pub dialect: DialectConfig,
}

/// The dialect table as configuration data.
#[derive(Debug, Clone, Deserialize)]
pub struct DialectConfig {
    pub rules: Vec<RuleConfig>,
}

/// Mirrors one [`PatternRule`]; tags use the wire names (h1, h2, p, code).
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    pub start: String,
    pub tag: Tag,
    pub end: String,
}

impl TryFrom<DialectConfig> for RuleTable {
    type Error = FormatError;

    fn try_from(config: DialectConfig) -> Result<Self, Self::Error> {
        RuleTable::try_from(&config)
    }
}

impl TryFrom<&DialectConfig> for RuleTable {
    type Error = FormatError;

    fn try_from(config: &DialectConfig) -> Result<Self, Self::Error> {
        let rules = config
            .rules
            .iter()
            .map(|rule| PatternRule::new(&rule.start, rule.tag, &rule.end))
            .collect();
        RuleTable::new(rules)
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

    /// Apply a single key/value override (useful for caller settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<LinemarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LinemarkConfig, ConfigError> {
    Loader::new().build()
}
