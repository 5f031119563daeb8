//! Translator configuration
//!
//! `defaults/textile2latex.default.toml` is embedded into the binary. A user file
//! and individual CLI overrides are layered on top through [`Loader`] before the
//! result is deserialized into [`TranslatorConfig`].
//!
//! Both knobs select between the historical behavior of a construct and its
//! corrected form; neither changes the output format.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/textile2latex.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TranslatorConfig {
    pub lexer: LexerConfig,
    pub grammar: GrammarConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LexerConfig {
    pub registered_mark: RegisteredMark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct GrammarConfig {
    pub list_wrapping: ListWrapping,
}

/// Which pattern recognises the registered mark
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegisteredMark {
    /// `(R])` / `(r])`, as historically written
    #[default]
    Verbatim,
    /// `(R)` / `(r)`
    Corrected,
}

/// How a multi-item list is wrapped in `enumerate` environments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListWrapping {
    /// Each item wraps itself and the rest of the list
    #[default]
    PerItem,
    /// One environment around all items
    Outermost,
}

/// Layers user overrides over the built-in defaults
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

    /// Apply a single key/value override, e.g. `grammar.list_wrapping`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<TranslatorConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TranslatorConfig, ConfigError> {
    Loader::new().build()
}
