//! Parser configuration.
//!
//! Options are read from a TOML file with kebab-case keys:
//!
//! ```toml
//! require-type-resolver = true
//! whitespace = "unicode"   # or "ascii"
//! ```
//!
//! [`ParserConfig::load_user`] looks for `phpdoc-param/config.toml` in the
//! platform configuration directory and falls back to the defaults when no
//! file exists.

use std::fs;
use std::path::{Path, PathBuf};

use etcetera::{BaseStrategy, choose_base_strategy};
use serde::{Deserialize, Serialize};

use crate::error::TagError;

/// Directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "phpdoc-param";

/// File name of the user configuration.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Which characters count as whitespace when splitting a tag body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhitespaceMode {
    /// Any Unicode whitespace (`char::is_whitespace`), e.g. U+3000.
    #[default]
    Unicode,
    /// ASCII whitespace only.
    Ascii,
}

impl WhitespaceMode {
    pub fn is_whitespace(self, c: char) -> bool {
        match self {
            WhitespaceMode::Unicode => c.is_whitespace(),
            WhitespaceMode::Ascii => c.is_ascii_whitespace(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ParserConfig {
    /// When `true` a missing type resolver is rejected before parsing.
    /// When `false` it is only rejected if the body actually has a type
    /// token.
    pub require_type_resolver: bool,
    pub whitespace: WhitespaceMode,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { require_type_resolver: true, whitespace: WhitespaceMode::Unicode }
    }
}

impl ParserConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, TagError> {
        Ok(toml::from_str(source)?)
    }

    /// Read a configuration file.  A missing file is an error here; use
    /// [`load_user`](Self::load_user) for the lenient lookup.
    pub fn load(path: &Path) -> Result<Self, TagError> {
        let source = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded parser configuration");
        Ok(config)
    }

    /// Path of the per-user configuration file.
    pub fn user_config_path() -> Result<PathBuf, TagError> {
        let strategy = choose_base_strategy()?;
        Ok(strategy.config_dir().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the per-user configuration, or the defaults if it does not
    /// exist.
    pub fn load_user() -> Result<Self, TagError> {
        let path = Self::user_config_path()?;
        Self::load_or_default(&path)
    }

    /// Load `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, TagError> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no parser configuration found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
