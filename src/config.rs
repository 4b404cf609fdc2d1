//! Configuration file handling.
//!
//! Settings live in `<config_dir>/irclog/config.toml`. Every field is
//! optional; missing fields take their defaults, so an empty file is a
//! valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::markup::MarkupStyle;

/// Directory name under the platform config directory.
const APP_DIR: &str = "irclog";
const CONFIG_FILE: &str = "config.toml";

/// Separator written before the first line when aligning output.
pub const DEFAULT_SEPARATOR: &str = "—";
pub const DEFAULT_SEPARATOR_WIDTH: usize = 132;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub convert: ConvertConfig,
    pub markup: MarkupStyle,
}

/// Defaults for the `convert` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Write a separator line before the first converted line.
    pub align: bool,
    /// Keep private/action lines instead of skipping them.
    pub include_private: bool,
    /// Convert lines on all cores.
    pub parallel: bool,
    /// Text repeated to build the separator line.
    pub separator: String,
    /// How many times `separator` is repeated.
    pub separator_width: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            align: false,
            include_private: false,
            parallel: false,
            separator: DEFAULT_SEPARATOR.to_string(),
            separator_width: DEFAULT_SEPARATOR_WIDTH,
        }
    }
}

impl Config {
    /// Default location of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the default location.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// The separator line written when aligning output.
    pub fn separator_line(&self) -> String {
        self.convert.separator.repeat(self.convert.separator_width)
    }
}
