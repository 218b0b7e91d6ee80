//! Project configuration (tint.yaml) parsing.
//!
//! The config file sets defaults for the CLI: the preprocessor dialect,
//! how many candidates to print, and the output format.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::{Result, TintError};

/// Default config filename.
pub const CONFIG_FILENAME: &str = "tint.yaml";

/// How suggestions are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration loaded from tint.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Preprocessor dialect for suggestions.
    pub dialect: Dialect,

    /// Maximum number of candidates to print. Unlimited when unset.
    pub limit: Option<usize>,

    /// Output format for suggestions.
    pub format: OutputFormat,
}

impl Config {
    /// Load config from a tint.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TintError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| TintError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check tint.yaml syntax; dialect must be `less` or `sass`".to_string()),
        })
    }

    /// Load the explicit config file, or `tint.yaml` in `dir` if it exists.
    ///
    /// Returns the config and the path it was read from, if any.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Ok((Self::load(&candidate)?, Some(candidate)))
        } else {
            Ok((Self::default(), None))
        }
    }

    /// Render as YAML for writing to disk.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| TintError::Parse {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }
}
