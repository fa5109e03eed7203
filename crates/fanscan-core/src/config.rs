//! Scan configuration types.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::ScanError;

/// Configuration for a multi-root scan.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root directories to scan, one scan unit per entry.
    #[builder(default)]
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// Include hidden entries (names starting with `.`).
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_hidden: bool,

    /// Treat symlinks to directories as subdirectories and symlinks to
    /// files as files.
    #[builder(default = "false")]
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_true() -> bool {
    true
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref roots) = self.roots {
            validate_roots(roots)?;
        }
        Ok(())
    }
}

fn validate_roots(roots: &[PathBuf]) -> Result<(), String> {
    if roots.iter().any(|root| root.as_os_str().is_empty()) {
        return Err("Root path cannot be empty".to_string());
    }
    Ok(())
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a config scanning the given roots with default options.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            include_hidden: true,
            follow_symlinks: false,
        }
    }

    /// Parse a config from JSON.
    ///
    /// Missing fields take their defaults, so `{"roots": ["/srv"]}` is a
    /// complete config.
    pub fn from_json_str(json: &str) -> Result<Self, ScanError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ScanError::InvalidConfig {
            message: e.to_string(),
        })?;
        validate_roots(&config.roots).map_err(|message| ScanError::InvalidConfig { message })?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ScanError::io(path, e))?;
        Self::from_json_str(&json)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(["."])
    }
}
