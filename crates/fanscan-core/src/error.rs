//! Error and diagnostic types for scanning operations.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use thiserror::Error;

/// Errors that can occur while setting up or listing during a scan.
///
/// A scan never fails as a whole: listing errors are converted into
/// [`Diagnostic`]s by the scan unit that hit them.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Kind of scan diagnostic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Root does not exist as a directory.
    NotFound,
    /// Listing a directory was refused.
    PermissionDenied,
    /// Listing a directory failed for another reason.
    ReadError,
    /// The scan unit itself died before finishing.
    UnitFailed,
}

/// Non-fatal condition reported by a scan unit in place of file paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Root of the scan unit that produced this diagnostic.
    pub root: PathBuf,
    /// Path the condition applies to (the root, or one of its subdirectories).
    pub path: PathBuf,
    /// Kind of diagnostic.
    pub kind: DiagnosticKind,
    /// Human-readable message, printed as-is.
    pub message: String,
}

impl Diagnostic {
    /// Root is missing or is not a directory.
    pub fn not_found(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            message: format!("Directory not found: {}", root.display()),
            path: root.clone(),
            root,
            kind: DiagnosticKind::NotFound,
        }
    }

    /// Listing `path` failed while scanning `root`.
    pub fn listing_failed(
        root: impl Into<PathBuf>,
        path: impl Into<PathBuf>,
        error: &std::io::Error,
    ) -> Self {
        let path = path.into();
        let (kind, message) = match error.kind() {
            std::io::ErrorKind::PermissionDenied => (
                DiagnosticKind::PermissionDenied,
                format!("Permission denied: {}", path.display()),
            ),
            _ => (
                DiagnosticKind::ReadError,
                format!("Read error at {}: {error}", path.display()),
            ),
        };
        Self {
            root: root.into(),
            path,
            kind,
            message,
        }
    }

    /// The scan unit for `root` terminated abnormally.
    pub fn unit_failed(root: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        let root = root.into();
        Self {
            message: format!("Scan failed for {}: {reason}", root.display()),
            path: root.clone(),
            root,
            kind: DiagnosticKind::UnitFailed,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
