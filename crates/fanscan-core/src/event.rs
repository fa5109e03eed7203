//! Events emitted by scan units.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Diagnostic;

/// One output event of a scan unit. Each event renders as one output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScanEvent {
    /// A file one level below an immediate subdirectory of `root`.
    FileFound { root: PathBuf, path: PathBuf },
    /// A non-fatal condition.
    Diagnostic(Diagnostic),
}

impl ScanEvent {
    /// Root of the scan unit that emitted this event.
    pub fn root(&self) -> &Path {
        match self {
            Self::FileFound { root, .. } => root,
            Self::Diagnostic(diag) => &diag.root,
        }
    }

    /// The discovered path, if this is a file event.
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::FileFound { path, .. } => Some(path),
            Self::Diagnostic(_) => None,
        }
    }

    /// The diagnostic, if this is one.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Diagnostic(diag) => Some(diag),
            Self::FileFound { .. } => None,
        }
    }
}

impl From<Diagnostic> for ScanEvent {
    fn from(diag: Diagnostic) -> Self {
        Self::Diagnostic(diag)
    }
}

impl fmt::Display for ScanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileFound { path, .. } => write!(f, "{}", path.display()),
            Self::Diagnostic(diag) => diag.fmt(f),
        }
    }
}
