//! Per-root and whole-scan summaries.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// How a scan unit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitOutcome {
    /// Traversal ran to the end. Individual subdirectories may still have
    /// produced diagnostics.
    Completed,
    /// Root does not exist as a directory.
    NotFound,
    /// Root's subdirectories could not be listed.
    ListingFailed,
    /// The unit terminated abnormally.
    Failed,
}

/// Counts for one scan unit. Discovered paths go to the sink, not here.
#[derive(Debug, Clone)]
pub struct RootSummary {
    /// Root this unit scanned.
    pub root: PathBuf,
    /// How the unit ended.
    pub outcome: UnitOutcome,
    /// Number of file paths emitted.
    pub files_found: u64,
    /// Number of immediate subdirectories whose files were listed.
    pub subdirs_visited: u64,
    /// Number of diagnostics emitted.
    pub diagnostics: u64,
    /// Time the unit spent scanning.
    pub elapsed: Duration,
}

impl RootSummary {
    /// Summary for a unit that has not produced anything yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            outcome: UnitOutcome::Completed,
            files_found: 0,
            subdirs_visited: 0,
            diagnostics: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Summary for a unit that died before reporting.
    pub fn failed(root: impl Into<PathBuf>) -> Self {
        Self {
            outcome: UnitOutcome::Failed,
            diagnostics: 1,
            ..Self::new(root)
        }
    }

    /// Whether the unit finished without any diagnostic.
    pub fn is_clean(&self) -> bool {
        self.outcome == UnitOutcome::Completed && self.diagnostics == 0
    }

    /// Calculate scan rate in files per second.
    pub fn files_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.files_found as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Result of joining every scan unit, in the order the roots were given.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// One summary per root.
    pub roots: Vec<RootSummary>,
    /// Wall-clock time from launch to join.
    pub elapsed: Duration,
}

impl ScanReport {
    /// Total file paths emitted across all roots.
    pub fn total_files(&self) -> u64 {
        self.roots.iter().map(|r| r.files_found).sum()
    }

    /// Total diagnostics emitted across all roots.
    pub fn total_diagnostics(&self) -> u64 {
        self.roots.iter().map(|r| r.diagnostics).sum()
    }

    /// Summary for a given root, if it was part of this scan.
    pub fn root(&self, root: &Path) -> Option<&RootSummary> {
        self.roots.iter().find(|r| r.root == root)
    }

    /// Roots whose unit ended with the given outcome.
    pub fn with_outcome(&self, outcome: UnitOutcome) -> impl Iterator<Item = &RootSummary> {
        self.roots.iter().filter(move |r| r.outcome == outcome)
    }
}
