//! Concurrent multi-root directory scanning engine for fanscan.
//!
//! # Overview
//!
//! `fanscan-scan` launches one scan unit per root directory, runs them
//! concurrently and waits for all of them before returning. Each unit walks
//! exactly two levels:
//!
//! - the immediate subdirectories of its root, then
//! - the immediate files of each of those subdirectories.
//!
//! Every file found is emitted to an [`EventSink`] as soon as its
//! subdirectory has been listed. A root that does not exist produces a single
//! `Directory not found: <root>` diagnostic instead of an error, and a unit
//! that fails never prevents its siblings from finishing.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use fanscan_scan::{FanOutScanner, LineSink, ScanConfig};
//!
//! # async fn run() {
//! let config = ScanConfig::new(["/srv/downloads", "/srv/projects", "/srv/documents"]);
//! let scanner = FanOutScanner::new(&config);
//! let report = scanner.scan_all(Arc::new(LineSink::stdout())).await;
//!
//! println!("{} files across {} roots", report.total_files(), report.roots.len());
//! # }
//! ```
//!
//! # Streaming
//!
//! Consume events from a channel while the units are still running:
//!
//! ```rust,no_run
//! use fanscan_scan::{FanOutScanner, ScanConfig};
//!
//! # async fn run() {
//! let scanner = FanOutScanner::new(&ScanConfig::new(["/srv/a", "/srv/b"]));
//! let (mut events, join) = scanner.start();
//!
//! while let Some(event) = events.recv().await {
//!     println!("{event}");
//! }
//! let report = join.await.unwrap();
//! # }
//! ```

mod lister;
mod orchestrator;
mod sink;
mod summary;
mod unit;

pub use lister::{DirectoryLister, JwalkLister};
pub use orchestrator::FanOutScanner;
pub use sink::{ChannelSink, EventSink, LineSink};
pub use summary::{RootSummary, ScanReport, UnitOutcome};
pub use unit::scan_root;

// Re-export core types for convenience
pub use fanscan_core::{Diagnostic, DiagnosticKind, ScanConfig, ScanError, ScanEvent};
