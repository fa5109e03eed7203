//! Fan-out/fan-in over scan units.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use fanscan_core::{Diagnostic, ScanConfig, ScanEvent};

use crate::lister::{DirectoryLister, JwalkLister};
use crate::sink::{ChannelSink, EventSink};
use crate::summary::{RootSummary, ScanReport};
use crate::unit::scan_root;

/// Launches one scan unit per root and waits for all of them.
///
/// Every launched unit is joined before a scan call returns. A unit that
/// panics is reported as a diagnostic; the remaining units still run to
/// completion.
#[derive(Debug)]
pub struct FanOutScanner<L = JwalkLister> {
    roots: Vec<PathBuf>,
    lister: Arc<L>,
}

impl FanOutScanner<JwalkLister> {
    /// Create a scanner for the roots and listing options in `config`.
    pub fn new(config: &ScanConfig) -> Self {
        Self::with_lister(config.roots.clone(), JwalkLister::from_config(config))
    }
}

impl<L> FanOutScanner<L>
where
    L: DirectoryLister + 'static,
{
    /// Create a scanner with a custom listing backend.
    pub fn with_lister(roots: Vec<PathBuf>, lister: L) -> Self {
        Self {
            roots,
            lister: Arc::new(lister),
        }
    }

    /// Roots this scanner will visit, in launch order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Run every unit on tokio's blocking pool and await them all.
    ///
    /// The calling task is suspended, not blocked, while units run.
    pub async fn scan_all<S>(&self, sink: Arc<S>) -> ScanReport
    where
        S: EventSink + 'static,
    {
        let start = Instant::now();
        debug!(roots = self.roots.len(), "launching scan units");

        let handles: Vec<(PathBuf, JoinHandle<RootSummary>)> = self
            .roots
            .iter()
            .map(|root| {
                let unit_root = root.clone();
                let lister = Arc::clone(&self.lister);
                let sink = Arc::clone(&sink);
                let handle = tokio::task::spawn_blocking(move || {
                    scan_root(&unit_root, lister.as_ref(), sink.as_ref())
                });
                (root.clone(), handle)
            })
            .collect();

        // All units are already running; awaiting in order only decides the
        // order of the summaries.
        let mut roots = Vec::with_capacity(handles.len());
        for (root, handle) in handles {
            let summary = handle.await.unwrap_or_else(|e| {
                let reason = if e.is_panic() {
                    panic_message(e.into_panic())
                } else {
                    e.to_string()
                };
                unit_failed(&root, reason, sink.as_ref())
            });
            roots.push(summary);
        }

        finish(roots, start)
    }

    /// Run every unit on a dedicated rayon pool and block until all finish.
    ///
    /// For callers without an async runtime.
    pub fn scan_all_blocking<S>(&self, sink: &S) -> ScanReport
    where
        S: EventSink + ?Sized,
    {
        let start = Instant::now();
        debug!(roots = self.roots.len(), "launching scan units");

        let run = || -> Vec<RootSummary> {
            self.roots
                .par_iter()
                .with_max_len(1)
                .map(|root| {
                    panic::catch_unwind(AssertUnwindSafe(|| {
                        scan_root(root, self.lister.as_ref(), sink)
                    }))
                    .unwrap_or_else(|payload| unit_failed(root, panic_message(payload), sink))
                })
                .collect()
        };

        // One thread per root so no unit waits behind another.
        let roots = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.roots.len().max(1))
            .thread_name(|i| format!("fanscan-unit-{i}"))
            .build()
        {
            Ok(pool) => pool.install(run),
            Err(err) => {
                warn!(error = %err, "could not build scan pool, using the global pool");
                run()
            }
        };

        finish(roots, start)
    }

    /// Start scanning in the background and stream events as they happen.
    ///
    /// The receiver closes once every unit has finished. The handle yields
    /// the report after the join. Must be called within a tokio runtime.
    pub fn start(self) -> (mpsc::UnboundedReceiver<ScanEvent>, JoinHandle<ScanReport>) {
        let (sink, rx) = ChannelSink::channel();
        let handle = tokio::spawn(async move { self.scan_all(Arc::new(sink)).await });
        (rx, handle)
    }
}

fn unit_failed<S: EventSink + ?Sized>(root: &Path, reason: String, sink: &S) -> RootSummary {
    let diagnostic = Diagnostic::unit_failed(root, reason);
    error!(root = %root.display(), "{}", diagnostic.message);
    sink.emit(diagnostic.into());
    RootSummary::failed(root)
}

fn finish(roots: Vec<RootSummary>, start: Instant) -> ScanReport {
    let report = ScanReport {
        roots,
        elapsed: start.elapsed(),
    };
    debug!(
        roots = report.roots.len(),
        files = report.total_files(),
        diagnostics = report.total_diagnostics(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "all scan units joined"
    );
    report
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unit panicked".to_string()
    }
}
