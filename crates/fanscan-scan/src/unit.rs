//! The per-root scan unit.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, warn};

use fanscan_core::{Diagnostic, ScanEvent};

use crate::lister::DirectoryLister;
use crate::sink::EventSink;
use crate::summary::{RootSummary, UnitOutcome};

/// Scan one root: every file directly inside each immediate subdirectory.
///
/// Files directly in `root` and anything below the subdirectories' own
/// subdirectories are never visited. A missing root yields exactly one
/// `Directory not found` diagnostic. Listing failures are reported as
/// diagnostics and never abort the caller; a subdirectory that cannot be
/// listed is skipped and its siblings are still scanned.
pub fn scan_root<L, S>(root: &Path, lister: &L, sink: &S) -> RootSummary
where
    L: DirectoryLister + ?Sized,
    S: EventSink + ?Sized,
{
    let start = Instant::now();
    let mut summary = RootSummary::new(root);
    debug!(root = %root.display(), "scan unit started");

    if !lister.is_dir(root) {
        summary.outcome = UnitOutcome::NotFound;
        report(&mut summary, sink, Diagnostic::not_found(root));
        summary.elapsed = start.elapsed();
        return summary;
    }

    let subdirs = match lister.list_subdirectories(root) {
        Ok(subdirs) => subdirs,
        Err(err) => {
            summary.outcome = UnitOutcome::ListingFailed;
            report(&mut summary, sink, Diagnostic::listing_failed(root, root, &err));
            summary.elapsed = start.elapsed();
            return summary;
        }
    };

    for subdir in subdirs {
        let files = match lister.list_files(&subdir) {
            Ok(files) => files,
            Err(err) => {
                report(&mut summary, sink, Diagnostic::listing_failed(root, &subdir, &err));
                continue;
            }
        };
        summary.subdirs_visited += 1;

        for path in files {
            summary.files_found += 1;
            sink.emit(ScanEvent::FileFound {
                root: root.to_path_buf(),
                path,
            });
        }
    }

    summary.elapsed = start.elapsed();
    debug!(
        root = %root.display(),
        files = summary.files_found,
        subdirs = summary.subdirs_visited,
        diagnostics = summary.diagnostics,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "scan unit finished"
    );
    summary
}

fn report<S: EventSink + ?Sized>(summary: &mut RootSummary, sink: &S, diagnostic: Diagnostic) {
    warn!(
        root = %diagnostic.root.display(),
        kind = %diagnostic.kind,
        "{}",
        diagnostic.message
    );
    summary.diagnostics += 1;
    sink.emit(diagnostic.into());
}
