//! fanscan - scan several directory roots concurrently.
//!
//! Roots are read from `fanscan.json` in the working directory:
//!
//! ```json
//! { "roots": ["/srv/downloads", "/srv/projects"], "include_hidden": true }
//! ```
//!
//! Without that file the current directory is scanned. Every discovered file
//! path, and every diagnostic, is printed to stdout as one line. Logs go to
//! stderr.

use std::path::Path;
use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fanscan_scan::{FanOutScanner, LineSink, ScanConfig, UnitOutcome};

const CONFIG_FILE: &str = "fanscan.json";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    setup_logging();

    let config = load_config(Path::new(CONFIG_FILE))?;
    info!(roots = config.roots.len(), "starting scan");

    let scanner = FanOutScanner::new(&config);
    let report = scanner.scan_all(Arc::new(LineSink::stdout())).await;

    for summary in &report.roots {
        info!(
            root = %summary.root.display(),
            outcome = ?summary.outcome,
            files = summary.files_found,
            diagnostics = summary.diagnostics,
            files_per_sec = format!("{:.0}", summary.files_per_second()),
            "root done"
        );
    }
    info!(
        files = report.total_files(),
        diagnostics = report.total_diagnostics(),
        failed = report.with_outcome(UnitOutcome::Failed).count(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "scan complete"
    );

    Ok(())
}

/// Load the scan config, falling back to the current directory when no
/// config file exists.
fn load_config(path: &Path) -> Result<ScanConfig> {
    if !path.exists() {
        return Ok(ScanConfig::default());
    }
    ScanConfig::from_json_file(path)
        .wrap_err_with(|| format!("Failed to load config from {}", path.display()))
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("fanscan=info,warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
