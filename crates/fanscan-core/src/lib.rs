//! Core types for fanscan.
//!
//! This crate provides the data model shared by the scanner and the binary:
//! scan configuration, the events a scan unit emits, and error types.

mod config;
mod error;
mod event;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use error::{Diagnostic, DiagnosticKind, ScanError};
pub use event::ScanEvent;
