//! Destinations for scan events.

use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use tokio::sync::mpsc;

use fanscan_core::ScanEvent;

/// Receives events from concurrently running scan units.
///
/// Implementations must deliver each event as one indivisible unit: two
/// events emitted at the same time from different units never interleave
/// within a line.
pub trait EventSink: Send + Sync {
    /// Deliver one event.
    fn emit(&self, event: ScanEvent);
}

impl<F> EventSink for F
where
    F: Fn(ScanEvent) + Send + Sync,
{
    fn emit(&self, event: ScanEvent) {
        self(event)
    }
}

/// Writes each event as one line to a writer.
#[derive(Debug)]
pub struct LineSink<W> {
    writer: Mutex<W>,
}

impl LineSink<Stdout> {
    /// Line sink on the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> LineSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> EventSink for LineSink<W> {
    fn emit(&self, event: ScanEvent) {
        let line = format!("{event}\n");
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        // A closed stdout (e.g. `| head`) must not take down the scan units.
        let _ = writer.write_all(line.as_bytes()).and_then(|()| writer.flush());
    }
}

/// Forwards events to an async consumer.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<ScanEvent>,
}

impl ChannelSink {
    /// Create a sink and the receiver that drains it.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ScanEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: ScanEvent) {
        // Receiver gone means nobody is listening anymore.
        let _ = self.tx.send(event);
    }
}
