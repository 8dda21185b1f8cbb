use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::trace::trace::TraceEvent;

/// Append-only JSONL activity journal.
///
/// Events are buffered and reach the file on [`flush`](Self::flush) or when
/// the journal is dropped. Journaling problems never interrupt the app: they
/// are logged and the event is dropped.
pub struct TraceLogger {
    sink: Option<Mutex<BufWriter<File>>>,
    written: AtomicU64,
}

impl TraceLogger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self::with_sink(Some(Mutex::new(BufWriter::new(file)))),
            Err(e) => {
                tracing::warn!(path = %path.display(), "could not open activity journal: {}", e);
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self::with_sink(None)
    }

    fn with_sink(sink: Option<Mutex<BufWriter<File>>>) -> Self {
        Self {
            sink,
            written: AtomicU64::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Events accepted into the journal so far.
    pub fn events_written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    pub fn log(&self, event: &TraceEvent) {
        let Some(sink) = &self.sink else { return };

        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(kind = ?event.kind, "failed to serialize activity event: {}", e);
                return;
            }
        };

        let Ok(mut out) = sink.lock() else {
            tracing::warn!("activity journal lock poisoned; event dropped");
            return;
        };
        match writeln!(out, "{}", line) {
            Ok(()) => {
                self.written.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => tracing::warn!(kind = ?event.kind, "failed to write activity event: {}", e),
        }
    }

    /// Push buffered events to the file.
    pub fn flush(&self) {
        let Some(sink) = &self.sink else { return };
        match sink.lock() {
            Ok(mut out) => {
                if let Err(e) = out.flush() {
                    tracing::warn!("failed to flush activity journal: {}", e);
                }
            }
            Err(_) => tracing::warn!("activity journal lock poisoned; flush skipped"),
        }
    }
}

impl Drop for TraceLogger {
    fn drop(&mut self) {
        self.flush();
    }
}
