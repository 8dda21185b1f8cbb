use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use crate::viewed::persistence::ViewedPersistence;
use crate::viewed::viewed_model::ViewedSet;

enum WriterCommand {
    Save(ViewedSet),
    Flush(Sender<()>),
}

/// Fire-and-forget persistence: snapshots are queued on a channel and written
/// in order by a single background thread.
///
/// Write failures are logged and dropped. Dropping the writer drains the
/// queue before returning.
pub struct PersistWriter {
    tx: Option<Sender<WriterCommand>>,
    handle: Option<JoinHandle<()>>,
}

impl PersistWriter {
    pub fn spawn(persistence: Box<dyn ViewedPersistence>) -> Self {
        let (tx, rx) = mpsc::channel();

        let spawned = std::thread::Builder::new()
            .name("viewed-persist".into())
            .spawn(move || run_writer(persistence, rx));

        match spawned {
            Ok(handle) => Self {
                tx: Some(tx),
                handle: Some(handle),
            },
            Err(e) => {
                tracing::warn!("could not start persist writer, viewed state is memory-only: {}", e);
                Self::detached()
            }
        }
    }

    /// A writer that discards every snapshot.
    pub fn detached() -> Self {
        Self {
            tx: None,
            handle: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.tx.is_some()
    }

    /// Queue a snapshot. Never blocks on I/O.
    pub fn submit(&self, set: ViewedSet) {
        let Some(tx) = &self.tx else { return };
        if tx.send(WriterCommand::Save(set)).is_err() {
            tracing::warn!("persist writer has stopped; snapshot dropped");
        }
    }

    /// Block until every snapshot queued so far has been written (or failed).
    pub fn flush(&self) {
        let Some(tx) = &self.tx else { return };
        let (ack_tx, ack_rx) = mpsc::channel();
        if tx.send(WriterCommand::Flush(ack_tx)).is_ok() {
            // An Err here means the writer thread exited, so nothing is pending.
            let _ = ack_rx.recv();
        }
    }
}

impl Drop for PersistWriter {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("persist writer thread panicked");
            }
        }
    }
}

fn run_writer(persistence: Box<dyn ViewedPersistence>, rx: Receiver<WriterCommand>) {
    for command in rx {
        match command {
            WriterCommand::Save(set) => match persistence.save(&set) {
                Ok(()) => tracing::trace!(count = set.len(), "persisted viewed hospitals"),
                Err(e) => tracing::warn!("failed to persist viewed hospitals: {}", e),
            },
            WriterCommand::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
}
