use crate::viewed::persistence::ViewedPersistence;
use crate::viewed::viewed_model::ViewedSet;
use crate::viewed::writer::PersistWriter;

/// Handle returned by [`ViewTrackingStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&ViewedSet)>;

// ============================================================================
// ViewTrackingStore
// ============================================================================

/// Session-scoped record of which hospitals the user has opened.
///
/// Owned by the app and passed by reference to every screen that reads or
/// updates it. Each change is pushed to subscribers and queued for
/// persistence. Persistence is best-effort: the in-memory set is always
/// authoritative.
pub struct ViewTrackingStore {
    viewed: ViewedSet,
    writer: PersistWriter,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    restored_count: usize,
}

impl ViewTrackingStore {
    /// Start-of-process initialization.
    ///
    /// Loads whatever was persisted by the previous run, then runs
    /// [`session_reset`](Self::session_reset). Viewed status therefore never
    /// outlives a relaunch; the durable copy only bridges the startup load.
    pub fn rehydrate(persistence: Box<dyn ViewedPersistence>) -> Self {
        let restored = persistence.load().unwrap_or_default();
        let restored_count = restored.len();
        tracing::debug!(restored_count, "rehydrated viewed hospitals");

        let mut store = Self {
            viewed: restored,
            writer: PersistWriter::spawn(persistence),
            observers: Vec::new(),
            next_subscription: 0,
            restored_count,
        };
        store.session_reset();
        store
    }

    /// A store with no durable backing.
    pub fn in_memory() -> Self {
        Self {
            viewed: ViewedSet::new(),
            writer: PersistWriter::detached(),
            observers: Vec::new(),
            next_subscription: 0,
            restored_count: 0,
        }
    }

    /// Forces the set empty and persists the empty state. Runs once per
    /// process as the final step of [`rehydrate`](Self::rehydrate).
    pub fn session_reset(&mut self) {
        if !self.viewed.is_empty() {
            tracing::info!(
                discarded = self.viewed.len(),
                "session reset: discarding viewed hospitals from previous run"
            );
        }
        self.viewed.clear();
        self.changed();
    }

    /// Mark `id` as viewed. Returns `false` (and does nothing else) if it
    /// already was.
    pub fn add_viewed(&mut self, id: &str) -> bool {
        if !self.viewed.insert(id) {
            return false;
        }
        tracing::debug!(id, count = self.viewed.len(), "hospital viewed");
        self.changed();
        true
    }

    /// The user-triggered refresh: forget everything viewed so far.
    pub fn clear_viewed(&mut self) {
        self.viewed.clear();
        tracing::debug!("viewed hospitals cleared");
        self.changed();
    }

    pub fn viewed_count(&self) -> usize {
        self.viewed.len()
    }

    pub fn is_viewed(&self, id: &str) -> bool {
        self.viewed.contains(id)
    }

    pub fn viewed(&self) -> &ViewedSet {
        &self.viewed
    }

    /// How many entries the previous run had persisted before the reset.
    pub fn restored_count(&self) -> usize {
        self.restored_count
    }

    /// Whether changes reach durable storage.
    pub fn is_persistent(&self) -> bool {
        self.writer.is_attached()
    }

    /// Register a callback invoked with the new set after every change.
    pub fn subscribe(&mut self, observer: impl FnMut(&ViewedSet) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Wait for all queued writes to land. Callers on the UI path never need
    /// this; it exists so tests can observe the durable state.
    pub fn flush(&self) {
        self.writer.flush();
    }

    fn changed(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.viewed);
        }
        self.writer.submit(self.viewed.clone());
    }
}
