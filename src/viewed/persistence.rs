use crate::storage::error::StorageResult;
use crate::storage::kv::{KeyValueStorage, read_json, write_json};
use crate::viewed::viewed_model::{PERSIST_VERSION, PersistedViewed, StoredViewed, ViewedSet};

/// Storage key the viewed set lives under.
pub const VIEWED_STORAGE_KEY: &str = "hospital-storage";

// ============================================================================
// ViewedPersistence trait: durable backing of the viewed set
// ============================================================================

/// Port between `ViewTrackingStore` and whatever keeps its state durable.
///
/// `load` swallows its own failures (logging them) since a missing or
/// unreadable prior state is indistinguishable from a first launch.
pub trait ViewedPersistence: Send {
    fn load(&self) -> Option<ViewedSet>;
    fn save(&self, set: &ViewedSet) -> StorageResult<()>;
}

/// Persists the viewed set as JSON under [`VIEWED_STORAGE_KEY`].
pub struct KvViewedPersistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> KvViewedPersistence<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, VIEWED_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: KeyValueStorage + Send> ViewedPersistence for KvViewedPersistence<S> {
    fn load(&self) -> Option<ViewedSet> {
        match read_json::<StoredViewed>(&self.storage, &self.key) {
            Ok(stored) => stored.map(StoredViewed::into_set),
            Err(e) => {
                tracing::warn!(key = %self.key, "failed to load viewed hospitals: {}", e);
                None
            }
        }
    }

    fn save(&self, set: &ViewedSet) -> StorageResult<()> {
        let envelope = PersistedViewed {
            state: set.clone(),
            version: PERSIST_VERSION,
        };
        write_json(&self.storage, &self.key, &envelope)
    }
}
