use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifiers of the hospitals the user opened during the current session.
///
/// Stored as id -> presence flag. A present key means "viewed".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewedSet {
    #[serde(rename = "viewedHospitals", default)]
    entries: HashMap<String, bool>,
}

impl ViewedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id`. Returns `false` when it was already present.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.entries.contains_key(id) {
            return false;
        }
        self.entries.insert(id.to_string(), true);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<S: AsRef<str>> FromIterator<S> for ViewedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ViewedSet::new();
        for id in iter {
            set.insert(id.as_ref());
        }
        set
    }
}

// ============================================================================
// Persisted envelope
// ============================================================================

/// Current envelope version written under the storage key.
pub const PERSIST_VERSION: u32 = 0;

/// On-disk shape: `{"state":{"viewedHospitals":{...}},"version":0}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedViewed {
    pub state: ViewedSet,
    #[serde(default)]
    pub version: u32,
}

/// Accepts the versioned envelope as well as a bare state object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum StoredViewed {
    Envelope(PersistedViewed),
    Bare(ViewedSet),
}

impl StoredViewed {
    pub(crate) fn into_set(self) -> ViewedSet {
        match self {
            StoredViewed::Envelope(envelope) => envelope.state,
            StoredViewed::Bare(set) => set,
        }
    }
}
