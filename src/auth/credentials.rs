use serde::{Deserialize, Serialize};

use crate::storage::error::StorageResult;
use crate::storage::kv::{KeyValueStorage, read_json, write_json};

/// Storage key of the single registered account.
pub const CREDENTIALS_STORAGE_KEY: &str = "user-data";

/// The registered account, stored as plaintext JSON. There is only ever
/// one; each registration overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

pub struct CredentialStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> CredentialStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn save(&self, credentials: &Credentials) -> StorageResult<()> {
        write_json(&self.storage, CREDENTIALS_STORAGE_KEY, credentials)
    }

    pub fn load(&self) -> StorageResult<Option<Credentials>> {
        read_json(&self.storage, CREDENTIALS_STORAGE_KEY)
    }

    pub fn clear(&self) -> StorageResult<()> {
        self.storage.remove_item(CREDENTIALS_STORAGE_KEY)
    }
}
