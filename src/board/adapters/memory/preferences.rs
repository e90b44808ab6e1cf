//! In-memory preference store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{PreferenceStore, PreferenceStoreError, PreferenceStoreResult};

/// Thread-safe in-memory preference store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryPreferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load(&self, key: &str) -> PreferenceStoreResult<Option<String>> {
        let values = self.values.read().map_err(|err| {
            PreferenceStoreError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> PreferenceStoreResult<()> {
        let mut values = self.values.write().map_err(|err| {
            PreferenceStoreError::storage(std::io::Error::other(err.to_string()))
        })?;
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
