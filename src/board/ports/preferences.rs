//! Client-local preference storage port.

use std::sync::Arc;
use thiserror::Error;

/// Result type for preference store operations.
pub type PreferenceStoreResult<T> = Result<T, PreferenceStoreError>;

/// Key-value storage for client-local preferences.
///
/// Board data is never written here.
pub trait PreferenceStore: Send + Sync {
    /// Reads the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError::Storage`] when the store is unreadable.
    fn load(&self, key: &str) -> PreferenceStoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError::Storage`] when the store is unwritable.
    fn save(&self, key: &str, value: &str) -> PreferenceStoreResult<()>;
}

/// Errors returned by preference store implementations.
#[derive(Debug, Clone, Error)]
pub enum PreferenceStoreError {
    /// Storage-layer failure.
    #[error("preference storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl PreferenceStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
