//! Theme preference service.

use crate::board::{
    config::BoardConfig,
    domain::{ResolvedTheme, ThemePreference},
    ports::{PreferenceStore, PreferenceStoreResult},
};
use std::sync::Arc;

/// Reads and writes the user's theme preference.
///
/// A missing, unreadable, or unrecognised stored value falls back to the
/// configured default.
#[derive(Clone)]
pub struct ThemeService<S>
where
    S: PreferenceStore,
{
    store: Arc<S>,
    storage_key: String,
    default_theme: ThemePreference,
}

impl<S> ThemeService<S>
where
    S: PreferenceStore,
{
    /// Creates a service using the key and default from `config`.
    #[must_use]
    pub fn new(store: Arc<S>, config: &BoardConfig) -> Self {
        Self {
            store,
            storage_key: config.theme_storage_key.clone(),
            default_theme: config.default_theme,
        }
    }

    /// Returns the stored preference, or the default.
    #[must_use]
    pub fn theme(&self) -> ThemePreference {
        match self.store.load(&self.storage_key) {
            Ok(Some(raw)) => ThemePreference::try_from(raw.as_str()).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "ignoring stored theme preference");
                self.default_theme
            }),
            Ok(None) => self.default_theme,
            Err(err) => {
                tracing::warn!(error = %err, "theme preference unreadable");
                self.default_theme
            }
        }
    }

    /// Stores a new preference.
    ///
    /// # Errors
    ///
    /// Returns the store error when the write fails.
    pub fn set_theme(&self, theme: ThemePreference) -> PreferenceStoreResult<()> {
        self.store.save(&self.storage_key, theme.as_str())
    }

    /// Resolves the stored preference against the system colour scheme.
    #[must_use]
    pub fn resolved(&self, system_prefers_dark: bool) -> ResolvedTheme {
        self.theme().resolve(system_prefers_dark)
    }
}
