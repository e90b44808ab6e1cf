//! Configuration for board validation, effects, and preferences.
//!
//! Every field has a compiled default. [`BoardConfig::from_json_str`]
//! accepts partial documents; omitted fields keep their defaults.

use crate::board::domain::ThemePreference;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum task title length in characters.
pub const DEFAULT_MAX_TITLE_CHARS: usize = 100;

/// Default maximum task description length in characters.
pub const DEFAULT_MAX_DESCRIPTION_CHARS: usize = 500;

/// Default lifetime of the completion celebration, in milliseconds.
pub const DEFAULT_CELEBRATION_DURATION_MS: u64 = 4_000;

/// Default key under which the theme preference is stored.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "taskboard-theme";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("failed to parse board configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A validation limit was set to zero.
    #[error("validation limit `{0}` must be greater than zero")]
    ZeroLimit(&'static str),
}

/// Field length limits applied at the form boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationLimits {
    /// Maximum title length in characters.
    pub max_title_chars: usize,
    /// Maximum description length in characters.
    pub max_description_chars: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_title_chars: DEFAULT_MAX_TITLE_CHARS,
            max_description_chars: DEFAULT_MAX_DESCRIPTION_CHARS,
        }
    }
}

impl ValidationLimits {
    /// Creates a strict configuration with reduced limits.
    ///
    /// Useful for compact card layouts.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_chars: 60,
            max_description_chars: 200,
        }
    }
}

/// Fully resolved board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Task form limits.
    pub validation: ValidationLimits,
    /// How long the completion celebration stays active, in milliseconds.
    pub celebration_duration_ms: u64,
    /// Storage key for the theme preference.
    pub theme_storage_key: String,
    /// Theme used when nothing valid is stored.
    pub default_theme: ThemePreference,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            validation: ValidationLimits::default(),
            celebration_duration_ms: DEFAULT_CELEBRATION_DURATION_MS,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            default_theme: ThemePreference::System,
        }
    }
}

impl BoardConfig {
    /// Parses a JSON configuration document, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::ZeroLimit`] when a length limit is zero.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configured limits are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroLimit`] when a length limit is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.validation.max_title_chars == 0 {
            return Err(ConfigError::ZeroLimit("max_title_chars"));
        }
        if self.validation.max_description_chars == 0 {
            return Err(ConfigError::ZeroLimit("max_description_chars"));
        }
        Ok(())
    }

    /// Returns the celebration lifetime as a time delta.
    #[must_use]
    pub fn celebration_duration(&self) -> TimeDelta {
        i64::try_from(self.celebration_duration_ms)
            .ok()
            .and_then(TimeDelta::try_milliseconds)
            .unwrap_or(TimeDelta::MAX)
    }
}
