//! Editor configuration.
//!
//! # Responsibility
//! - Carry the host-tunable knobs of the editing session with safe
//!   defaults.
//!
//! # Invariants
//! - `default_item_duration_ms` is strictly positive.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default duration for newly created items: two hours.
pub const DEFAULT_ITEM_DURATION_MS: i64 = 2 * 60 * 60 * 1000;

/// Host-tunable session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Duration assigned to items created by canvas double-click.
    pub default_item_duration_ms: i64,
    /// When false the confirmation prompt is skipped on delete; for host
    /// shells that render their own confirmation UI before calling in.
    pub confirm_deletes: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_item_duration_ms: DEFAULT_ITEM_DURATION_MS,
            confirm_deletes: true,
        }
    }
}

impl EditorConfig {
    /// Parses a config from JSON, falling back to defaults for absent
    /// fields.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_item_duration_ms <= 0 {
            return Err(ConfigError::NonPositiveDuration {
                duration_ms: self.default_item_duration_ms,
            });
        }
        Ok(())
    }
}

/// Configuration loading/validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    NonPositiveDuration { duration_ms: i64 },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid editor config: {message}"),
            Self::NonPositiveDuration { duration_ms } => write!(
                f,
                "default_item_duration_ms must be positive, got {duration_ms}"
            ),
        }
    }
}

impl Error for ConfigError {}
