//! Presenter configuration.

use crate::presenter::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Literal typed into a freshly mounted widget.
pub const DEFAULT_PREFILL: &str = "14:43";

/// Settings for a [`Presenter`](crate::presenter::Presenter).
///
/// Every field has a default, so a partial (or empty) JSON object is a
/// valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    /// Typed in character by character on mount; `None` mounts empty.
    pub prefill: Option<String>,
    /// Label shown while the input holds a complete time.
    pub valid_label: String,
    /// Label shown otherwise.
    pub invalid_label: String,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            prefill: Some(DEFAULT_PREFILL.to_string()),
            valid_label: "True".to_string(),
            invalid_label: "Invalid".to_string(),
        }
    }
}

impl PresenterConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Same settings without a prefill literal.
    pub fn empty() -> Self {
        Self {
            prefill: None,
            ..Self::default()
        }
    }
}
