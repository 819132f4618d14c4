//! # Settings
//!
//! Caller-side presentation settings, loaded from an optional TOML file.
//! Missing keys fall back to their defaults.
//!
//! ```toml
//! history_capacity = 50
//! recent_count = 5
//! display_precision = 4
//! default_category = "Temperature"
//! ```
//!
//! The engine itself never reads these; they shape what a session keeps and
//! how a front end prints results.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::Category;
use crate::errors::{ConvertError, ConvertResult};
use crate::history::DEFAULT_HISTORY_CAPACITY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum number of history entries a session keeps
    pub history_capacity: usize,
    /// How many entries "recent conversions" shows
    pub recent_count: usize,
    /// Decimal places used when printing results
    pub display_precision: usize,
    /// Category selected when a session starts
    pub default_category: Category,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            recent_count: 5,
            display_precision: 4,
            default_category: Category::Length,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text and validate them
    pub fn from_toml_str(text: &str) -> ConvertResult<Self> {
        let settings: Settings =
            toml::from_str(text).map_err(|e| ConvertError::serialization(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> ConvertResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ConvertError::file_error("read", path.display().to_string(), e.to_string()))?;
        let settings = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    pub fn validate(&self) -> ConvertResult<()> {
        if self.history_capacity == 0 {
            return Err(ConvertError::invalid_input(
                "history_capacity",
                "0",
                "History must keep at least one entry",
            ));
        }
        if self.recent_count == 0 {
            return Err(ConvertError::invalid_input(
                "recent_count",
                "0",
                "Must show at least one recent entry",
            ));
        }
        if self.display_precision > 15 {
            return Err(ConvertError::invalid_input(
                "display_precision",
                self.display_precision.to_string(),
                "At most 15 decimal places are meaningful for f64",
            ));
        }
        Ok(())
    }
}
