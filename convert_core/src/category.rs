//! # Categories
//!
//! The closed set of conversion domains. A conversion never crosses a
//! category boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConvertError;

/// A conversion domain.
///
/// Serializes as its display name (`"Length"`, `"Temperature"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Length,
    Weight,
    Temperature,
    Speed,
    Time,
    Area,
    Volume,
}

impl Category {
    /// All categories in listing order (the order selection lists show them)
    pub const ALL: [Category; 7] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Speed,
        Category::Time,
        Category::Area,
        Category::Volume,
    ];

    /// Display name, also the lookup key used by callers
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Speed => "Speed",
            Category::Time => "Time",
            Category::Area => "Area",
            Category::Volume => "Volume",
        }
    }

    /// Whether units in this category convert by offset rather than pure scaling
    pub fn is_affine(&self) -> bool {
        matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConvertError::unknown_category(s))
    }
}
