//! # Session State
//!
//! Everything a front end remembers between conversions: the selected
//! category, the from/to units and the history log. The engine stays
//! stateless; a `Session` is owned by its caller and passes the current
//! selection into [`convert`](crate::engine::convert) on each call.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::session::Session;
//! use convert_core::settings::Settings;
//!
//! let mut session = Session::new(&Settings::default()).unwrap();
//! session.select_category("Weight").unwrap();
//! session.select_to("Pound").unwrap();
//!
//! let out = session.convert(5.0).unwrap();
//! assert!((out.result - 11.0231).abs() < 1e-3);
//! assert_eq!(session.history().len(), 1);
//! ```

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::Category;
use crate::engine::{convert, ConversionResult};
use crate::errors::ConvertResult;
use crate::history::{History, HistoryEntry};
use crate::registry::registry;
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    category: Category,
    from_unit: String,
    to_unit: String,
    history: History,
}

impl Session {
    /// Start on the configured default category with its default unit pair.
    pub fn new(settings: &Settings) -> ConvertResult<Self> {
        let category = settings.default_category;
        let (from, to) = registry().default_pair(category.display_name())?;
        Ok(Self {
            category,
            from_unit: from.to_string(),
            to_unit: to.to_string(),
            history: History::with_capacity(settings.history_capacity),
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn from_unit(&self) -> &str {
        &self.from_unit
    }

    pub fn to_unit(&self) -> &str {
        &self.to_unit
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Unit names available in the current category
    pub fn unit_options(&self) -> ConvertResult<Vec<&'static str>> {
        registry().unit_names(self.category.display_name())
    }

    /// Switch category.
    ///
    /// A selected unit that also exists in the new category is kept; one that
    /// doesn't is replaced by that category's default for its slot.
    pub fn select_category(&mut self, name: &str) -> ConvertResult<()> {
        let table = registry().lookup(name)?;
        let (default_from, default_to) = registry().default_pair(name)?;

        if !table.contains(&self.from_unit) {
            self.from_unit = default_from.to_string();
        }
        if !table.contains(&self.to_unit) {
            self.to_unit = default_to.to_string();
        }
        self.category = table.category;
        debug!(category = %self.category, from = %self.from_unit, to = %self.to_unit, "category selected");
        Ok(())
    }

    pub fn select_from(&mut self, unit: &str) -> ConvertResult<()> {
        self.from_unit = self.resolve_unit(unit)?;
        Ok(())
    }

    pub fn select_to(&mut self, unit: &str) -> ConvertResult<()> {
        self.to_unit = self.resolve_unit(unit)?;
        Ok(())
    }

    /// Exchange the from and to units
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
    }

    /// Convert `value` with the current selection and log it.
    ///
    /// Failed conversions leave the history untouched.
    pub fn convert(&mut self, value: f64) -> ConvertResult<ConversionResult> {
        let result = convert(value, &self.from_unit, &self.to_unit, self.category.display_name())?;
        self.history.push(HistoryEntry::from_result(&result, Local::now()));
        Ok(result)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn resolve_unit(&self, unit: &str) -> ConvertResult<String> {
        let table = registry().table(self.category)?;
        Ok(table.unit(unit)?.name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&Settings::default()).unwrap()
    }

    #[test]
    fn test_starts_on_default_pair() {
        let s = session();
        assert_eq!(s.category(), Category::Length);
        assert_eq!(s.from_unit(), "Meter");
        assert_eq!(s.to_unit(), "Kilometer");
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_configured_default_category() {
        let settings = Settings {
            default_category: Category::Temperature,
            ..Settings::default()
        };
        let s = Session::new(&settings).unwrap();
        assert_eq!((s.from_unit(), s.to_unit()), ("Celsius", "Fahrenheit"));
    }

    #[test]
    fn test_category_change_falls_back_to_defaults() {
        let mut s = session();
        s.select_category("Temperature").unwrap();
        assert_eq!(s.category(), Category::Temperature);
        assert_eq!((s.from_unit(), s.to_unit()), ("Celsius", "Fahrenheit"));
    }

    #[test]
    fn test_category_change_keeps_valid_units() {
        let mut s = session();
        s.select_from("Foot").unwrap();
        s.select_to("Inch").unwrap();
        s.select_category("length").unwrap();
        assert_eq!((s.from_unit(), s.to_unit()), ("Foot", "Inch"));
    }

    #[test]
    fn test_unknown_category_leaves_state() {
        let mut s = session();
        assert!(s.select_category("Pressure").is_err());
        assert_eq!(s.category(), Category::Length);
    }

    #[test]
    fn test_select_unknown_unit() {
        let mut s = session();
        let err = s.select_to("Kelvin").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_UNIT");
        assert_eq!(s.to_unit(), "Kilometer");
    }

    #[test]
    fn test_swap() {
        let mut s = session();
        s.swap();
        assert_eq!((s.from_unit(), s.to_unit()), ("Kilometer", "Meter"));
        let out = s.convert(1.0).unwrap();
        assert_eq!(out.result, 1000.0);
    }

    #[test]
    fn test_convert_logs_history() {
        let mut s = session();
        s.convert(1500.0).unwrap();
        s.convert(3.0).unwrap();
        let latest = s.history().recent(1).next().unwrap();
        assert_eq!(latest.value, 3.0);
        assert_eq!(latest.to_unit, "Kilometer");
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn test_failed_convert_not_logged() {
        let mut s = session();
        assert!(s.convert(f64::NAN).is_err());
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_history_bounded_by_settings() {
        let settings = Settings {
            history_capacity: 2,
            ..Settings::default()
        };
        let mut s = Session::new(&settings).unwrap();
        for v in [1.0, 2.0, 3.0] {
            s.convert(v).unwrap();
        }
        assert_eq!(s.history().len(), 2);
        s.clear_history();
        assert!(s.history().is_empty());
    }
}
