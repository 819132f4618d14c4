//! # Unit Registry
//!
//! The fixed, category-keyed table of units. Built once on first access and
//! read-only afterwards, so it can be shared across threads without locking.
//!
//! Insertion order matters: callers populate selection lists from
//! [`Registry::unit_names`], and the first two units of a category are the
//! conventional default "from"/"to" pair.
//!
//! ## Usage
//!
//! ```rust
//! use convert_core::registry::registry;
//!
//! let length = registry().lookup("Length").unwrap();
//! assert_eq!(length.factor("Kilometer").unwrap(), 0.001);
//!
//! let (from, to) = registry().default_pair("Weight").unwrap();
//! assert_eq!((from, to), ("Kilogram", "Gram"));
//! ```

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::category::Category;
use crate::errors::{ConvertError, ConvertResult};
use crate::units::{UnitDefinition, UnitKind, CELSIUS, FAHRENHEIT, KELVIN};

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::builtin);

/// The process-wide registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

// ============================================================================
// Category Table
// ============================================================================

/// All units of one category, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    pub category: Category,
    pub units: Vec<UnitDefinition>,
}

impl CategoryTable {
    pub fn new(category: Category, units: Vec<UnitDefinition>) -> Self {
        Self { category, units }
    }

    /// Find a unit by exact name
    pub fn unit(&self, name: &str) -> ConvertResult<&UnitDefinition> {
        self.units
            .iter()
            .find(|u| u.name == name)
            .ok_or_else(|| ConvertError::unknown_unit(self.category.display_name(), name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.units.iter().any(|u| u.name == name)
    }

    /// Scale factor of a linear unit
    pub fn factor(&self, name: &str) -> ConvertResult<f64> {
        let unit = self.unit(name)?;
        unit.factor().ok_or_else(|| {
            ConvertError::internal(format!(
                "'{}' in {} has no linear factor",
                name, self.category
            ))
        })
    }

    pub fn unit_names(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.name).collect()
    }

    /// The unit acting as the common intermediate for this category
    pub fn base_unit(&self) -> Option<&UnitDefinition> {
        self.units.iter().find(|u| u.is_base())
    }

    /// Check the invariants every conversion relies on.
    fn validate(&self) -> ConvertResult<()> {
        let mut seen = HashSet::new();
        for unit in &self.units {
            if !seen.insert(unit.name) {
                return Err(ConvertError::internal(format!(
                    "duplicate unit '{}' in {}",
                    unit.name, self.category
                )));
            }
            match (self.category.is_affine(), unit.kind) {
                (false, UnitKind::Linear { factor }) => {
                    if !factor.is_finite() || factor == 0.0 {
                        return Err(ConvertError::internal(format!(
                            "unit '{}' in {} has unusable factor {}",
                            unit.name, self.category, factor
                        )));
                    }
                }
                (true, UnitKind::Affine(_)) => {}
                _ => {
                    return Err(ConvertError::internal(format!(
                        "unit '{}' has the wrong kind for {}",
                        unit.name, self.category
                    )));
                }
            }
        }

        let bases = self.units.iter().filter(|u| u.is_base()).count();
        if bases != 1 {
            return Err(ConvertError::internal(format!(
                "{} must have exactly one base unit, found {}",
                self.category, bases
            )));
        }
        if self.units.len() < 2 {
            return Err(ConvertError::internal(format!(
                "{} needs at least two units for a default pair",
                self.category
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Mapping from category to its unit table.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    tables: Vec<CategoryTable>,
}

impl Registry {
    /// Build a registry from tables, rejecting any that break the invariants.
    pub fn new(tables: Vec<CategoryTable>) -> ConvertResult<Self> {
        let mut seen = HashSet::new();
        for table in &tables {
            if !seen.insert(table.category) {
                return Err(ConvertError::internal(format!(
                    "category {} registered twice",
                    table.category
                )));
            }
            table.validate()?;
            trace!(category = %table.category, units = table.units.len(), "validated category table");
        }
        Ok(Self { tables })
    }

    /// The fixed built-in table.
    ///
    /// Panics if the table breaks an invariant; that is a programming error
    /// caught by the test suite, never a runtime condition.
    fn builtin() -> Self {
        match Self::new(builtin_tables()) {
            Ok(registry) => {
                debug!(categories = registry.tables.len(), "unit registry initialized");
                registry
            }
            Err(e) => panic!("built-in unit registry is invalid: {e}"),
        }
    }

    /// Category names in listing order
    pub fn categories(&self) -> Vec<&'static str> {
        self.tables.iter().map(|t| t.category.display_name()).collect()
    }

    /// Look up a category by name
    pub fn lookup(&self, category: &str) -> ConvertResult<&CategoryTable> {
        let wanted: Category = category.parse()?;
        self.table(wanted)
    }

    /// Look up a category by enum
    pub fn table(&self, category: Category) -> ConvertResult<&CategoryTable> {
        self.tables
            .iter()
            .find(|t| t.category == category)
            .ok_or_else(|| ConvertError::unknown_category(category.display_name()))
    }

    /// Unit names of a category in insertion order
    pub fn unit_names(&self, category: &str) -> ConvertResult<Vec<&'static str>> {
        Ok(self.lookup(category)?.unit_names())
    }

    /// The conventional default (from, to) pair: the first two units
    pub fn default_pair(&self, category: &str) -> ConvertResult<(&'static str, &'static str)> {
        let table = self.lookup(category)?;
        match table.units.as_slice() {
            [first, second, ..] => Ok((first.name, second.name)),
            _ => Err(ConvertError::internal(format!(
                "{} has fewer than two units",
                table.category
            ))),
        }
    }
}

fn builtin_tables() -> Vec<CategoryTable> {
    vec![
        CategoryTable::new(
            Category::Length,
            vec![
                UnitDefinition::linear("Meter", 1.0),
                UnitDefinition::linear("Kilometer", 0.001),
                UnitDefinition::linear("Centimeter", 100.0),
                UnitDefinition::linear("Millimeter", 1000.0),
                UnitDefinition::linear("Mile", 0.000621371),
                UnitDefinition::linear("Yard", 1.09361),
                UnitDefinition::linear("Foot", 3.28084),
                UnitDefinition::linear("Inch", 39.3701),
            ],
        ),
        CategoryTable::new(
            Category::Weight,
            vec![
                UnitDefinition::linear("Kilogram", 1.0),
                UnitDefinition::linear("Gram", 1000.0),
                UnitDefinition::linear("Milligram", 1e6),
                UnitDefinition::linear("Pound", 2.20462),
                UnitDefinition::linear("Ounce", 35.274),
            ],
        ),
        CategoryTable::new(
            Category::Temperature,
            vec![
                UnitDefinition::affine(CELSIUS),
                UnitDefinition::affine(FAHRENHEIT),
                UnitDefinition::affine(KELVIN),
            ],
        ),
        CategoryTable::new(
            Category::Speed,
            vec![
                UnitDefinition::linear("Meters per second", 1.0),
                UnitDefinition::linear("Kilometers per hour", 3.6),
                UnitDefinition::linear("Miles per hour", 2.23694),
            ],
        ),
        CategoryTable::new(
            Category::Time,
            vec![
                UnitDefinition::linear("Second", 1.0),
                UnitDefinition::linear("Minute", 1.0 / 60.0),
                UnitDefinition::linear("Hour", 1.0 / 3600.0),
                UnitDefinition::linear("Day", 1.0 / 86400.0),
            ],
        ),
        CategoryTable::new(
            Category::Area,
            vec![
                UnitDefinition::linear("Square Meter", 1.0),
                UnitDefinition::linear("Square Kilometer", 1e-6),
                UnitDefinition::linear("Hectare", 1e-4),
                UnitDefinition::linear("Acre", 0.000247105),
                UnitDefinition::linear("Square Mile", 3.861e-7),
            ],
        ),
        CategoryTable::new(
            Category::Volume,
            vec![
                UnitDefinition::linear("Liter", 1.0),
                UnitDefinition::linear("Milliliter", 1000.0),
                UnitDefinition::linear("Cubic Meter", 0.001),
                UnitDefinition::linear("Gallon", 0.264172),
                UnitDefinition::linear("Cup", 4.16667),
            ],
        ),
    ]
}
