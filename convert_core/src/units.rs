//! # Unit Definitions
//!
//! A unit is either a plain scale factor relative to its category's base
//! (`Linear`) or a pair of offset transforms through Celsius (`Affine`, used
//! only by Temperature).
//!
//! ## Linear units
//!
//! The factor says how many of this unit make one base unit:
//!
//! ```text
//! base   = value / factor_from
//! result = base  * factor_to
//! ```
//!
//! so Kilometer has factor 0.001 and Centimeter has factor 100 against Meter.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::units::{UnitDefinition, UnitKind};
//!
//! let foot = UnitDefinition::linear("Foot", 3.28084);
//! assert_eq!(foot.factor(), Some(3.28084));
//!
//! let fahrenheit = UnitDefinition::affine(convert_core::units::FAHRENHEIT);
//! assert!(matches!(fahrenheit.kind, UnitKind::Affine(_)));
//! assert_eq!(fahrenheit.to_base(212.0), 100.0);
//! ```

use std::fmt;

// ============================================================================
// Affine (Temperature) Units
// ============================================================================

/// A unit related to the Celsius base by an offset and/or scale.
///
/// Each direction carries the sentence shown to the user when that step is
/// the one doing the arithmetic.
#[derive(Clone, Copy)]
pub struct AffineUnit {
    /// Unit name, e.g. "Fahrenheit"
    pub name: &'static str,
    /// unit -> Celsius
    pub to_base: fn(f64) -> f64,
    /// Celsius -> unit
    pub from_base: fn(f64) -> f64,
    /// Describes the unit -> Celsius step
    pub to_base_explanation: &'static str,
    /// Describes the Celsius -> unit step
    pub from_base_explanation: &'static str,
}

impl fmt::Debug for AffineUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AffineUnit")
            .field("name", &self.name)
            .field("to_base_explanation", &self.to_base_explanation)
            .field("from_base_explanation", &self.from_base_explanation)
            .finish()
    }
}

impl PartialEq for AffineUnit {
    // Function pointers are not reliably comparable; the name identifies the unit.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

fn identity(x: f64) -> f64 {
    x
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - 273.15
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}

/// Celsius, the Temperature base
pub const CELSIUS: AffineUnit = AffineUnit {
    name: "Celsius",
    to_base: identity,
    from_base: identity,
    to_base_explanation: "Celsius remains the same.",
    from_base_explanation: "Celsius remains the same.",
};

/// Fahrenheit: F = C × 9/5 + 32
pub const FAHRENHEIT: AffineUnit = AffineUnit {
    name: "Fahrenheit",
    to_base: fahrenheit_to_celsius,
    from_base: celsius_to_fahrenheit,
    to_base_explanation: "Celsius is calculated by subtracting 32 from Fahrenheit and multiplying by 5/9.",
    from_base_explanation: "Fahrenheit is calculated by multiplying Celsius by 9/5 and adding 32.",
};

/// Kelvin: K = C + 273.15
pub const KELVIN: AffineUnit = AffineUnit {
    name: "Kelvin",
    to_base: kelvin_to_celsius,
    from_base: celsius_to_kelvin,
    to_base_explanation: "Celsius is obtained by subtracting 273.15 from Kelvin.",
    from_base_explanation: "Kelvin is obtained by adding 273.15 to Celsius.",
};

// ============================================================================
// Unit Definition
// ============================================================================

/// How a unit relates to its category's base unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitKind {
    /// Pure scaling: `factor` of this unit equal one base unit
    Linear { factor: f64 },
    /// Offset transform through Celsius
    Affine(AffineUnit),
}

/// A named unit within a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDefinition {
    pub name: &'static str,
    pub kind: UnitKind,
}

impl UnitDefinition {
    pub const fn linear(name: &'static str, factor: f64) -> Self {
        Self {
            name,
            kind: UnitKind::Linear { factor },
        }
    }

    pub const fn affine(unit: AffineUnit) -> Self {
        Self {
            name: unit.name,
            kind: UnitKind::Affine(unit),
        }
    }

    /// Scale factor, `None` for affine units
    pub fn factor(&self) -> Option<f64> {
        match self.kind {
            UnitKind::Linear { factor } => Some(factor),
            UnitKind::Affine(_) => None,
        }
    }

    /// Whether this is the category's base unit (factor 1, or Celsius)
    pub fn is_base(&self) -> bool {
        match self.kind {
            UnitKind::Linear { factor } => factor == 1.0,
            UnitKind::Affine(unit) => unit == CELSIUS,
        }
    }

    /// Express `value` (in this unit) in the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match self.kind {
            UnitKind::Linear { factor } => value / factor,
            UnitKind::Affine(unit) => (unit.to_base)(value),
        }
    }

    /// Express a base-unit `value` in this unit
    pub fn from_base(&self, value: f64) -> f64 {
        match self.kind {
            UnitKind::Linear { factor } => value * factor,
            UnitKind::Affine(unit) => (unit.from_base)(value),
        }
    }
}
