//! # Conversion Engine
//!
//! Stateless conversion between two units of one category. Every call either
//! returns a complete result with its explanation or fails with a
//! [`ConvertError`]; there is no partial output.
//!
//! ## Algorithms
//!
//! - **Linear categories**: `result = value × (factor_to / factor_from)`.
//!   The ratio is computed once from the registry factors and written into
//!   the explanation as-is.
//! - **Temperature**: `result = to.from_base(from.to_base(value))` through
//!   Celsius.
//!
//! Converting a unit to itself returns the input value unchanged.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::engine::convert;
//!
//! let out = convert(0.0, "Celsius", "Fahrenheit", "Temperature").unwrap();
//! assert_eq!(out.result, 32.0);
//!
//! let out = convert(1.0, "Meter", "Kilometer", "Length").unwrap();
//! assert_eq!(out.result, 0.001);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::{ConvertError, ConvertResult};
use crate::explain::{affine_formula, identity_formula, linear_formula};
use crate::registry::{registry, CategoryTable};
use crate::units::UnitKind;

/// One conversion to perform. Built per call and consumed by [`execute`](Self::execute).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(
        value: f64,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            value,
            category: category.into(),
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }

    pub fn execute(self) -> ConvertResult<ConversionResult> {
        convert(self.value, &self.from_unit, &self.to_unit, &self.category)
    }
}

/// Outcome of a successful conversion.
///
/// `result` is full precision; only the explanation text is rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub value: f64,
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
    pub explanation: String,
}

/// Category names in listing order.
pub fn categories() -> Vec<&'static str> {
    registry().categories()
}

/// Unit names of `category` in listing order. The first two are the
/// default from/to pair.
pub fn units(category: &str) -> ConvertResult<Vec<&'static str>> {
    registry().unit_names(category)
}

/// Convert `value` from `from_unit` to `to_unit` within `category`.
///
/// Category names match case-insensitively and ignore surrounding
/// whitespace (`"length"` selects Length). Unit names must match the
/// registered name exactly (`"meter"` is not `"Meter"`); take them from
/// [`units`].
///
/// # Errors
/// - `UnknownCategory` if `category` is not registered
/// - `InvalidValue` if `value` is NaN or infinite, or the result overflows
/// - `UnknownUnit` if either unit is absent from the category
pub fn convert(value: f64, from_unit: &str, to_unit: &str, category: &str) -> ConvertResult<ConversionResult> {
    let table = registry().lookup(category)?;
    if !value.is_finite() {
        return Err(ConvertError::invalid_value(value, "Value must be a finite number"));
    }
    let from = table.unit(from_unit)?;
    let to = table.unit(to_unit)?;

    let (result, explanation) = match (from.kind, to.kind) {
        (UnitKind::Linear { factor: f_from }, UnitKind::Linear { factor: f_to }) => {
            let multiplier = f_to / f_from;
            let result = value * multiplier;
            (result, linear_formula(value, from.name, to.name, multiplier, result))
        }
        (UnitKind::Affine(a_from), UnitKind::Affine(a_to)) => {
            if a_from == a_to {
                (value, identity_formula(a_from.name))
            } else {
                let celsius = (a_from.to_base)(value);
                let result = (a_to.from_base)(celsius);
                (result, affine_formula(&a_from, &a_to))
            }
        }
        _ => return Err(mixed_kinds(table, from_unit, to_unit)),
    };

    if !result.is_finite() {
        return Err(ConvertError::invalid_value(
            value,
            format!("Converting to {} overflows the representable range", to.name),
        ));
    }

    trace!(%value, from = from.name, to = to.name, %result, "converted");
    Ok(ConversionResult {
        value,
        category: table.category.display_name().to_string(),
        from_unit: from.name.to_string(),
        to_unit: to.name.to_string(),
        result,
        explanation,
    })
}

fn mixed_kinds(table: &CategoryTable, from_unit: &str, to_unit: &str) -> ConvertError {
    ConvertError::internal(format!(
        "{} mixes linear and affine units ({} -> {})",
        table.category, from_unit, to_unit
    ))
}
