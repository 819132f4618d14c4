//! # Explanations
//!
//! Builds the human-readable "Formula used: ..." strings returned with every
//! conversion.
//!
//! Linear categories show the single multiplication actually performed:
//!
//! ```text
//! Formula used: 5 Kilogram × 2.20462 = 11.0231 Pound
//! ```
//!
//! The value and multiplier use the shortest representation that parses back
//! to the same `f64`, so the multiplier in the text is exactly
//! `factor(to) / factor(from)`. Magnitudes below 1e-9 or from 1e15 up are
//! written in exponent form (`1e300`). Only the result is rounded
//! (4 decimals).
//!
//! Temperature shows the sentence(s) for whichever steps through Celsius were
//! not the identity.

use crate::units::{AffineUnit, CELSIUS};

/// Prefix shared by every explanation
pub const FORMULA_PREFIX: &str = "Formula used: ";

/// Decimal places of the result as written in an explanation
pub const EXPLANATION_DECIMALS: usize = 4;

const TIMES: &str = " × ";

/// Magnitudes in `[PLAIN_MIN, PLAIN_MAX)` are written positionally, others in
/// exponent form.
const PLAIN_MIN: f64 = 1e-9;
const PLAIN_MAX: f64 = 1e15;

/// Shortest round-trip text for `x`, switching to exponent notation
/// (`1e300`, `2.5e-12`) outside the plain range so the text stays short.
fn format_number(x: f64) -> String {
    let magnitude = x.abs();
    if x == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        x.to_string()
    } else {
        format!("{:e}", x)
    }
}

/// Explanation for a linear (scale factor) conversion.
///
/// # Example
/// ```rust
/// use convert_core::explain::linear_formula;
///
/// let text = linear_formula(1.0, "Meter", "Kilometer", 0.001, 0.001);
/// assert_eq!(text, "Formula used: 1 Meter × 0.001 = 0.0010 Kilometer");
/// ```
pub fn linear_formula(value: f64, from: &str, to: &str, multiplier: f64, result: f64) -> String {
    format!(
        "{FORMULA_PREFIX}{} {from}{TIMES}{} = {result:.prec$} {to}",
        format_number(value),
        format_number(multiplier),
        prec = EXPLANATION_DECIMALS
    )
}

/// Explanation for a temperature conversion between two distinct units.
///
/// Celsius legs contribute nothing, so only real arithmetic is described.
/// Between two non-Celsius units both steps appear, source step first.
pub fn affine_formula(from: &AffineUnit, to: &AffineUnit) -> String {
    let steps: Vec<&str> = match (*from == CELSIUS, *to == CELSIUS) {
        (true, true) => vec![CELSIUS.from_base_explanation],
        (true, false) => vec![to.from_base_explanation],
        (false, true) => vec![from.to_base_explanation],
        (false, false) => vec![from.to_base_explanation, to.from_base_explanation],
    };
    format!("{FORMULA_PREFIX}{}", steps.join(" "))
}

/// Explanation for converting a unit to itself.
pub fn identity_formula(unit: &str) -> String {
    format!("{FORMULA_PREFIX}{unit} remains the same.")
}

/// Pull the multiplier back out of a [`linear_formula`] explanation.
///
/// Returns `None` for temperature explanations or anything not produced by
/// `linear_formula`.
pub fn parse_linear_multiplier(explanation: &str) -> Option<f64> {
    let body = explanation.strip_prefix(FORMULA_PREFIX)?;
    let (_, rest) = body.split_once(TIMES)?;
    let (multiplier, _) = rest.split_once(" = ")?;
    multiplier.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{FAHRENHEIT, KELVIN};

    #[test]
    fn test_linear_formula_layout() {
        let text = linear_formula(5.0, "Kilogram", "Pound", 2.20462, 11.0231);
        assert_eq!(text, "Formula used: 5 Kilogram × 2.20462 = 11.0231 Pound");
    }

    #[test]
    fn test_linear_formula_rounds_only_result() {
        let multiplier = 3.28084 / 0.000621371;
        let text = linear_formula(1.0, "Mile", "Foot", multiplier, multiplier);
        assert!(text.ends_with(&format!("= {:.4} Foot", multiplier)));
        assert_eq!(parse_linear_multiplier(&text), Some(multiplier));
    }

    #[test]
    fn test_small_multiplier_survives_text() {
        let multiplier = 3.861e-7 / 1e-4;
        let text = linear_formula(2.5, "Hectare", "Square Mile", multiplier, 2.5 * multiplier);
        assert_eq!(parse_linear_multiplier(&text), Some(multiplier));
    }

    #[test]
    fn test_extreme_values_use_exponent_form() {
        let text = linear_formula(1e300, "Meter", "Meter", 1.0, 1e300);
        assert!(text.starts_with("Formula used: 1e300 Meter × 1 = "));

        let text = linear_formula(1e-320, "Meter", "Meter", 1.0, 1e-320);
        assert_eq!(text, "Formula used: 1e-320 Meter × 1 = 0.0000 Meter");
    }

    #[test]
    fn test_exponent_multiplier_parses_back() {
        let multiplier = 1e-12;
        let text = linear_formula(1.0, "Second", "Day", multiplier, multiplier);
        assert!(text.contains("× 1e-12 ="));
        assert_eq!(parse_linear_multiplier(&text), Some(multiplier));
    }

    #[test]
    fn test_format_number_ranges() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(3.861e-7), "0.0000003861");
        assert_eq!(format_number(-2.5e-12), "-2.5e-12");
        assert_eq!(format_number(123456.5), "123456.5");
        assert_eq!(format_number(2e15), "2e15");
    }

    #[test]
    fn test_affine_from_celsius_uses_target_step() {
        assert_eq!(
            affine_formula(&CELSIUS, &KELVIN),
            "Formula used: Kelvin is obtained by adding 273.15 to Celsius."
        );
    }

    #[test]
    fn test_affine_to_celsius_uses_source_step() {
        assert_eq!(
            affine_formula(&FAHRENHEIT, &CELSIUS),
            "Formula used: Celsius is calculated by subtracting 32 from Fahrenheit and multiplying by 5/9."
        );
    }

    #[test]
    fn test_affine_between_non_celsius_joins_steps() {
        let text = affine_formula(&KELVIN, &FAHRENHEIT);
        assert_eq!(
            text,
            "Formula used: Celsius is obtained by subtracting 273.15 from Kelvin. \
             Fahrenheit is calculated by multiplying Celsius by 9/5 and adding 32."
        );
    }

    #[test]
    fn test_identity_formula() {
        assert_eq!(identity_formula("Celsius"), "Formula used: Celsius remains the same.");
    }

    #[test]
    fn test_parse_rejects_temperature_text() {
        assert_eq!(parse_linear_multiplier(&identity_formula("Kelvin")), None);
        assert_eq!(parse_linear_multiplier("nonsense"), None);
    }
}
