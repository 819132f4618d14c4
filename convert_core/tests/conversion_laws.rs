//! Properties that must hold for every unit pair in the built-in registry.

use convert_core::explain::parse_linear_multiplier;
use convert_core::registry::registry;
use convert_core::{categories, convert, units, Category, ConvertError};

const SAMPLE_VALUES: [f64; 6] = [0.0, 1.0, -3.5, 12.75, 1234.5678, 1.0e-3];

fn linear_categories() -> impl Iterator<Item = Category> {
    Category::ALL.into_iter().filter(|c| !c.is_affine())
}

#[test]
fn round_trip_returns_original_value() {
    for category in linear_categories() {
        let name = category.display_name();
        let names = units(name).unwrap();
        for a in &names {
            for b in &names {
                for v in SAMPLE_VALUES {
                    let there = convert(v, a, b, name).unwrap().result;
                    let back = convert(there, b, a, name).unwrap().result;
                    let tol = 1e-9 * v.abs().max(1.0);
                    assert!(
                        (back - v).abs() <= tol,
                        "{name}: {v} {a} -> {b} -> {a} gave {back}"
                    );
                }
            }
        }
    }
}

#[test]
fn temperature_round_trip() {
    let names = units("Temperature").unwrap();
    for a in &names {
        for b in &names {
            for v in [-40.0, 0.0, 36.6, 100.0, 451.0] {
                let there = convert(v, a, b, "Temperature").unwrap().result;
                let back = convert(there, b, a, "Temperature").unwrap().result;
                assert!((back - v).abs() <= 1e-9, "{v} {a} -> {b} -> {a} gave {back}");
            }
        }
    }
}

#[test]
fn identity_is_exact_in_every_category() {
    for name in categories() {
        for unit in units(name).unwrap() {
            for v in SAMPLE_VALUES {
                let out = convert(v, unit, unit, name).unwrap();
                assert_eq!(out.result, v, "{name}: {unit} -> {unit}");
            }
        }
    }
}

#[test]
fn linear_identity_explains_unit_multiplier() {
    for category in linear_categories() {
        let name = category.display_name();
        for unit in units(name).unwrap() {
            let out = convert(5.0, unit, unit, name).unwrap();
            assert_eq!(
                out.explanation,
                format!("Formula used: 5 {unit} × 1 = 5.0000 {unit}")
            );
            assert_eq!(parse_linear_multiplier(&out.explanation), Some(1.0));
        }
    }
}

#[test]
fn temperature_identity_explains_itself() {
    for unit in units("Temperature").unwrap() {
        let out = convert(10.0, unit, unit, "Temperature").unwrap();
        assert_eq!(out.explanation, format!("Formula used: {unit} remains the same."));
    }
}

#[test]
fn explanation_multiplier_matches_registry_ratio() {
    for category in linear_categories() {
        let table = registry().table(category).unwrap();
        for from in &table.units {
            for to in &table.units {
                let out = convert(7.25, from.name, to.name, category.display_name()).unwrap();
                let expected = table.factor(to.name).unwrap() / table.factor(from.name).unwrap();
                assert_eq!(
                    parse_linear_multiplier(&out.explanation),
                    Some(expected),
                    "{}",
                    out.explanation
                );
            }
        }
    }
}

#[test]
fn linear_explanation_shows_four_decimals() {
    let out = convert(1.0, "Mile", "Foot", "Length").unwrap();
    let shown = out.explanation.rsplit(" = ").next().unwrap();
    assert_eq!(shown, format!("{:.4} Foot", out.result));
}

#[test]
fn reference_values() {
    let t = |v, from, to| convert(v, from, to, "Temperature").unwrap().result;
    assert_eq!(t(0.0, "Celsius", "Fahrenheit"), 32.0);
    assert_eq!(t(100.0, "Celsius", "Fahrenheit"), 212.0);
    assert_eq!(t(0.0, "Celsius", "Kelvin"), 273.15);

    assert_eq!(convert(1.0, "Meter", "Kilometer", "Length").unwrap().result, 0.001);
    assert!((convert(1.0, "Mile", "Foot", "Length").unwrap().result - 5280.0).abs() < 1e-2);
    assert!((convert(5.0, "Kilogram", "Pound", "Weight").unwrap().result - 11.0231).abs() < 1e-3);
}

#[test]
fn unknown_names_are_rejected() {
    assert_eq!(
        convert(1.0, "Meter", "Cubit", "Length").unwrap_err(),
        ConvertError::unknown_unit("Length", "Cubit")
    );
    assert_eq!(
        convert(1.0, "Cubit", "Meter", "Length").unwrap_err(),
        ConvertError::unknown_unit("Length", "Cubit")
    );
    assert_eq!(
        convert(1.0, "Meter", "Foot", "Luminosity").unwrap_err(),
        ConvertError::unknown_category("Luminosity")
    );
}

#[test]
fn units_do_not_cross_categories() {
    let err = convert(1.0, "Kilogram", "Meter", "Length").unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_UNIT");
}

#[test]
fn registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                convert(i as f64, "Liter", "Milliliter", "Volume").unwrap().result
            })
        })
        .collect();
    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, [0.0, 1000.0, 2000.0, 3000.0]);
}
