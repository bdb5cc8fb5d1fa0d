//! Conversion scenarios: convert_unit_to and convert_to_base_units

use mensura_ucum::{ConversionStatus, Engine};

fn engine() -> Engine<'static> {
    Engine::new()
}

#[test]
fn grams_to_metric_carats() {
    let resp = engine().convert_unit_to("g", 56.0, "[car_m]", false, None);
    assert_eq!(resp.status, ConversionStatus::Succeeded);
    assert_eq!(resp.to_val, Some(280.0));
    assert_eq!(resp.from_unit.unwrap().cs_code, "g");
    assert_eq!(resp.to_unit.unwrap().cs_code, "[car_m]");
}

#[test]
fn fahrenheit_to_celsius() {
    let resp = engine().convert_unit_to("[degF]", 0.0, "Cel", false, None);
    assert_eq!(resp.status, ConversionStatus::Succeeded);
    let v = resp.to_val.unwrap();
    assert_eq!((v * 100.0).round(), -1778.0);
}

#[test]
fn celsius_to_fahrenheit_round_trip() {
    let e = engine();
    let there = e.convert_unit_to("Cel", 37.0, "[degF]", false, None);
    assert_eq!(there.status, ConversionStatus::Succeeded);
    let f = there.to_val.unwrap();
    assert!((f - 98.6).abs() < 1e-9);
    let back = e.convert_unit_to("[degF]", f, "Cel", false, None);
    assert!((back.to_val.unwrap() - 37.0).abs() < 1e-6);
}

#[test]
fn substance_to_mass_concentration_with_molecular_weight() {
    let resp = engine().convert_unit_to("mmol/L", 5.33, "mg/dL", false, Some(180.156));
    assert_eq!(resp.status, ConversionStatus::Succeeded);
    let v = resp.to_val.unwrap();
    assert_eq!(v.round(), 96.0);
    assert!((v - 96.023).abs() < 0.01);
}

#[test]
fn mass_to_substance_concentration_with_molecular_weight() {
    let resp = engine().convert_unit_to("mg/dL", 96.023148, "mmol/L", false, Some(180.156));
    assert_eq!(resp.status, ConversionStatus::Succeeded);
    assert!((resp.to_val.unwrap() - 5.33).abs() < 1e-6);
}

#[test]
fn missing_molecular_weight_draws_the_advisory() {
    let resp = engine().convert_unit_to("mmol/L", 5.33, "mg/dL", false, None);
    assert_eq!(resp.status, ConversionStatus::Failed);
    assert!(resp.msg[0].starts_with("Did you wish to convert between mass and moles?"));
}

#[test]
fn base_units_of_a_ratio_expression() {
    let resp = engine().convert_to_base_units("cm2/ms3", 1.0);
    assert_eq!(resp.status, ConversionStatus::Succeeded);
    assert!(!resp.from_unit_is_special);
    let magnitude = resp.magnitude.unwrap();
    assert!((magnitude - 100000.0).abs() < 1e-4);
    let map = resp.unit_to_exp.unwrap();
    assert_eq!(map.get("m"), Some(&2));
    assert_eq!(map.get("s"), Some(&-3));
    assert_eq!(map.len(), 2);
}

#[test]
fn base_units_of_a_special_unit() {
    let resp = engine().convert_to_base_units("[degF]", 32.0);
    assert_eq!(resp.status, ConversionStatus::Succeeded);
    assert!(resp.from_unit_is_special);
    assert!((resp.magnitude.unwrap() - 273.15).abs() < 1e-9);
    let map = resp.unit_to_exp.unwrap();
    assert_eq!(map.get("K"), Some(&1));
    assert_eq!(map.len(), 1);
}

#[test]
fn incommensurable_conversion_fails_with_the_sorry_message() {
    let resp = engine().convert_unit_to("g", 1.0, "/g", false, None);
    assert_eq!(resp.status, ConversionStatus::Failed);
    assert!(resp
        .msg
        .iter()
        .any(|m| m == "Sorry. g cannot be converted to /g."));
}

#[test]
fn sibling_number_advisory_precedes_the_failure() {
    let resp = engine().convert_unit_to("mol", 1.0, "78.4(mmol/L)/s", false, None);
    assert_eq!(resp.status, ConversionStatus::Failed);
    assert!(resp.msg[0].contains("Did you mean 78.4.(mmol/L)/s?"));
    assert_eq!(
        resp.msg[1],
        "Sorry. mol cannot be converted to 78.4.(mmol/L)/s."
    );
}

#[test]
fn unparseable_side_reports_unable_to_find() {
    let resp = engine().convert_unit_to("mcg", 1.0, "g", false, None);
    assert_eq!(resp.status, ConversionStatus::Failed);
    assert!(resp
        .msg
        .iter()
        .any(|m| m == "Unable to find a unit for mcg, so no conversion could be performed."));
}

#[test]
fn arbitrary_units_block_conversion_even_as_factors() {
    let e = engine();
    let direct = e.convert_unit_to("[iU]", 1.0, "[iU]", false, None);
    assert_eq!(direct.status, ConversionStatus::Failed);
    assert!(direct.msg[0].starts_with("Arbitrary units cannot be converted"));

    let as_factor = e.convert_unit_to("[iU]/mL", 1.0, "/mL", false, None);
    assert_eq!(as_factor.status, ConversionStatus::Failed);

    let base = e.convert_to_base_units("[arb]", 1.0);
    assert_eq!(base.status, ConversionStatus::Failed);
}

#[test]
fn empty_sides_are_an_error() {
    let resp = engine().convert_unit_to("", 1.0, "g", false, None);
    assert_eq!(resp.status, ConversionStatus::Error);
    assert_eq!(resp.msg[0], "No unit string specified.");
}

#[test]
fn pressure_and_volume_conversions_agree_with_reference_values() {
    let e = engine();
    let mmhg = e.convert_unit_to("mm[Hg]", 120.0, "Pa", false, None);
    assert!((mmhg.to_val.unwrap() - 15998.64).abs() < 1e-6);

    let dl = e.convert_unit_to("dL", 1.0, "L", false, None);
    assert!((dl.to_val.unwrap() - 0.1).abs() < 1e-12);

    let minutes = e.convert_unit_to("min", 1.0, "s", false, None);
    assert_eq!(minutes.to_val, Some(60.0));
}

#[test]
fn dimensionless_scales_convert_through_their_magnitudes() {
    let e = engine();
    let percent = e.convert_unit_to("%", 50.0, "[ppth]", false, None);
    assert_eq!(percent.status, ConversionStatus::Succeeded);
    assert!((percent.to_val.unwrap() - 500.0).abs() < 1e-9);
}

#[test]
fn ph_converts_to_substance_concentration() {
    let resp = engine().convert_unit_to("[pH]", 7.0, "mol/L", false, None);
    assert_eq!(resp.status, ConversionStatus::Succeeded);
    assert!((resp.to_val.unwrap() - 1e-7).abs() < 1e-16);
}

#[test]
fn prefixed_special_unit_converts_consistently() {
    // 1 mCel is a thousandth of a Celsius degree reading
    let resp = engine().convert_unit_to("mCel", 1000.0, "Cel", false, None);
    assert_eq!(resp.status, ConversionStatus::Succeeded);
    assert!((resp.to_val.unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn base_units_of_mole_expressions_fold_avogadro_into_the_magnitude() {
    let resp = engine().convert_to_base_units("mol", 1.0);
    assert_eq!(resp.status, ConversionStatus::Succeeded);
    assert!(resp.unit_to_exp.unwrap().is_empty());
    assert!((resp.magnitude.unwrap() - 6.0221367e23).abs() < 1e9);
}
