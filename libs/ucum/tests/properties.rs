//! Algebraic property suite
//!
//! Manual test cases over representative unit pairs rather than random
//! generation; the properties come from the UCUM arithmetic rules.

use mensura_ucum::{ConversionStatus, Engine, ParseOptions, Unit, UnitParser};

fn engine() -> Engine<'static> {
    Engine::new()
}

fn parse(expression: &str) -> Unit {
    UnitParser::new(mensura_ucum::default_table(), ParseOptions::default())
        .parse(expression)
        .unit
        .unwrap_or_else(|| panic!("{expression} should parse"))
}

/// Property: converting there and back is the identity, to within 1e-9
/// relative error for ratio units and 1e-6 when a special unit is involved
#[test]
fn prop_round_trip() {
    let ratio_pairs = [
        ("g", "[lb_av]"),
        ("m", "[in_i]"),
        ("L", "[gal_us]"),
        ("J", "cal"),
        ("m/s", "[mi_i]/h"),
        ("kg/m3", "[oz_av]/[gal_us]"),
        ("Pa", "mm[Hg]"),
        ("mg/dL", "g/L"),
        ("rad", "deg"),
    ];
    let values = [0.001, 0.5, 1.0, 37.0, 98.6, 12345.678];

    let e = engine();
    for (u, v) in ratio_pairs {
        for x in values {
            let there = e.convert_unit_to(u, x, v, false, None);
            assert_eq!(there.status, ConversionStatus::Succeeded, "{u} -> {v}");
            let back = e.convert_unit_to(v, there.to_val.unwrap(), u, false, None);
            let y = back.to_val.unwrap();
            assert!(
                ((y - x) / x).abs() < 1e-9,
                "{u} <-> {v}: {x} round-tripped to {y}"
            );
        }
    }

    let special_pairs = [("Cel", "[degF]"), ("[pH]", "mol/L"), ("Np", "B")];
    for (u, v) in special_pairs {
        for x in [0.5, 1.0, 7.0, 37.0] {
            let there = e.convert_unit_to(u, x, v, false, None);
            assert_eq!(there.status, ConversionStatus::Succeeded, "{u} -> {v}");
            let back = e.convert_unit_to(v, there.to_val.unwrap(), u, false, None);
            let y = back.to_val.unwrap();
            assert!(
                ((y - x) / x).abs() < 1e-6,
                "{u} <-> {v}: {x} round-tripped to {y}"
            );
        }
    }
}

/// Property: converting a ratio-scale unit to itself is exact
#[test]
fn prop_identity() {
    let e = engine();
    for code in ["g", "m/s2", "mm[Hg]", "10*3/uL", "[gal_us]", "kg.m/s2"] {
        for x in [0.1, 1.0, 98.6, 1e7] {
            let resp = e.convert_unit_to(code, x, code, false, None);
            assert_eq!(resp.to_val, Some(x), "{code}");
        }
    }
}

/// Property: the product of two units is commutative up to equivalence
#[test]
fn prop_product_commutative() {
    let pairs = [("m", "s"), ("kg", "m/s2"), ("N", "m"), ("%", "L")];
    for (a, b) in pairs {
        let ab = parse(a).multiply(&parse(b)).unwrap();
        let ba = parse(b).multiply(&parse(a)).unwrap();
        assert!(ab.is_equivalent(&ba), "{a}.{b} vs {b}.{a}");
    }
}

/// Property: reordering `.`-separated ratio atoms does not change the
/// parsed magnitude or dimension
#[test]
fn prop_product_associative() {
    let groups = [
        ["m.s.g", "g.m.s", "s.g.m"],
        ["kg.m.s-2", "m.kg.s-2", "s-2.kg.m"],
    ];
    for group in groups {
        let reference = parse(group[0]);
        for variant in &group[1..] {
            let unit = parse(variant);
            assert!(
                unit.is_equivalent(&reference),
                "{variant} differs from {}",
                group[0]
            );
        }
    }
}

/// Property: (U^p)^q equals U^(p*q) for integer p, q
#[test]
fn prop_power_laws() {
    let cases = [("m", 2, 3), ("s", -1, 2), ("[in_i]", 2, 2), ("cm", 3, -1)];
    for (code, p, q) in cases {
        let mut stepwise = parse(code);
        stepwise.power(f64::from(p)).unwrap();
        stepwise.power(f64::from(q)).unwrap();

        let mut direct = parse(code);
        direct.power(f64::from(p * q)).unwrap();

        assert!(
            stepwise.is_equivalent(&direct),
            "({code}^{p})^{q} != {code}^{}",
            p * q
        );
    }
}

/// Property: inverting twice restores the unit, up to equivalence
#[test]
fn prop_inversion_involution() {
    for code in ["m", "m/s", "kg.m/s2", "/g", "10*3"] {
        let original = parse(code);
        let mut twice = original.clone();
        twice.invert().unwrap();
        twice.invert().unwrap();
        assert!(twice.is_equivalent(&original), "{code}");
    }
}

/// Property: annotations never affect semantics
#[test]
fn prop_annotation_neutrality() {
    for (bare, annotated) in [
        ("m", "m{height}"),
        ("mg/dL", "mg{glucose}/dL"),
        ("10*3", "10*3{cells}"),
    ] {
        assert!(
            parse(bare).is_equivalent(&parse(annotated)),
            "{annotated}"
        );
    }

    let lone = parse("{any text at all}");
    assert_eq!(lone.magnitude, 1.0);
    assert!(lone.dim.is_none());
}

/// Property: any conversion touching an arbitrary unit fails
#[test]
fn prop_arbitrary_barrier() {
    let e = engine();
    let cases = [
        ("[iU]", "[IU]"),
        ("[iU]", "1"),
        ("1", "[arb]"),
        ("[iU]/mL", "/mL"),
        ("g.[arb]", "g"),
    ];
    for (from, to) in cases {
        let resp = e.convert_unit_to(from, 1.0, to, false, None);
        assert_eq!(resp.status, ConversionStatus::Failed, "{from} -> {to}");
    }
}

/// Property: parsing respects the dimension calculus
#[test]
fn prop_dimension_preservation() {
    let cases = [
        ("m.s", "m", "s", '*'),
        ("m/s", "m", "s", '/'),
        ("kg.m", "kg", "m", '*'),
        ("mol/L", "mol", "L", '/'),
    ];
    for (combined, left, right, op) in cases {
        let c = parse(combined).dim.unwrap_or_default();
        let l = parse(left).dim.unwrap_or_default();
        let r = parse(right).dim.unwrap_or_default();
        let expected = match op {
            '*' => l.add(&r).unwrap(),
            _ => l.sub(&r).unwrap(),
        };
        assert_eq!(c, expected, "{combined}");
    }

    let squared = parse("m2/s2").dim.unwrap();
    let base = parse("m/s").dim.unwrap();
    assert_eq!(squared, base.mul(2).unwrap());
}
