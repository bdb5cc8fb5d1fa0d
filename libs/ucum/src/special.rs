//! Special (non-linear) conversion functions
//!
//! Units like the Celsius degree, pH or the decibel variants do not
//! convert to their base by pure multiplication. Each such unit names a
//! function pair in this registry: `from` maps a value on the special
//! scale to the ratio base, `to` is its inverse. The registry is
//! initialised once and read-only afterwards.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A forward/inverse pair of pure numeric functions
#[derive(Clone, Copy)]
pub struct SpecialFunction {
    pub name: &'static str,
    from: fn(f64) -> f64,
    to: fn(f64) -> f64,
}

impl SpecialFunction {
    /// Map a value on the special scale onto the ratio base
    pub fn to_ratio(&self, x: f64) -> f64 {
        (self.from)(x)
    }

    /// Map a value on the ratio base onto the special scale
    pub fn from_ratio(&self, x: f64) -> f64 {
        (self.to)(x)
    }
}

impl std::fmt::Debug for SpecialFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecialFunction")
            .field("name", &self.name)
            .finish()
    }
}

static REGISTRY: Lazy<HashMap<&'static str, SpecialFunction>> = Lazy::new(|| {
    let mut m = HashMap::new();
    let mut reg = |name: &'static str, from: fn(f64) -> f64, to: fn(f64) -> f64| {
        m.insert(name, SpecialFunction { name, from, to });
    };

    // Temperatures. The gram-degree magnitudes live on the atoms; these
    // pairs only shift onto the absolute scale.
    reg("cel", |x| x + 273.15, |x| x - 273.15);
    reg("degf", |x| x + 459.67, |x| x - 459.67);
    reg("degre", |x| x + 218.52, |x| x - 218.52);

    // Logarithmic scales.
    reg("ph", |x| 10f64.powf(-x), |x| -x.log10());
    reg("ln", f64::exp, |x| x.ln());
    reg("lg", |x| 10f64.powf(x), |x| x.log10());
    reg("2lg", |x| 10f64.powf(x / 2.0), |x| 2.0 * x.log10());
    reg("ld", f64::exp2, |x| x.log2());

    // Prism diopter: the tangent of the angle, times 100.
    reg("100tan", |x| (x / 100.0).atan(), |x| x.tan() * 100.0);

    // Homeopathic potency scales.
    reg("hpx", |x| 10f64.powf(-x), |x| -x.log10());
    reg("hpc", |x| 100f64.powf(-x), |x| -x.ln() / 100f64.ln());

    m
});

/// Look up a function pair by name (case-insensitive)
pub fn for_name(name: &str) -> Result<&'static SpecialFunction> {
    REGISTRY
        .get(name.to_ascii_lowercase().as_str())
        .ok_or_else(|| Error::UnknownSpecialFunction(name.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn celsius_shifts_onto_kelvin() {
        let f = for_name("cel").unwrap();
        close(f.to_ratio(0.0), 273.15);
        close(f.from_ratio(273.15), 0.0);
    }

    #[test]
    fn fahrenheit_shifts_onto_rankine() {
        let f = for_name("degF").unwrap();
        close(f.to_ratio(0.0), 459.67);
        close(f.from_ratio(491.67), 32.0);
    }

    #[test]
    fn ph_is_negative_log10() {
        let f = for_name("pH").unwrap();
        close(f.to_ratio(7.0), 1e-7);
        close(f.from_ratio(1e-3), 3.0);
    }

    #[test]
    fn log_pairs_invert_each_other() {
        for name in ["ln", "lg", "2lg", "ld", "100tan", "hpX", "hpC"] {
            let f = for_name(name).unwrap();
            for x in [0.25, 1.0, 3.5] {
                close(f.from_ratio(f.to_ratio(x)), x);
            }
        }
    }

    #[test]
    fn unknown_name_is_reported() {
        assert!(matches!(
            for_name("nope"),
            Err(Error::UnknownSpecialFunction(_))
        ));
    }
}
