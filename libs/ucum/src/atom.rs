//! Catalog records: unit atoms and metric prefixes
//!
//! Atoms and prefixes are immutable once loaded into an
//! [`AtomTable`](crate::table::AtomTable). Units derived from them copy
//! their attributes and mutate only the copy.

use crate::dimension::Dimension;
use serde::{Deserialize, Serialize};

/// A named UCUM unit from the catalog, base or derived
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Atom {
    /// Case-sensitive code; the unique catalog key
    pub cs_code: String,
    /// Case-insensitive code
    pub ci_code: String,
    /// Display name
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_symbol: Option<String>,
    /// Property tag, e.g. "length"
    pub property: String,
    /// Magnitude relative to the base atoms, as an IEEE-754 float
    pub magnitude: f64,
    /// Magnitude as it appeared in the unit definition
    pub magnitude_exact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dim: Option<Dimension>,
    /// Name of the special (non-linear) conversion function, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<String>,
    /// Scalar applied inside the special function
    pub conv_prefix: f64,
    pub is_base: bool,
    pub is_metric: bool,
    pub is_special: bool,
    pub is_arbitrary: bool,
    /// The unit definition did not parse cleanly at load time
    pub def_error: bool,
    /// Exponent of the mole content; lets the engine recognise
    /// substance concentrations for molar-mass conversions
    pub mole_exp: i32,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub synonyms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loinc_property: Option<String>,
}

impl Atom {
    /// A plain non-metric ratio-scale atom; flags are layered on with the
    /// builder methods below
    pub fn new(cs_code: &str, ci_code: &str, name: &str, property: &str, magnitude: f64) -> Self {
        Atom {
            cs_code: cs_code.to_owned(),
            ci_code: ci_code.to_owned(),
            name: name.to_owned(),
            print_symbol: None,
            property: property.to_owned(),
            magnitude,
            magnitude_exact: format!("{magnitude}"),
            dim: None,
            special: None,
            conv_prefix: 1.0,
            is_base: false,
            is_metric: false,
            is_special: false,
            is_arbitrary: false,
            def_error: false,
            mole_exp: 0,
            synonyms: Vec::new(),
            guidance: None,
            category: None,
            source: None,
            loinc_property: None,
        }
    }

    #[must_use]
    pub fn dim(mut self, dim: Dimension) -> Self {
        self.dim = Some(dim);
        self
    }

    #[must_use]
    pub fn metric(mut self) -> Self {
        self.is_metric = true;
        self
    }

    #[must_use]
    pub fn base_unit(mut self) -> Self {
        self.is_base = true;
        self.is_metric = true;
        self
    }

    /// Attach a special conversion function; the atom is then on a
    /// non-ratio scale
    #[must_use]
    pub fn special(mut self, function: &str) -> Self {
        self.special = Some(function.to_owned());
        self.is_special = true;
        self
    }

    #[must_use]
    pub fn arbitrary(mut self) -> Self {
        self.is_arbitrary = true;
        self
    }

    #[must_use]
    pub fn mole(mut self, exp: i32) -> Self {
        self.mole_exp = exp;
        self
    }

    #[must_use]
    pub fn print(mut self, symbol: &str) -> Self {
        self.print_symbol = Some(symbol.to_owned());
        self
    }

    #[must_use]
    pub fn synonyms(mut self, synonyms: &[&str]) -> Self {
        self.synonyms = synonyms.iter().map(|s| (*s).to_owned()).collect();
        self
    }

    #[must_use]
    pub fn guidance(mut self, text: &str) -> Self {
        self.guidance = Some(text.to_owned());
        self
    }

    #[must_use]
    pub fn source(mut self, source: &str) -> Self {
        self.source = Some(source.to_owned());
        self
    }
}

/// A scalar multiplier attachable to metric atoms
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prefix {
    /// Case-sensitive code, e.g. `k`
    pub cs_code: String,
    /// Case-insensitive code, e.g. `K`
    pub ci_code: String,
    /// Name, e.g. `kilo`
    pub name: String,
    pub value: f64,
    pub value_exact: String,
    /// Power of ten, absent for the binary prefixes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exponent: Option<i32>,
}

impl Prefix {
    pub fn new(cs_code: &str, ci_code: &str, name: &str, value: f64, exponent: Option<i32>) -> Self {
        Prefix {
            cs_code: cs_code.to_owned(),
            ci_code: ci_code.to_owned(),
            name: name.to_owned(),
            value,
            value_exact: format!("{value}"),
            exponent,
        }
    }
}
