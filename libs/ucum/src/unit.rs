//! Units and the dimensional algebra
//!
//! A [`Unit`] is the transient algebraic value the parser produces: an
//! atom's attributes copied out and then mutated by multiplication,
//! division, exponentiation and inversion. UCUM's ratio-scale rules are
//! enforced here without exception: units carrying a special conversion
//! function take part in almost no algebra, and arbitrary units take part
//! in none at all.

use crate::atom::Atom;
use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::special;
use crate::table::AtomTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a unit maps onto its coherent base
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Conversion {
    /// Pure multiplication by the magnitude
    Ratio,
    /// A registered non-linear function pair, with a scalar applied
    /// inside the function
    Special { function: String, prefix: f64 },
}

impl Conversion {
    pub fn is_ratio(&self) -> bool {
        matches!(self, Conversion::Ratio)
    }
}

/// The algebraic unit value
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub name: String,
    pub cs_code: String,
    pub ci_code: String,
    pub property: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_symbol: Option<String>,
    pub magnitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dim: Option<Dimension>,
    pub conv: Conversion,
    pub is_base: bool,
    pub is_metric: bool,
    pub is_special: bool,
    pub is_arbitrary: bool,
    pub mole_exp: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
}

/// Render a scalar the way it appeared in a code: integers without a
/// fractional part, everything else in shortest round-trip form
pub(crate) fn fmt_num(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

fn join_names(a: &str, op: char, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => String::new(),
        (true, false) => b.to_owned(),
        (false, true) => a.to_owned(),
        (false, false) => format!("[{a}]{op}[{b}]"),
    }
}

fn wrap_divisor(code: &str) -> String {
    if code.contains('.') || code.contains('/') {
        format!("({code})")
    } else {
        code.to_owned()
    }
}

/// Toggle the reciprocal form of a code: a leading `/` is stripped,
/// otherwise one is prepended and inner quotients become products
fn invert_string(s: &str) -> String {
    if s.is_empty() || s == "1" {
        return s.to_owned();
    }
    match s.strip_prefix('/') {
        Some(rest) => rest.to_owned(),
        None => format!("/{}", s.replace('/', ".")),
    }
}

fn add_dims(a: Option<Dimension>, b: Option<Dimension>) -> Result<Option<Dimension>> {
    Ok(match (a, b) {
        (Some(x), Some(y)) => Some(x.add(&y)?),
        (Some(x), None) => Some(x),
        (None, Some(y)) => Some(y),
        (None, None) => None,
    })
}

fn sub_dims(a: Option<Dimension>, b: Option<Dimension>) -> Result<Option<Dimension>> {
    Ok(match (a, b) {
        (Some(x), Some(y)) => Some(x.sub(&y)?),
        (Some(x), None) => Some(x),
        (None, Some(y)) => Some(y.minus()),
        (None, None) => None,
    })
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}

impl Unit {
    /// The dimensionless unit 1
    pub fn one() -> Self {
        Unit {
            name: String::new(),
            cs_code: "1".into(),
            ci_code: "1".into(),
            property: String::new(),
            print_symbol: None,
            magnitude: 1.0,
            dim: None,
            conv: Conversion::Ratio,
            is_base: false,
            is_metric: false,
            is_special: false,
            is_arbitrary: false,
            mole_exp: 0,
            guidance: None,
        }
    }

    /// A dimensionless unit whose magnitude is a numeric literal
    pub fn from_number(n: f64) -> Self {
        let tag = fmt_num(n);
        let mut unit = Unit::one();
        unit.magnitude = n;
        unit.cs_code = tag.clone();
        unit.ci_code = tag.clone();
        unit.name = tag;
        unit
    }

    /// A unit copying a catalog atom's attributes
    pub fn from_atom(atom: &Atom) -> Self {
        Unit {
            name: atom.name.clone(),
            cs_code: atom.cs_code.clone(),
            ci_code: atom.ci_code.clone(),
            property: atom.property.clone(),
            print_symbol: atom.print_symbol.clone(),
            magnitude: atom.magnitude,
            dim: atom.dim,
            conv: match &atom.special {
                Some(function) => Conversion::Special {
                    function: function.clone(),
                    prefix: atom.conv_prefix,
                },
                None => Conversion::Ratio,
            },
            is_base: atom.is_base,
            is_metric: atom.is_metric,
            is_special: atom.is_special,
            is_arbitrary: atom.is_arbitrary,
            mole_exp: atom.mole_exp,
            guidance: atom.guidance.clone(),
        }
    }

    pub fn is_special(&self) -> bool {
        !self.conv.is_ratio()
    }

    /// Dimensionless on the ratio scale: the only units allowed to scale
    /// a special unit
    fn is_plain_dimensionless(&self) -> bool {
        self.conv.is_ratio() && self.dim.map(|d| d.is_zero()).unwrap_or(true)
    }

    /// Semantic equality: magnitude, conversion and dimension; names and
    /// codes are ignored
    pub fn is_equivalent(&self, other: &Unit) -> bool {
        let conv_eq = match (&self.conv, &other.conv) {
            (Conversion::Ratio, Conversion::Ratio) => true,
            (
                Conversion::Special { function: f1, prefix: p1 },
                Conversion::Special { function: f2, prefix: p2 },
            ) => f1.eq_ignore_ascii_case(f2) && approx_eq(*p1, *p2),
            _ => false,
        };
        conv_eq
            && approx_eq(self.magnitude, other.magnitude)
            && self.dim.unwrap_or(Dimension::ZERO) == other.dim.unwrap_or(Dimension::ZERO)
    }

    /// Scale in place: a special unit scales its inner prefix, a ratio
    /// unit its magnitude
    pub fn multiply_scalar(&mut self, s: f64) {
        match &mut self.conv {
            Conversion::Special { prefix, .. } => *prefix *= s,
            Conversion::Ratio => self.magnitude *= s,
        }
        let tag = fmt_num(s);
        self.cs_code = format!("{tag}.{}", self.cs_code);
        self.ci_code = format!("{tag}.{}", self.ci_code);
        self.name = if self.name.is_empty() {
            tag
        } else {
            format!("[{tag}]*[{}]", self.name)
        };
    }

    /// Non-mutating product
    ///
    /// A non-ratio operand is only allowed against a plain dimensionless
    /// ratio operand, whose magnitude then scales the special function's
    /// inner prefix.
    pub fn multiply(&self, other: &Unit) -> Result<Unit> {
        let mut out = match (&self.conv, &other.conv) {
            (Conversion::Special { .. }, Conversion::Special { .. }) => {
                return Err(Error::NonRatioMultiplication(
                    self.cs_code.clone(),
                    other.cs_code.clone(),
                ));
            }
            (Conversion::Special { .. }, Conversion::Ratio) => {
                if !other.is_plain_dimensionless() {
                    return Err(Error::NonRatioMultiplication(
                        self.cs_code.clone(),
                        other.cs_code.clone(),
                    ));
                }
                let mut out = self.clone();
                if let Conversion::Special { prefix, .. } = &mut out.conv {
                    *prefix *= other.magnitude;
                }
                out
            }
            (Conversion::Ratio, Conversion::Special { .. }) => {
                if !self.is_plain_dimensionless() {
                    return Err(Error::NonRatioMultiplication(
                        other.cs_code.clone(),
                        self.cs_code.clone(),
                    ));
                }
                let mut out = other.clone();
                if let Conversion::Special { prefix, .. } = &mut out.conv {
                    *prefix *= self.magnitude;
                }
                out
            }
            (Conversion::Ratio, Conversion::Ratio) => {
                let mut out = self.clone();
                out.magnitude = self.magnitude * other.magnitude;
                out.dim = add_dims(self.dim, other.dim)?;
                out
            }
        };

        out.cs_code = format!("{}.{}", self.cs_code, other.cs_code);
        out.ci_code = format!("{}.{}", self.ci_code, other.ci_code);
        out.name = join_names(&self.name, '*', &other.name);
        out.property = join_property(&self.property, '*', &other.property);
        out.print_symbol = None;
        out.is_base = false;
        out.is_metric = false;
        out.is_arbitrary = self.is_arbitrary || other.is_arbitrary;
        out.mole_exp = self.mole_exp + other.mole_exp;
        out.guidance = None;
        Ok(out)
    }

    /// Non-mutating quotient; both operands must be on a ratio scale
    pub fn divide(&self, other: &Unit) -> Result<Unit> {
        if self.is_special() {
            return Err(Error::NonRatioDivision(self.cs_code.clone()));
        }
        if other.is_special() {
            return Err(Error::NonRatioDivision(other.cs_code.clone()));
        }

        let mut out = self.clone();
        out.magnitude = self.magnitude / other.magnitude;
        out.dim = sub_dims(self.dim, other.dim)?;
        out.cs_code = format!("{}/{}", self.cs_code, wrap_divisor(&other.cs_code));
        out.ci_code = format!("{}/{}", self.ci_code, wrap_divisor(&other.ci_code));
        out.name = if self.name.is_empty() {
            invert_string(&other.name)
        } else {
            join_names(&self.name, '/', &other.name)
        };
        out.property = join_property(&self.property, '/', &other.property);
        out.print_symbol = None;
        out.is_base = false;
        out.is_metric = false;
        out.is_arbitrary = self.is_arbitrary || other.is_arbitrary;
        out.mole_exp = self.mole_exp - other.mole_exp;
        out.guidance = None;
        Ok(out)
    }

    /// Reciprocal, in place
    pub fn invert(&mut self) -> Result<()> {
        if self.is_special() {
            return Err(Error::NonRatioInvert(self.cs_code.clone()));
        }
        self.magnitude = 1.0 / self.magnitude;
        self.dim = self.dim.map(|d| d.minus());
        self.mole_exp = -self.mole_exp;
        self.cs_code = invert_string(&self.cs_code);
        self.ci_code = invert_string(&self.ci_code);
        self.name = invert_string(&self.name);
        Ok(())
    }

    /// Integer exponentiation, in place
    ///
    /// UCUM defines only integer exponents; a fractional `p` is rejected
    /// rather than rounded.
    pub fn power(&mut self, p: f64) -> Result<()> {
        if self.is_special() {
            return Err(Error::NonRatioPower(self.cs_code.clone()));
        }
        if p.fract() != 0.0 || !p.is_finite() || p.abs() > f64::from(i32::MAX) {
            return Err(Error::NonIntegerExponent(self.cs_code.clone()));
        }
        let p = p as i32;
        self.magnitude = self.magnitude.powi(p);
        if let Some(dim) = self.dim {
            self.dim = Some(dim.mul(p)?);
        }
        self.mole_exp = self.mole_exp.checked_mul(p).ok_or(Error::Overflow)?;
        self.cs_code = power_string(&self.cs_code, p);
        self.ci_code = power_string(&self.ci_code, p);
        Ok(())
    }

    /// Convert `num` expressed in `from` into this unit
    ///
    /// Both units must be commensurable (equal dimension vectors, or
    /// either absent, which permits dimensionless arithmetic).
    pub fn convert_from(&self, num: f64, from: &Unit) -> Result<f64> {
        if from.is_arbitrary {
            return Err(Error::ArbitraryUnitNotConvertible(from.cs_code.clone()));
        }
        if self.is_arbitrary {
            return Err(Error::ArbitraryUnitNotConvertible(self.cs_code.clone()));
        }
        if let (Some(a), Some(b)) = (&from.dim, &self.dim) {
            if a != b {
                return Err(Error::IncommensurableUnits {
                    from: from.cs_code.clone(),
                    to: self.cs_code.clone(),
                });
            }
        }

        // Identical conversion on both sides collapses to one ratio,
        // which also covers all pure ratio-scale cases.
        let same_conv = match (&from.conv, &self.conv) {
            (Conversion::Ratio, Conversion::Ratio) => true,
            (
                Conversion::Special { function: f1, prefix: p1 },
                Conversion::Special { function: f2, prefix: p2 },
            ) => f1.eq_ignore_ascii_case(f2) && approx_eq(*p1, *p2),
            _ => false,
        };
        if same_conv {
            if from.magnitude == self.magnitude {
                return Ok(num);
            }
            return Ok(num * from.magnitude / self.magnitude);
        }

        let x = match &from.conv {
            Conversion::Special { function, prefix } => {
                special::for_name(function)?.to_ratio(num * prefix) * from.magnitude
            }
            Conversion::Ratio => num * from.magnitude,
        };
        match &self.conv {
            Conversion::Special { function, prefix } => {
                Ok(special::for_name(function)?.from_ratio(x / self.magnitude) / prefix)
            }
            Conversion::Ratio => Ok(x / self.magnitude),
        }
    }

    /// The value `num` of this unit represents in coherent base form,
    /// without mutating the unit
    pub fn convert_coherent(&self, num: f64) -> Result<f64> {
        match &self.conv {
            Conversion::Special { function, prefix } => {
                Ok(special::for_name(function)?.to_ratio(num * prefix) * self.magnitude)
            }
            Conversion::Ratio => Ok(num * self.magnitude),
        }
    }

    /// Base-atom code to signed exponent, from the dimension vector
    pub fn base_exponents(&self, table: &AtomTable) -> BTreeMap<String, i32> {
        let mut map = BTreeMap::new();
        if let Some(dim) = &self.dim {
            for (index, exp) in dim.nonzero() {
                if let Some(code) = table.base_atom_code(index) {
                    map.insert(code.to_owned(), exp);
                }
            }
        }
        map
    }

    /// Convert `num` to coherent form and rewrite this unit in place to
    /// that form (magnitude 1, ratio scale, code and name rebuilt from
    /// base atoms)
    pub fn mutate_coherent(&mut self, num: f64, table: &AtomTable) -> Result<f64> {
        let value = self.convert_coherent(num)?;
        self.magnitude = 1.0;
        self.conv = Conversion::Ratio;
        self.is_special = false;
        self.print_symbol = None;

        let mut cs = String::new();
        let mut ci = String::new();
        let mut name = String::new();
        if let Some(dim) = &self.dim {
            for (index, exp) in dim.nonzero() {
                let Some(atom) = table
                    .atoms_by_dimension(&Dimension::base(index))
                    .into_iter()
                    .find(|a| a.is_base)
                else {
                    continue;
                };
                if !cs.is_empty() {
                    cs.push('.');
                    ci.push('.');
                    name.push('.');
                }
                cs.push_str(&atom.cs_code);
                ci.push_str(&atom.ci_code);
                name.push_str(&atom.name);
                if exp != 1 {
                    cs.push_str(&exp.to_string());
                    ci.push_str(&exp.to_string());
                    name.push_str(&exp.to_string());
                }
            }
        }
        if cs.is_empty() {
            cs.push('1');
            ci.push('1');
        }
        self.cs_code = cs;
        self.ci_code = ci;
        self.name = name;
        Ok(value)
    }

    /// Promote a special unit to its ratio-scale coherent form; a unit
    /// already on the ratio scale is returned untouched
    pub fn mutate_ratio(&mut self, num: f64, table: &AtomTable) -> Result<f64> {
        if self.is_special() {
            self.mutate_coherent(num, table)
        } else {
            Ok(num)
        }
    }
}

fn join_property(a: &str, op: char, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => String::new(),
        (true, false) => b.to_owned(),
        (false, true) => a.to_owned(),
        (false, false) => format!("{a}{op}{b}"),
    }
}

/// Re-stringify a code under exponentiation: pure integer runs are raised
/// to `p`, atom runs get their trailing exponent multiplied by `p` (or `p`
/// appended when none was present); operators pass through
fn power_string(code: &str, p: i32) -> String {
    let mut out = String::new();
    let mut run = String::new();
    let mut chars = code.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '[' {
            run.push(c);
            while let Some(&b) = chars.peek() {
                run.push(b);
                chars.next();
                if b == ']' {
                    break;
                }
            }
        } else if matches!(c, '.' | '/' | '(' | ')') {
            out.push_str(&power_run(&run, p));
            run.clear();
            out.push(c);
        } else {
            run.push(c);
        }
    }
    out.push_str(&power_run(&run, p));
    out
}

fn power_run(run: &str, p: i32) -> String {
    if run.is_empty() {
        return String::new();
    }
    if run.bytes().all(|b| b.is_ascii_digit()) {
        let value: f64 = run.parse().unwrap_or(1.0);
        return fmt_num(value.powi(p));
    }

    let bytes = run.as_bytes();
    let mut split = run.len();
    while split > 0 && bytes[split - 1].is_ascii_digit() {
        split -= 1;
    }
    if split == run.len() {
        // no trailing exponent; append p
        return format!("{run}{p}");
    }
    let mut base_end = split;
    if base_end > 0 && (bytes[base_end - 1] == b'+' || bytes[base_end - 1] == b'-') {
        base_end -= 1;
    }
    let exp: i32 = run[base_end..].parse().unwrap_or(1);
    format!("{}{}", &run[..base_end], exp * p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::base_index;

    fn table() -> AtomTable {
        AtomTable::with_catalog()
    }

    fn unit(table: &AtomTable, code: &str) -> Unit {
        Unit::from_atom(table.atom_by_cs(code).expect(code))
    }

    #[test]
    fn product_multiplies_magnitudes_and_adds_dimensions() {
        let t = table();
        let n = unit(&t, "N");
        let m = unit(&t, "m");
        let nm = n.multiply(&m).unwrap();
        assert_eq!(nm.magnitude, 1000.0);
        assert_eq!(nm.dim, Some(Dimension::new([2, -2, 1, 0, 0, 0, 0])));
        assert_eq!(nm.cs_code, "N.m");
        assert_eq!(nm.name, "[Newton]*[meter]");
    }

    #[test]
    fn product_is_commutative_up_to_equivalence() {
        let t = table();
        let a = unit(&t, "J");
        let b = unit(&t, "s");
        let ab = a.multiply(&b).unwrap();
        let ba = b.multiply(&a).unwrap();
        assert!(ab.is_equivalent(&ba));
        assert_ne!(ab.cs_code, ba.cs_code);
    }

    #[test]
    fn special_units_resist_most_algebra() {
        let t = table();
        let cel = unit(&t, "Cel");
        let m = unit(&t, "m");
        assert!(matches!(
            cel.multiply(&cel),
            Err(Error::NonRatioMultiplication(..))
        ));
        assert!(matches!(
            cel.multiply(&m),
            Err(Error::NonRatioMultiplication(..))
        ));
        assert!(matches!(cel.divide(&m), Err(Error::NonRatioDivision(_))));
        assert!(matches!(m.divide(&cel), Err(Error::NonRatioDivision(_))));
        let mut c = cel.clone();
        assert!(matches!(c.power(2.0), Err(Error::NonRatioPower(_))));
        let mut c = cel.clone();
        assert!(matches!(c.invert(), Err(Error::NonRatioInvert(_))));
    }

    #[test]
    fn dimensionless_scalar_scales_a_special_units_inner_prefix() {
        let t = table();
        let cel = unit(&t, "Cel");
        let two = Unit::from_number(2.0);
        let scaled = two.multiply(&cel).unwrap();
        match &scaled.conv {
            Conversion::Special { function, prefix } => {
                assert_eq!(function, "cel");
                assert_eq!(*prefix, 2.0);
            }
            Conversion::Ratio => panic!("expected special conversion"),
        }
    }

    #[test]
    fn quotient_divides_magnitudes_and_subtracts_dimensions() {
        let t = table();
        let m = unit(&t, "m");
        let s = unit(&t, "s");
        let mps = m.divide(&s).unwrap();
        assert_eq!(mps.cs_code, "m/s");
        assert_eq!(mps.dim, Some(Dimension::new([1, -1, 0, 0, 0, 0, 0])));
        let per_msq = mps.divide(&s).unwrap();
        assert_eq!(per_msq.cs_code, "m/s/s");
        assert_eq!(per_msq.dim.unwrap().get(base_index::TIME), -2);
    }

    #[test]
    fn divisor_with_operators_is_parenthesised() {
        let t = table();
        let g = unit(&t, "g");
        let m = unit(&t, "m");
        let s = unit(&t, "s");
        let ms = m.multiply(&s).unwrap();
        let q = g.divide(&ms).unwrap();
        assert_eq!(q.cs_code, "g/(m.s)");
    }

    #[test]
    fn invert_string_follows_the_reciprocal_convention() {
        assert_eq!(invert_string("m/s"), "/m.s");
        assert_eq!(invert_string("m.s"), "/m.s");
        assert_eq!(invert_string("/m.s"), "m.s");
        assert_eq!(invert_string("1"), "1");
    }

    #[test]
    fn inversion_is_involutive_up_to_equivalence() {
        let t = table();
        let m = unit(&t, "m");
        let s = unit(&t, "s");
        let mps = m.divide(&s).unwrap();
        let mut twice = mps.clone();
        twice.invert().unwrap();
        assert_eq!(twice.magnitude, 1.0);
        assert_eq!(twice.dim, Some(Dimension::new([-1, 1, 0, 0, 0, 0, 0])));
        twice.invert().unwrap();
        assert!(twice.is_equivalent(&mps));
    }

    #[test]
    fn power_scales_magnitude_dimension_and_code() {
        let t = table();
        let mut cm = unit(&t, "m");
        cm.magnitude = 0.01;
        cm.cs_code = "cm".into();
        cm.power(2.0).unwrap();
        assert_eq!(cm.cs_code, "cm2");
        assert!((cm.magnitude - 1e-4).abs() < 1e-19);
        assert_eq!(cm.dim.unwrap().get(base_index::LENGTH), 2);
    }

    #[test]
    fn power_string_transforms_every_run() {
        assert_eq!(power_string("m", 3), "m3");
        assert_eq!(power_string("m2", 3), "m6");
        assert_eq!(power_string("m/s2", 2), "m2/s4");
        assert_eq!(power_string("s-1", 3), "s-3");
        assert_eq!(power_string("2.m", 2), "4.m2");
        assert_eq!(power_string("10*-3", 2), "10*-6");
        assert_eq!(power_string("m[H2O]", 2), "m[H2O]2");
    }

    #[test]
    fn fractional_exponent_is_rejected() {
        let t = table();
        let mut m = unit(&t, "m");
        assert!(matches!(m.power(1.5), Err(Error::NonIntegerExponent(_))));
    }

    #[test]
    fn convert_between_ratio_units() {
        let t = table();
        let g = unit(&t, "g");
        let car = unit(&t, "[car_m]");
        assert_eq!(car.convert_from(56.0, &g).unwrap(), 280.0);
    }

    #[test]
    fn convert_between_special_scales() {
        let t = table();
        let degf = unit(&t, "[degF]");
        let cel = unit(&t, "Cel");
        let v = cel.convert_from(0.0, &degf).unwrap();
        assert_eq!((v * 100.0).round(), -1778.0);
        let back = degf.convert_from(v, &cel).unwrap();
        assert!((back - 0.0).abs() < 1e-9);
    }

    #[test]
    fn identical_special_units_convert_as_identity() {
        let t = table();
        let cel = unit(&t, "Cel");
        assert_eq!(cel.convert_from(37.0, &cel).unwrap(), 37.0);
    }

    #[test]
    fn incommensurable_conversion_is_rejected() {
        let t = table();
        let g = unit(&t, "g");
        let m = unit(&t, "m");
        assert!(matches!(
            m.convert_from(1.0, &g),
            Err(Error::IncommensurableUnits { .. })
        ));
    }

    #[test]
    fn arbitrary_units_never_convert() {
        let t = table();
        let iu = unit(&t, "[iU]");
        let one = Unit::one();
        assert!(matches!(
            one.convert_from(1.0, &iu),
            Err(Error::ArbitraryUnitNotConvertible(_))
        ));
        assert!(matches!(
            iu.convert_from(1.0, &one),
            Err(Error::ArbitraryUnitNotConvertible(_))
        ));
    }

    #[test]
    fn mutate_coherent_rebuilds_from_base_atoms() {
        let t = table();
        let mut degf = unit(&t, "[degF]");
        let v = degf.mutate_coherent(32.0, &t).unwrap();
        assert!((v - 273.15).abs() < 1e-9);
        assert_eq!(degf.cs_code, "K");
        assert_eq!(degf.magnitude, 1.0);
        assert!(degf.conv.is_ratio());
    }

    #[test]
    fn mutate_ratio_passes_ratio_units_through() {
        let t = table();
        let mut g = unit(&t, "g");
        assert_eq!(g.mutate_ratio(7.0, &t).unwrap(), 7.0);
        assert_eq!(g.cs_code, "g");
    }

    #[test]
    fn base_exponents_reflect_the_dimension_vector() {
        let t = table();
        let pa = unit(&t, "Pa");
        let map = pa.base_exponents(&t);
        assert_eq!(map.get("m"), Some(&-1));
        assert_eq!(map.get("s"), Some(&-2));
        assert_eq!(map.get("g"), Some(&1));
    }

    #[test]
    fn multiply_scalar_rewrites_codes() {
        let t = table();
        let mut g = unit(&t, "g");
        g.multiply_scalar(4.0);
        assert_eq!(g.magnitude, 4.0);
        assert_eq!(g.cs_code, "4.g");
        assert_eq!(g.name, "[4]*[gram]");
    }
}
