//! Built-in catalog data
//!
//! The upstream catalog is distributed as XML; loading it is outside this
//! crate, so the default table ships as plain Rust data. Magnitudes are
//! expressed relative to the seven UCUM base atoms (m, s, g, rad, K, C,
//! cd); `mol` is dimensionless with Avogadro's number as magnitude, as
//! UCUM defines it.

use crate::atom::{Atom, Prefix};
use crate::dimension::Dimension;
use crate::table::AtomTable;
use tracing::debug;

/// Avogadro's number as fixed by UCUM for `mol`
pub(crate) const AVOGADRO: f64 = 6.0221367e23;

fn d(l: i8, t: i8, m: i8, a: i8, k: i8, c: i8, lm: i8) -> Dimension {
    Dimension::new([l, t, m, a, k, c, lm])
}

pub(crate) fn populate(table: &mut AtomTable) {
    for prefix in prefixes() {
        table.insert_prefix(prefix);
    }
    for atom in atoms() {
        table.insert_atom(atom);
    }
    debug!(atoms = table.atom_count(), "catalog loaded");
}

fn prefixes() -> Vec<Prefix> {
    vec![
        Prefix::new("Y", "YA", "yotta", 1e24, Some(24)),
        Prefix::new("Z", "ZA", "zetta", 1e21, Some(21)),
        Prefix::new("E", "EX", "exa", 1e18, Some(18)),
        Prefix::new("P", "PT", "peta", 1e15, Some(15)),
        Prefix::new("T", "TR", "tera", 1e12, Some(12)),
        Prefix::new("G", "GA", "giga", 1e9, Some(9)),
        Prefix::new("M", "MA", "mega", 1e6, Some(6)),
        Prefix::new("k", "K", "kilo", 1e3, Some(3)),
        Prefix::new("h", "H", "hecto", 1e2, Some(2)),
        Prefix::new("da", "DA", "deka", 1e1, Some(1)),
        Prefix::new("d", "D", "deci", 1e-1, Some(-1)),
        Prefix::new("c", "C", "centi", 1e-2, Some(-2)),
        Prefix::new("m", "M", "milli", 1e-3, Some(-3)),
        Prefix::new("u", "U", "micro", 1e-6, Some(-6)),
        Prefix::new("n", "N", "nano", 1e-9, Some(-9)),
        Prefix::new("p", "P", "pico", 1e-12, Some(-12)),
        Prefix::new("f", "F", "femto", 1e-15, Some(-15)),
        Prefix::new("a", "A", "atto", 1e-18, Some(-18)),
        Prefix::new("z", "ZO", "zepto", 1e-21, Some(-21)),
        Prefix::new("y", "YO", "yocto", 1e-24, Some(-24)),
        Prefix::new("Ki", "KIB", "kibi", 1024.0, None),
        Prefix::new("Mi", "MIB", "mebi", 1048576.0, None),
        Prefix::new("Gi", "GIB", "gibi", 1073741824.0, None),
        Prefix::new("Ti", "TIB", "tebi", 1099511627776.0, None),
    ]
}

#[rustfmt::skip]
fn atoms() -> Vec<Atom> {
    let mut v = Vec::with_capacity(96);

    // Base atoms.
    v.push(Atom::new("m", "M", "meter", "length", 1.0)
        .dim(d(1, 0, 0, 0, 0, 0, 0)).base_unit().print("m")
        .synonyms(&["meters", "metres", "distance"]).source("si"));
    v.push(Atom::new("s", "S", "second", "time", 1.0)
        .dim(d(0, 1, 0, 0, 0, 0, 0)).base_unit().print("s")
        .synonyms(&["seconds"]).source("si"));
    v.push(Atom::new("g", "G", "gram", "mass", 1.0)
        .dim(d(0, 0, 1, 0, 0, 0, 0)).base_unit().print("g")
        .synonyms(&["grams"]).source("si"));
    v.push(Atom::new("rad", "RAD", "radian", "plane angle", 1.0)
        .dim(d(0, 0, 0, 1, 0, 0, 0)).base_unit().print("rad").source("si"));
    v.push(Atom::new("K", "K", "Kelvin", "temperature", 1.0)
        .dim(d(0, 0, 0, 0, 1, 0, 0)).base_unit().print("K")
        .synonyms(&["degrees Kelvin"]).source("si"));
    v.push(Atom::new("C", "C", "Coulomb", "electric charge", 1.0)
        .dim(d(0, 0, 0, 0, 0, 1, 0)).base_unit().print("C").source("si"));
    v.push(Atom::new("cd", "CD", "candela", "luminous intensity", 1.0)
        .dim(d(0, 0, 0, 0, 0, 0, 1)).base_unit().print("cd")
        .synonyms(&["candelas"]).source("si"));

    // Dimensionless numbers.
    v.push(Atom::new("10*", "10*", "the number ten for arbitrary powers", "number", 10.0)
        .dim(Dimension::ZERO).print("10"));
    v.push(Atom::new("10^", "10^", "the number ten for arbitrary powers", "number", 10.0)
        .dim(Dimension::ZERO).print("10"));
    v.push(Atom::new("[pi]", "[PI]", "the number pi", "number", std::f64::consts::PI)
        .dim(Dimension::ZERO).print("π"));
    v.push(Atom::new("%", "%", "percent", "fraction", 0.01)
        .dim(Dimension::ZERO).print("%").synonyms(&["percents"]));
    v.push(Atom::new("[ppth]", "[PPTH]", "parts per thousand", "fraction", 1e-3)
        .dim(Dimension::ZERO).print("ppth"));
    v.push(Atom::new("[ppm]", "[PPM]", "parts per million", "fraction", 1e-6)
        .dim(Dimension::ZERO).print("ppm"));
    v.push(Atom::new("[ppb]", "[PPB]", "parts per billion", "fraction", 1e-9)
        .dim(Dimension::ZERO).print("ppb"));
    v.push(Atom::new("[pptr]", "[PPTR]", "parts per trillion", "fraction", 1e-12)
        .dim(Dimension::ZERO).print("pptr"));

    // Amount of substance. UCUM fixes mol as a dimensionless count.
    v.push(Atom::new("mol", "MOL", "mole", "amount of substance", AVOGADRO)
        .dim(Dimension::ZERO).metric().mole(1).print("mol")
        .synonyms(&["moles", "gram molecular weight"]).source("si"));
    v.push(Atom::new("eq", "EQ", "equivalent", "amount of substance", AVOGADRO)
        .dim(Dimension::ZERO).metric().mole(1).print("eq"));
    v.push(Atom::new("osm", "OSM", "osmole", "amount of substance (dissolved particles)", AVOGADRO)
        .dim(Dimension::ZERO).metric().mole(1).print("osm"));
    v.push(Atom::new("kat", "KAT", "katal", "catalytic activity", AVOGADRO)
        .dim(d(0, -1, 0, 0, 0, 0, 0)).metric().mole(1).print("kat").source("si"));
    v.push(Atom::new("U", "U", "Unit", "catalytic activity", AVOGADRO * 1e-6 / 60.0)
        .dim(d(0, -1, 0, 0, 0, 0, 0)).metric().mole(1).print("U")
        .synonyms(&["enzyme unit", "enzymatic activity"]));

    // SI derived, coherent.
    v.push(Atom::new("sr", "SR", "steradian", "solid angle", 1.0)
        .dim(d(0, 0, 0, 2, 0, 0, 0)).metric().print("sr").source("si"));
    v.push(Atom::new("Hz", "HZ", "Hertz", "frequency", 1.0)
        .dim(d(0, -1, 0, 0, 0, 0, 0)).metric().print("Hz")
        .synonyms(&["hertz", "frequency"]).source("si"));
    v.push(Atom::new("N", "N", "Newton", "force", 1000.0)
        .dim(d(1, -2, 1, 0, 0, 0, 0)).metric().print("N").source("si"));
    v.push(Atom::new("Pa", "PAL", "Pascal", "pressure", 1000.0)
        .dim(d(-1, -2, 1, 0, 0, 0, 0)).metric().print("Pa").source("si"));
    v.push(Atom::new("J", "J", "Joule", "energy", 1000.0)
        .dim(d(2, -2, 1, 0, 0, 0, 0)).metric().print("J").source("si"));
    v.push(Atom::new("W", "W", "Watt", "power", 1000.0)
        .dim(d(2, -3, 1, 0, 0, 0, 0)).metric().print("W").source("si"));
    v.push(Atom::new("A", "A", "Ampère", "electric current", 1.0)
        .dim(d(0, -1, 0, 0, 0, 1, 0)).metric().print("A")
        .synonyms(&["Ampere", "amperes"]).source("si"));
    v.push(Atom::new("V", "V", "Volt", "electric potential", 1000.0)
        .dim(d(2, -2, 1, 0, 0, -1, 0)).metric().print("V").source("si"));
    v.push(Atom::new("F", "F", "Farad", "electric capacitance", 0.001)
        .dim(d(-2, 2, -1, 0, 0, 2, 0)).metric().print("F").source("si"));
    v.push(Atom::new("Ohm", "OHM", "Ohm", "electric resistance", 1000.0)
        .dim(d(2, -1, 1, 0, 0, -2, 0)).metric().print("Ω").source("si"));
    v.push(Atom::new("S", "SIE", "Siemens", "electric conductance", 0.001)
        .dim(d(-2, 1, -1, 0, 0, 2, 0)).metric().print("S").source("si"));
    v.push(Atom::new("Wb", "WB", "Weber", "magnetic flux", 1000.0)
        .dim(d(2, -1, 1, 0, 0, -1, 0)).metric().print("Wb").source("si"));
    v.push(Atom::new("T", "T", "Tesla", "magnetic flux density", 1000.0)
        .dim(d(0, -1, 1, 0, 0, -1, 0)).metric().print("T").source("si"));
    v.push(Atom::new("H", "H", "Henry", "inductance", 1000.0)
        .dim(d(2, 0, 1, 0, 0, -2, 0)).metric().print("H").source("si"));
    v.push(Atom::new("lm", "LM", "lumen", "luminous flux", 1.0)
        .dim(d(0, 0, 0, 2, 0, 0, 1)).metric().print("lm").source("si"));
    v.push(Atom::new("lx", "LX", "lux", "illuminance", 1.0)
        .dim(d(-2, 0, 0, 2, 0, 0, 1)).metric().print("lx").source("si"));
    v.push(Atom::new("Bq", "BQ", "Becquerel", "radioactivity", 1.0)
        .dim(d(0, -1, 0, 0, 0, 0, 0)).metric().print("Bq").source("si"));
    v.push(Atom::new("Gy", "GY", "Gray", "energy dose", 1.0)
        .dim(d(2, -2, 0, 0, 0, 0, 0)).metric().print("Gy").source("si"));
    v.push(Atom::new("Sv", "SV", "Sievert", "dose equivalent", 1.0)
        .dim(d(2, -2, 0, 0, 0, 0, 0)).metric().print("Sv").source("si"));

    // Temperatures.
    v.push(Atom::new("Cel", "CEL", "degree Celsius", "temperature", 1.0)
        .dim(d(0, 0, 0, 0, 1, 0, 0)).metric().special("cel").print("°C")
        .synonyms(&["degrees Celsius", "centigrade"]).source("si"));
    v.push(Atom::new("[degF]", "[DEGF]", "degree Fahrenheit", "temperature", 5.0 / 9.0)
        .special("degf").dim(d(0, 0, 0, 0, 1, 0, 0)).print("°F")
        .synonyms(&["Fahrenheit", "degrees Fahrenheit"]));
    v.push(Atom::new("[degR]", "[DEGR]", "degree Rankine", "temperature", 5.0 / 9.0)
        .dim(d(0, 0, 0, 0, 1, 0, 0)).print("°R")
        .synonyms(&["Rankine", "degrees Rankine"]));
    v.push(Atom::new("[degRe]", "[DEGRE]", "degree Réaumur", "temperature", 1.25)
        .special("degre").dim(d(0, 0, 0, 0, 1, 0, 0)).print("°Ré")
        .synonyms(&["Réaumur", "degrees Réaumur"]));

    // Metric lengths / areas / volumes / masses.
    v.push(Atom::new("L", "L", "liter", "volume", 1e-3)
        .dim(d(3, 0, 0, 0, 0, 0, 0)).metric().print("L")
        .synonyms(&["liters", "litre", "litres"]));
    v.push(Atom::new("l", "L", "liter", "volume", 1e-3)
        .dim(d(3, 0, 0, 0, 0, 0, 0)).metric().print("l")
        .synonyms(&["liters", "litre", "litres"]));
    v.push(Atom::new("ar", "AR", "are", "area", 100.0)
        .dim(d(2, 0, 0, 0, 0, 0, 0)).metric().print("a"));
    v.push(Atom::new("t", "TNE", "tonne", "mass", 1e6)
        .dim(d(0, 0, 1, 0, 0, 0, 0)).metric().print("t")
        .synonyms(&["metric ton", "tonnes"]));
    v.push(Atom::new("u", "AMU", "unified atomic mass unit", "mass", 1.6605402e-24)
        .dim(d(0, 0, 1, 0, 0, 0, 0)).metric().print("u")
        .synonyms(&["Dalton"]));
    v.push(Atom::new("eV", "EV", "electronvolt", "energy", 1.60217733e-16)
        .dim(d(2, -2, 1, 0, 0, 0, 0)).metric().print("eV"));
    v.push(Atom::new("g%", "G%", "gram percent", "mass concentration", 1e4)
        .dim(d(-3, 0, 1, 0, 0, 0, 0)).metric().print("g%"));

    // Time.
    v.push(Atom::new("min", "MIN", "minute", "time", 60.0)
        .print("min").synonyms(&["minutes"]));
    v.push(Atom::new("h", "HR", "hour", "time", 3600.0)
        .print("h").synonyms(&["hours"]));
    v.push(Atom::new("d", "D", "day", "time", 86400.0)
        .print("d").synonyms(&["days"]));
    v.push(Atom::new("wk", "WK", "week", "time", 604800.0)
        .print("wk").synonyms(&["weeks"]));
    v.push(Atom::new("mo", "MO", "month", "time", 2629800.0)
        .print("mo").synonyms(&["months"])
        .guidance("the mean Julian month, 30.4375 days"));
    v.push(Atom::new("a", "ANN", "year", "time", 31557600.0)
        .print("a").synonyms(&["years"])
        .guidance("the mean Julian year, 365.25 days"));

    // Plane angles.
    v.push(Atom::new("deg", "DEG", "degree", "plane angle", 0.017453292519943295)
        .dim(d(0, 0, 0, 1, 0, 0, 0)).print("°")
        .synonyms(&["degrees of arc"]));
    v.push(Atom::new("gon", "GON", "gon", "plane angle", 0.015707963267948967)
        .dim(d(0, 0, 0, 1, 0, 0, 0)).print("gon")
        .synonyms(&["grade"]));
    v.push(Atom::new("'", "'", "minute of arc", "plane angle", 2.908882086657216e-4)
        .dim(d(0, 0, 0, 1, 0, 0, 0)).print("'"));
    v.push(Atom::new("''", "''", "second of arc", "plane angle", 4.84813681109536e-6)
        .dim(d(0, 0, 0, 1, 0, 0, 0)).print("''"));

    // Pressures.
    v.push(Atom::new("bar", "BAR", "bar", "pressure", 1e8)
        .dim(d(-1, -2, 1, 0, 0, 0, 0)).metric().print("bar"));
    v.push(Atom::new("m[Hg]", "M[HG]", "meter of mercury column", "pressure", 1.33322e8)
        .dim(d(-1, -2, 1, 0, 0, 0, 0)).metric().print("m Hg")
        .synonyms(&["millimeters of mercury"]));
    v.push(Atom::new("m[H2O]", "M[H2O]", "meter of water column", "pressure", 9.80665e6)
        .dim(d(-1, -2, 1, 0, 0, 0, 0)).metric().print("m H₂O"));
    v.push(Atom::new("[atm]", "[ATM]", "standard atmosphere", "pressure", 1.01325e8)
        .dim(d(-1, -2, 1, 0, 0, 0, 0)).print("atm"));

    // Mechanics, CGS and assorted.
    v.push(Atom::new("[g]", "[G]", "standard acceleration of free fall", "acceleration", 9.80665)
        .dim(d(1, -2, 0, 0, 0, 0, 0)).print("g"));
    v.push(Atom::new("gf", "GF", "gram-force", "force", 9.80665)
        .dim(d(1, -2, 1, 0, 0, 0, 0)).metric().print("gf"));
    v.push(Atom::new("dyn", "DYN", "dyne", "force", 0.01)
        .dim(d(1, -2, 1, 0, 0, 0, 0)).metric().print("dyn"));
    v.push(Atom::new("erg", "ERG", "erg", "energy", 1e-4)
        .dim(d(2, -2, 1, 0, 0, 0, 0)).metric().print("erg"));
    v.push(Atom::new("P", "P", "Poise", "dynamic viscosity", 100.0)
        .dim(d(-1, -1, 1, 0, 0, 0, 0)).metric().print("P"));
    v.push(Atom::new("St", "ST", "Stokes", "kinematic viscosity", 1e-4)
        .dim(d(2, -1, 0, 0, 0, 0, 0)).metric().print("St"));
    v.push(Atom::new("G", "GS", "Gauss", "magnetic flux density", 0.1)
        .dim(d(0, -1, 1, 0, 0, -1, 0)).metric().print("G"));
    v.push(Atom::new("Gal", "GL", "Gal", "acceleration", 0.01)
        .dim(d(1, -2, 0, 0, 0, 0, 0)).metric().print("Gal"));
    v.push(Atom::new("cal", "CAL", "calorie", "energy", 4184.0)
        .dim(d(2, -2, 1, 0, 0, 0, 0)).metric().print("cal")
        .synonyms(&["calories"]));
    v.push(Atom::new("[Cal]", "[CAL]", "nutrition label Calorie", "energy", 4.184e6)
        .dim(d(2, -2, 1, 0, 0, 0, 0)).print("Cal")
        .synonyms(&["food calorie", "kilocalorie"]));

    // Customary lengths, masses, volumes.
    v.push(Atom::new("[in_i]", "[IN_I]", "inch", "length", 0.0254)
        .dim(d(1, 0, 0, 0, 0, 0, 0)).print("in")
        .synonyms(&["inches", "international inch"]));
    v.push(Atom::new("[ft_i]", "[FT_I]", "foot", "length", 0.3048)
        .dim(d(1, 0, 0, 0, 0, 0, 0)).print("ft")
        .synonyms(&["feet", "international foot"]));
    v.push(Atom::new("[yd_i]", "[YD_I]", "yard", "length", 0.9144)
        .dim(d(1, 0, 0, 0, 0, 0, 0)).print("yd")
        .synonyms(&["yards"]));
    v.push(Atom::new("[mi_i]", "[MI_I]", "statute mile", "length", 1609.344)
        .dim(d(1, 0, 0, 0, 0, 0, 0)).print("mi")
        .synonyms(&["miles"]));
    v.push(Atom::new("[lb_av]", "[LB_AV]", "pound", "mass", 453.59237)
        .dim(d(0, 0, 1, 0, 0, 0, 0)).print("lb")
        .synonyms(&["pounds", "avoirdupois pound"]));
    v.push(Atom::new("[oz_av]", "[OZ_AV]", "ounce", "mass", 28.349523125)
        .dim(d(0, 0, 1, 0, 0, 0, 0)).print("oz")
        .synonyms(&["ounces", "avoirdupois ounce"]));
    v.push(Atom::new("[gr]", "[GR]", "grain", "mass", 0.06479891)
        .dim(d(0, 0, 1, 0, 0, 0, 0)).print("gr")
        .synonyms(&["grains"]));
    v.push(Atom::new("[gal_us]", "[GAL_US]", "Queen Anne's wine gallon", "fluid volume", 3.785411784e-3)
        .dim(d(3, 0, 0, 0, 0, 0, 0)).print("gal")
        .synonyms(&["gallons", "US gallon"]));
    v.push(Atom::new("[qt_us]", "[QT_US]", "quart", "fluid volume", 9.46352946e-4)
        .dim(d(3, 0, 0, 0, 0, 0, 0)).print("qt")
        .synonyms(&["quarts"]));
    v.push(Atom::new("[pt_us]", "[PT_US]", "pint", "fluid volume", 4.73176473e-4)
        .dim(d(3, 0, 0, 0, 0, 0, 0)).print("pt")
        .synonyms(&["pints"]));
    v.push(Atom::new("[foz_us]", "[FOZ_US]", "fluid ounce", "fluid volume", 2.95735295625e-5)
        .dim(d(3, 0, 0, 0, 0, 0, 0)).print("fl oz")
        .synonyms(&["fluid ounces"]));

    // Clinical.
    v.push(Atom::new("[pH]", "[PH]", "pH", "acidity", AVOGADRO * 1e3)
        .special("ph").dim(d(-3, 0, 0, 0, 0, 0, 0)).mole(1).print("pH")
        .guidance("the acidity scale; defined as pH(1 mol/l)"));
    v.push(Atom::new("[drp]", "[DRP]", "drop", "fluid volume", 1e-6 / 12.0)
        .dim(d(3, 0, 0, 0, 0, 0, 0)).print("drp")
        .guidance("drop size varies; twelve drops per milliliter assumed"));
    v.push(Atom::new("[car_m]", "[CAR_M]", "metric carat", "mass", 0.2)
        .dim(d(0, 0, 1, 0, 0, 0, 0)).print("ct")
        .synonyms(&["carats", "carat"]));
    v.push(Atom::new("[car_Au]", "[CAR_AU]", "carat of gold alloys", "mass fraction", 1.0 / 24.0)
        .dim(Dimension::ZERO).print("ct Au"));
    v.push(Atom::new("[hp_X]", "[HP_X]", "homeopathic potency of decimal series", "homeopathic potency", 1.0)
        .special("hpX").dim(Dimension::ZERO).print("X"));
    v.push(Atom::new("[hp_C]", "[HP_C]", "homeopathic potency of centesimal series", "homeopathic potency", 1.0)
        .special("hpC").dim(Dimension::ZERO).print("C"));

    // Arbitrary units: validate, never convert.
    v.push(Atom::new("[iU]", "[IU]", "international unit", "arbitrary", 1.0)
        .dim(Dimension::ZERO).metric().arbitrary().print("IU")
        .guidance("arbitrary unit; convertible only to itself"));
    v.push(Atom::new("[IU]", "[IU]", "international unit", "arbitrary", 1.0)
        .dim(Dimension::ZERO).metric().arbitrary().print("i.U.")
        .guidance("arbitrary unit; convertible only to itself"));
    v.push(Atom::new("[arb]", "[ARB]", "arbitrary unit", "arbitrary", 1.0)
        .dim(Dimension::ZERO).arbitrary().print("arb. U")
        .guidance("arbitrary unit; convertible only to itself"));

    // Levels and information.
    v.push(Atom::new("Np", "NEP", "neper", "level", 1.0)
        .special("ln").dim(Dimension::ZERO).metric().print("Np"));
    v.push(Atom::new("B", "B", "bel", "level", 1.0)
        .special("lg").dim(Dimension::ZERO).metric().print("B")
        .synonyms(&["bels", "decibel"]));
    v.push(Atom::new("B[SPL]", "B[SPL]", "bel sound pressure", "pressure level", 0.02)
        .special("2lg").dim(d(-1, -2, 1, 0, 0, 0, 0)).metric().print("B(SPL)"));
    v.push(Atom::new("B[V]", "B[V]", "bel volt", "electric potential level", 1000.0)
        .special("2lg").dim(d(2, -2, 1, 0, 0, -1, 0)).metric().print("B(V)"));
    v.push(Atom::new("B[mV]", "B[MV]", "bel millivolt", "electric potential level", 1.0)
        .special("2lg").dim(d(2, -2, 1, 0, 0, -1, 0)).metric().print("B(mV)"));
    v.push(Atom::new("B[uV]", "B[UV]", "bel microvolt", "electric potential level", 0.001)
        .special("2lg").dim(d(2, -2, 1, 0, 0, -1, 0)).metric().print("B(μV)"));
    v.push(Atom::new("B[W]", "B[W]", "bel watt", "power level", 1000.0)
        .special("lg").dim(d(2, -3, 1, 0, 0, 0, 0)).metric().print("B(W)"));
    v.push(Atom::new("B[kW]", "B[KW]", "bel kilowatt", "power level", 1e6)
        .special("lg").dim(d(2, -3, 1, 0, 0, 0, 0)).metric().print("B(kW)"));
    v.push(Atom::new("bit", "BIT", "bit", "amount of information", 1.0)
        .dim(Dimension::ZERO).metric().print("bit"));
    v.push(Atom::new("bit_s", "BIT_S", "bit, logarithmus dualis", "amount of information", 1.0)
        .special("ld").dim(Dimension::ZERO).print("bit"));
    v.push(Atom::new("By", "BY", "byte", "amount of information", 8.0)
        .dim(Dimension::ZERO).metric().print("B")
        .synonyms(&["bytes"]));
    v.push(Atom::new("Bd", "BD", "baud", "signal transmission rate", 1.0)
        .dim(d(0, -1, 0, 0, 0, 0, 0)).metric().print("Bd"));

    // Optics.
    v.push(Atom::new("[p'diop]", "[P'DIOP]", "prism diopter", "refraction of a prism", 1.0)
        .special("100tan").dim(d(0, 0, 0, 1, 0, 0, 0)).print("PD"));

    v
}
