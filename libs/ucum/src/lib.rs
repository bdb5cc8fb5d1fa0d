#![forbid(unsafe_code)]

//! Validation, parsing and conversion of UCUM unit expressions
//!
//! The crate is a three-layer engine:
//!
//! ```text
//! Expression String
//!      |
//!   Parser (annotations, balancing, repair, atom resolution) -> Unit
//!      |
//!   Unit Algebra (multiply / divide / power / invert, ratio-scale rules)
//!      |
//!   Conversion Engine (validate, convertUnitTo, convertToBaseUnits)
//! ```
//!
//! The atom table and the special-function registry are initialised once
//! and never mutated afterwards; every parse builds a fresh [`Unit`], so
//! the public operations are freely callable from multiple threads.

pub mod atom;
mod catalog;
pub mod dimension;
pub mod engine;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod special;
pub mod suggest;
pub mod table;
pub mod token;
pub mod unit;

use once_cell::sync::Lazy;

pub use atom::{Atom, Prefix};
pub use dimension::{Dimension, DIM_LEN};
pub use engine::{
    BaseUnitsResponse, ConversionStatus, ConvertResponse, ConvertSuggestions, Engine,
    SynonymsResponse, UnitSummary, ValidateResponse, ValidationStatus,
};
pub use error::{Error, Result};
pub use parser::{ParseOptions, ParseReport, UnitParser};
pub use suggest::SuggestionBlock;
pub use table::AtomTable;
pub use unit::{Conversion, Unit};

static DEFAULT_TABLE: Lazy<AtomTable> = Lazy::new(AtomTable::with_catalog);

/// The process-wide default atom table, built from the embedded catalog
/// on first use and read-only afterwards
pub fn default_table() -> &'static AtomTable {
    &DEFAULT_TABLE
}
