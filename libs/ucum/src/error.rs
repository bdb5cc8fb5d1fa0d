//! Error types for the UCUM core

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing, combining or converting units
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("no unit string specified")]
    EmptyInput,

    #[error("unit expression is too long ({0} bytes)")]
    InputTooLong(usize),

    #[error("'{0}' is not a valid UCUM code")]
    UnknownAtom(String),

    #[error("missing close parenthesis for open parenthesis at {0}")]
    UnbalancedParentheses(String),

    #[error("missing close bracket for open bracket at {0}")]
    UnbalancedBrackets(String),

    #[error("the exponent applied to '{0}' must be an integer")]
    NonIntegerExponent(String),

    #[error("a unit on a non-ratio scale ('{0}') may not be multiplied by '{1}'")]
    NonRatioMultiplication(String, String),

    #[error("a unit on a non-ratio scale ('{0}') may not take part in a division")]
    NonRatioDivision(String),

    #[error("an exponent may not be applied to the non-ratio unit '{0}'")]
    NonRatioPower(String),

    #[error("the non-ratio unit '{0}' may not be inverted")]
    NonRatioInvert(String),

    #[error("'{from}' cannot be converted to '{to}'")]
    IncommensurableUnits { from: String, to: String },

    #[error("the arbitrary unit '{0}' is not convertible")]
    ArbitraryUnitNotConvertible(String),

    #[error("Did you wish to convert between mass and moles? The molecular weight \
             of the substance represented by the units is required to perform \
             the conversion")]
    MolecularWeightRequired,

    #[error("unknown special function '{0}'")]
    UnknownSpecialFunction(String),

    #[error("dimension exponent overflow")]
    Overflow,
}
