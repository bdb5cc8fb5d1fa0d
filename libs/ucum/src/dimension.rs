//! Dimensional exponent vectors
//!
//! Every unit carries its dimension as a fixed-length vector of signed
//! integer exponents over the seven UCUM base dimensions. The vector is a
//! plain `Copy` value; absence of a dimension ("null vector") is modelled
//! as `Option<Dimension>` on the unit that owns it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of UCUM base dimensions
pub const DIM_LEN: usize = 7;

/// Indexes into a [`Dimension`] vector, in UCUM base-dimension order.
pub mod base_index {
    /// length (meter)
    pub const LENGTH: usize = 0;
    /// time (second)
    pub const TIME: usize = 1;
    /// mass (gram)
    pub const MASS: usize = 2;
    /// plane angle (radian)
    pub const ANGLE: usize = 3;
    /// temperature (kelvin)
    pub const TEMPERATURE: usize = 4;
    /// electric charge (coulomb)
    pub const CHARGE: usize = 5;
    /// luminous intensity (candela)
    pub const LUMINOSITY: usize = 6;
}

/// A vector of base-dimension exponents
///
/// Component values stay small (|v| <= 64 covers every expression the
/// parser accepts), so `i8` storage suffices; arithmetic is checked and
/// reports [`Error::Overflow`] rather than wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension([i8; DIM_LEN]);

impl Dimension {
    /// The all-zero (dimensionless) vector
    pub const ZERO: Dimension = Dimension([0; DIM_LEN]);

    /// Build a vector from explicit exponents, in base-dimension order
    pub fn new(exponents: [i8; DIM_LEN]) -> Self {
        Dimension(exponents)
    }

    /// Unit vector for a single base dimension
    pub fn base(index: usize) -> Self {
        let mut v = [0i8; DIM_LEN];
        v[index] = 1;
        Dimension(v)
    }

    /// Exponent at `index`
    pub fn get(&self, index: usize) -> i32 {
        i32::from(self.0[index])
    }

    /// Component-wise sum
    pub fn add(&self, other: &Dimension) -> Result<Dimension> {
        let mut v = [0i8; DIM_LEN];
        for i in 0..DIM_LEN {
            v[i] = self.0[i].checked_add(other.0[i]).ok_or(Error::Overflow)?;
        }
        Ok(Dimension(v))
    }

    /// Component-wise difference
    pub fn sub(&self, other: &Dimension) -> Result<Dimension> {
        let mut v = [0i8; DIM_LEN];
        for i in 0..DIM_LEN {
            v[i] = self.0[i].checked_sub(other.0[i]).ok_or(Error::Overflow)?;
        }
        Ok(Dimension(v))
    }

    /// Scalar multiply of every component
    pub fn mul(&self, p: i32) -> Result<Dimension> {
        let mut v = [0i8; DIM_LEN];
        for i in 0..DIM_LEN {
            let scaled = i32::from(self.0[i]).checked_mul(p).ok_or(Error::Overflow)?;
            v[i] = i8::try_from(scaled).map_err(|_| Error::Overflow)?;
        }
        Ok(Dimension(v))
    }

    /// Negation of every component
    pub fn minus(&self) -> Dimension {
        let mut v = [0i8; DIM_LEN];
        for i in 0..DIM_LEN {
            v[i] = -self.0[i];
        }
        Dimension(v)
    }

    /// True iff every component is zero, i.e. the unit is dimensionless
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// Iterate over `(index, exponent)` pairs with non-zero exponent
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, &e)| e != 0)
            .map(|(i, &e)| (i, i32::from(e)))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "]")
    }
}
