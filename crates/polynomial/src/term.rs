// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! A single `coefficient * x^exponent` term.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One coefficient/exponent pair of a polynomial.
///
/// Terms stored inside a [`crate::Polynomial`] never carry a zero coefficient.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    pub coefficient: BigInt,
    pub exponent: usize,
}

impl Term {
    pub fn new(coefficient: impl Into<BigInt>, exponent: usize) -> Self {
        Self {
            coefficient: coefficient.into(),
            exponent,
        }
    }

    /// Writes the magnitude part of the term, i.e. `3x^2` for `-3x^2`.
    ///
    /// A unit coefficient is elided unless the term is a constant.
    pub(crate) fn fmt_magnitude(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs_coeff = self.coefficient.abs();

        if self.exponent == 0 || !abs_coeff.is_one() {
            write!(f, "{abs_coeff}")?;
        }

        if self.exponent > 0 {
            write!(f, "x")?;
            if self.exponent > 1 {
                write!(f, "^{}", self.exponent)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficient.is_zero() {
            return write!(f, "0");
        }
        if self.coefficient.is_negative() {
            write!(f, "-")?;
        }
        self.fmt_magnitude(f)
    }
}

impl<C: Into<BigInt>> From<(C, usize)> for Term {
    fn from((coefficient, exponent): (C, usize)) -> Self {
        Term::new(coefficient, exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_display() {
        assert_eq!(Term::new(2, 3).to_string(), "2x^3");
        assert_eq!(Term::new(-1, 1).to_string(), "-x");
        assert_eq!(Term::new(1, 0).to_string(), "1");
        assert_eq!(Term::new(-7, 0).to_string(), "-7");
        assert_eq!(Term::new(0, 4).to_string(), "0");
    }
}
