// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial arithmetic implementation.

use crate::term::Term;
use num_bigint::BigInt;
use num_traits::{Pow, Signed, Zero};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use crate::errors::PolynomialError;

/// A univariate polynomial with exact integer coefficients, stored sparsely.
///
/// Terms are kept in strictly descending order of exponent, every exponent
/// appears at most once and no stored coefficient is zero. The zero
/// polynomial has no terms at all, so the leading term is always `terms[0]`.
///
/// ```text
/// a_n * x^n + ... + a_k * x^k      (n > ... > k, a_i != 0)
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Term>", into = "Vec<Term>"))]
pub struct Polynomial {
    /// Terms in descending order of exponent (leading term first).
    pub(crate) terms: Vec<Term>,
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                if term.coefficient.is_positive() {
                    write!(f, " + ")?;
                } else {
                    write!(f, " - ")?;
                }
            } else if term.coefficient.is_negative() {
                write!(f, "-")?;
            }
            term.fmt_magnitude(f)?;
        }

        Ok(())
    }
}

impl Polynomial {
    /// Creates the zero polynomial.
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates a constant polynomial.
    ///
    /// A zero constant yields the zero polynomial.
    pub fn constant(constant: impl Into<BigInt>) -> Self {
        Self::monomial(constant, 0)
    }

    /// Creates the single-term polynomial `coefficient * x^exponent`.
    pub fn monomial(coefficient: impl Into<BigInt>, exponent: usize) -> Self {
        let mut poly = Self::zero();
        poly.insert_term(coefficient, exponent);
        poly
    }

    /// Returns the terms, leading term first.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the number of non-zero terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the degree of the polynomial, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.leading_exponent()
    }

    /// Returns the term with the highest exponent.
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Returns the leading coefficient of the polynomial.
    pub fn leading_coefficient(&self) -> Option<&BigInt> {
        self.leading_term().map(|t| &t.coefficient)
    }

    /// Returns the leading exponent of the polynomial.
    pub fn leading_exponent(&self) -> Option<usize> {
        self.leading_term().map(|t| t.exponent)
    }

    /// Returns the coefficient stored for `exponent`, if any.
    pub fn coefficient(&self, exponent: usize) -> Option<&BigInt> {
        self.position(exponent)
            .ok()
            .map(|index| &self.terms[index].coefficient)
    }

    fn position(&self, exponent: usize) -> Result<usize, usize> {
        // descending order, so the comparison is reversed
        self.terms.binary_search_by(|t| exponent.cmp(&t.exponent))
    }

    /// Inserts `coefficient * x^exponent`, merging with an existing term of
    /// the same exponent.
    ///
    /// A zero coefficient is ignored. When the merged coefficient sums to zero
    /// the term is removed, so the ordering invariant holds after every call.
    pub fn insert_term(&mut self, coefficient: impl Into<BigInt>, exponent: usize) {
        let coefficient = coefficient.into();
        if coefficient.is_zero() {
            return;
        }

        match self.position(exponent) {
            Ok(index) => {
                let term = &mut self.terms[index];
                term.coefficient += coefficient;
                if term.coefficient.is_zero() {
                    self.terms.remove(index);
                }
            }
            Err(index) => self.terms.insert(
                index,
                Term {
                    coefficient,
                    exponent,
                },
            ),
        }
    }

    /// Adds two polynomials together.
    ///
    /// Copies `self` and inserts every term of `other`, so like terms are
    /// combined and cancelled terms disappear.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the sum of the two polynomials.
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for term in &other.terms {
            result.insert_term(term.coefficient.clone(), term.exponent);
        }
        result
    }

    /// Subtracts one polynomial from another.
    ///
    /// # Returns
    ///
    /// A new polynomial containing `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for term in &other.terms {
            result.insert_term(-&term.coefficient, term.exponent);
        }
        result
    }

    /// Negates all coefficients of the polynomial.
    pub fn neg(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| Term {
                    coefficient: -&t.coefficient,
                    exponent: t.exponent,
                })
                .collect(),
        }
    }

    /// Multiplies every term by `coefficient` and shifts its exponent by
    /// `exponent`, i.e. computes `self * coefficient * x^exponent`.
    ///
    /// # Panics
    ///
    /// Panics if a shifted exponent does not fit in a `usize`.
    pub fn mul_monomial(&self, coefficient: &BigInt, exponent: usize) -> Self {
        if coefficient.is_zero() {
            return Self::zero();
        }

        // Scaling by a non-zero integer and shifting every exponent by the
        // same amount keeps the terms distinct, ordered and non-zero.
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| Term {
                    coefficient: &t.coefficient * coefficient,
                    exponent: shift_exponent(t.exponent, exponent),
                })
                .collect(),
        }
    }

    /// Multiplies each coefficient of the polynomial by a scalar.
    pub fn scalar_mul(&self, scalar: &BigInt) -> Self {
        self.mul_monomial(scalar, 0)
    }

    /// Multiplies two polynomials.
    ///
    /// Each term of `other` produces a shifted, scaled copy of `self` whose
    /// terms are accumulated with [`Polynomial::insert_term`], so cross terms
    /// of equal exponent merge and may cancel.
    ///
    /// # Panics
    ///
    /// Panics if `self.degree() + other.degree()` does not fit in a `usize`.
    pub fn mul(&self, other: &Self) -> Self {
        let mut product = Self::zero();
        for factor in &other.terms {
            let partial = self.mul_monomial(&factor.coefficient, factor.exponent);
            for term in partial.terms {
                product.insert_term(term.coefficient, term.exponent);
            }
        }
        product
    }

    /// Evaluates the polynomial at a given point using Horner's method,
    /// skipping over the exponent gaps between stored terms.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        let Some(leading) = self.terms.first() else {
            return BigInt::zero();
        };

        let mut result = leading.coefficient.clone();
        let mut previous = leading.exponent;
        for term in &self.terms[1..] {
            result = result * Pow::pow(x, previous - term.exponent) + &term.coefficient;
            previous = term.exponent;
        }
        result * Pow::pow(x, previous)
    }
}

/// Exponent sum with the same panic in debug and release builds, so a
/// wrapped exponent can never land out of order in a term vector.
fn shift_exponent(exponent: usize, shift: usize) -> usize {
    exponent
        .checked_add(shift)
        .unwrap_or_else(|| panic!("exponent overflow: x^{exponent} * x^{shift}"))
}

impl<C: Into<BigInt>> FromIterator<(C, usize)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (C, usize)>>(iter: I) -> Self {
        let mut poly = Polynomial::zero();
        for (coefficient, exponent) in iter {
            poly.insert_term(coefficient, exponent);
        }
        poly
    }
}

impl From<Vec<Term>> for Polynomial {
    fn from(terms: Vec<Term>) -> Self {
        terms
            .into_iter()
            .map(|t| (t.coefficient, t.exponent))
            .collect()
    }
}

impl From<Polynomial> for Vec<Term> {
    fn from(poly: Polynomial) -> Self {
        poly.terms
    }
}
