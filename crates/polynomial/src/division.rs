// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial long division with an observable step trace, and the
//! `dividend = divisor * quotient + remainder` check.

use crate::errors::PolynomialError;
use crate::term::Term;
use crate::Polynomial;
use num_traits::Zero;
use tracing::{debug, trace, warn};

/// One elimination step of the long division loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivisionStep {
    /// Running remainder before the step.
    pub remainder_before: Polynomial,
    /// Quotient term computed from the two leading terms.
    pub term: Term,
    /// `divisor * term`, the value subtracted from the remainder.
    pub product: Polynomial,
    /// Running remainder after the subtraction.
    pub remainder_after: Polynomial,
}

/// Receives the steps of a division as they happen.
///
/// The trace is observational only and never influences the result.
pub trait DivisionTrace {
    fn record(&mut self, step: DivisionStep);
}

/// Discards every step.
impl DivisionTrace for () {
    fn record(&mut self, _step: DivisionStep) {}
}

/// Collects every step in order.
impl DivisionTrace for Vec<DivisionStep> {
    fn record(&mut self, step: DivisionStep) {
        self.push(step);
    }
}

/// Quotient and remainder produced by a single division.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivisionOutcome {
    pub quotient: Polynomial,
    pub remainder: Polynomial,
}

impl DivisionOutcome {
    /// Checks `dividend == divisor * quotient + remainder` for this outcome.
    pub fn verify(&self, dividend: &Polynomial, divisor: &Polynomial) -> bool {
        verify_division(dividend, divisor, &self.quotient, &self.remainder)
    }
}

impl Polynomial {
    /// Divides one polynomial by another, returning the quotient and remainder.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InvalidDivisor` if the divisor is zero.
    pub fn div(&self, divisor: &Self) -> Result<DivisionOutcome, PolynomialError> {
        self.div_with_trace(divisor, &mut ())
    }

    /// Long division that reports every elimination step to `sink`.
    ///
    /// Leading coefficients are divided with truncation toward zero, so the
    /// result is only the mathematical quotient when the divisor's leading
    /// coefficient divides each remainder's leading coefficient (always the
    /// case for a monic divisor). When the truncated coefficient is zero the
    /// leading term cannot be eliminated and the loop stops early; the
    /// division identity still holds for the returned pair.
    ///
    /// The loop runs at most `deg(dividend) - deg(divisor) + 1` times.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InvalidDivisor` if the divisor is zero.
    pub fn div_with_trace<T: DivisionTrace + ?Sized>(
        &self,
        divisor: &Self,
        sink: &mut T,
    ) -> Result<DivisionOutcome, PolynomialError> {
        let Some(lead_divisor) = divisor.leading_term() else {
            return Err(PolynomialError::InvalidDivisor);
        };

        let mut quotient = Polynomial::zero();
        let mut remainder = self.clone();

        debug!(dividend = %self, divisor = %divisor, "starting long division");

        while let Some(lead_remainder) = remainder.leading_term() {
            if lead_remainder.exponent < lead_divisor.exponent {
                break;
            }

            let coefficient = &lead_remainder.coefficient / &lead_divisor.coefficient;
            if coefficient.is_zero() {
                warn!(
                    remainder = %remainder,
                    divisor = %divisor,
                    "leading coefficient is not divisible, stopping division early"
                );
                break;
            }

            let term = Term {
                coefficient,
                exponent: lead_remainder.exponent - lead_divisor.exponent,
            };
            quotient.insert_term(term.coefficient.clone(), term.exponent);

            let product = divisor.mul_monomial(&term.coefficient, term.exponent);
            let next = remainder.sub(&product);

            trace!(
                remainder = %remainder,
                term = %term,
                product = %product,
                next = %next,
                "division step"
            );

            sink.record(DivisionStep {
                remainder_before: std::mem::replace(&mut remainder, next.clone()),
                term,
                product,
                remainder_after: next,
            });
        }

        debug!(quotient = %quotient, remainder = %remainder, "division finished");

        Ok(DivisionOutcome {
            quotient,
            remainder,
        })
    }
}

/// Result of recomputing a dividend from a division outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivisionCheck {
    /// `divisor * quotient`
    pub product: Polynomial,
    /// `divisor * quotient + remainder`
    pub reconstructed: Polynomial,
    /// Whether `reconstructed` equals the original dividend.
    pub holds: bool,
}

/// Recomputes `divisor * quotient + remainder` and compares it with `dividend`.
///
/// Equality is structural; because every polynomial is kept in canonical
/// form this is the same as comparing the formatted strings.
pub fn check_division(
    dividend: &Polynomial,
    divisor: &Polynomial,
    quotient: &Polynomial,
    remainder: &Polynomial,
) -> DivisionCheck {
    let product = divisor.mul(quotient);
    let reconstructed = product.add(remainder);
    let holds = &reconstructed == dividend;

    DivisionCheck {
        product,
        reconstructed,
        holds,
    }
}

/// Returns `true` when `dividend == divisor * quotient + remainder`.
pub fn verify_division(
    dividend: &Polynomial,
    divisor: &Polynomial,
    quotient: &Polynomial,
    remainder: &Polynomial,
) -> bool {
    check_division(dividend, divisor, quotient, remainder).holds
}
