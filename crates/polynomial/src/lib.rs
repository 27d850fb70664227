// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! Exact integer polynomial arithmetic in a single variable, built around a
//! sparse canonical form and a traced long division.
//!
//! ## Features
//!
//! - Uses `num-bigint` for coefficient representation, so products never overflow.
//! - Merge-on-insert terms: exponents strictly descending, no zero coefficients.
//! - Addition, subtraction, negation, monomial and full multiplication.
//! - Long division with remainder, reporting each elimination step to a [`DivisionTrace`].
//! - Verification of `dividend = divisor * quotient + remainder`.
//! - Serialization: Optional serde support with bincode integration.
//!
//! ## Example
//!
//! ```
//! use polydiv_polynomial::Polynomial;
//!
//! let dividend: Polynomial = [(2, 3), (3, 2), (-1, 1), (5, 0)].into_iter().collect();
//! let divisor: Polynomial = [(1, 2), (-1, 0)].into_iter().collect();
//!
//! let outcome = dividend.div(&divisor).unwrap();
//! assert_eq!(outcome.quotient.to_string(), "2x + 3");
//! assert_eq!(outcome.remainder.to_string(), "x + 8");
//! assert!(outcome.verify(&dividend, &divisor));
//! ```

pub mod division;
mod errors;
pub mod polynomial;
pub mod term;

pub use division::{
    check_division, verify_division, DivisionCheck, DivisionOutcome, DivisionStep, DivisionTrace,
};
pub use polynomial::{Polynomial, PolynomialError};
pub use term::Term;
