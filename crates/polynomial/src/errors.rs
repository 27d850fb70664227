// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolynomialError {
    /// Division by the zero polynomial
    #[error("Invalid divisor: cannot divide by the zero polynomial")]
    InvalidDivisor,
}
