// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Parsing of "coefficient exponent" pairs typed by the user.

use num_bigint::BigInt;
use polydiv_polynomial::Polynomial;
use thiserror::Error;

/// A line that could not be read as a term. The polynomial being built is
/// never touched when this is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TermInputError {
    #[error("Invalid input: expected two numbers separated by a space, e.g. '2 3' for 2x^3")]
    MissingExponent,

    #[error("Invalid input: '{0}' is not an integer coefficient")]
    InvalidCoefficient(String),

    #[error("Invalid input: '{0}' is not a non-negative integer exponent")]
    InvalidExponent(String),

    #[error("Invalid input: unexpected trailing '{0}'")]
    TrailingInput(String),
}

/// Parses a single `coefficient exponent` pair, e.g. `-3 2` for `-3x^2`.
pub fn parse_term_line(line: &str) -> Result<(BigInt, usize), TermInputError> {
    let mut tokens = line.split_whitespace();

    let (Some(coefficient), Some(exponent)) = (tokens.next(), tokens.next()) else {
        return Err(TermInputError::MissingExponent);
    };
    if let Some(extra) = tokens.next() {
        return Err(TermInputError::TrailingInput(extra.to_string()));
    }

    let coefficient = coefficient
        .parse::<BigInt>()
        .map_err(|_| TermInputError::InvalidCoefficient(coefficient.to_string()))?;
    let exponent = exponent
        .parse::<usize>()
        .map_err(|_| TermInputError::InvalidExponent(exponent.to_string()))?;

    Ok((coefficient, exponent))
}

/// Parses a whole polynomial written as pairs separated by `,` or `;`,
/// e.g. `"2 3, 3 2, -1 1, 5 0"`. Empty segments are skipped.
///
/// Either every pair is accepted or the whole list is rejected.
pub fn parse_term_list(input: &str) -> Result<Polynomial, TermInputError> {
    input
        .split([',', ';'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_term_line)
        .collect()
}
