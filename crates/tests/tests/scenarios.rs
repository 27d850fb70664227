// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use polydiv_polynomial::{
    check_division, verify_division, DivisionStep, Polynomial, PolynomialError,
};
use tracing_test::traced_test;

fn poly(pairs: &[(i64, usize)]) -> Polynomial {
    pairs.iter().copied().collect()
}

/// Divides, checks the identity and the step bound, and returns the
/// formatted quotient and remainder.
fn divide_and_check(dividend: &Polynomial, divisor: &Polynomial) -> Result<(String, String)> {
    let mut steps: Vec<DivisionStep> = Vec::new();
    let outcome = dividend.div_with_trace(divisor, &mut steps)?;

    let check = check_division(dividend, divisor, &outcome.quotient, &outcome.remainder);
    assert!(check.holds, "identity failed for ({dividend}) / ({divisor})");
    assert_eq!(check.reconstructed.to_string(), dividend.to_string());

    let bound = match (dividend.degree(), divisor.degree()) {
        (Some(n), Some(m)) if n >= m => n - m + 1,
        _ => 0,
    };
    assert!(steps.len() <= bound);

    // every step must chain onto the previous one
    for pair in steps.windows(2) {
        assert_eq!(pair[0].remainder_after, pair[1].remainder_before);
    }
    if let Some(last) = steps.last() {
        assert_eq!(last.remainder_after, outcome.remainder);
    }

    Ok((
        outcome.quotient.to_string(),
        outcome.remainder.to_string(),
    ))
}

#[test]
fn cubic_by_quadratic() -> Result<()> {
    let dividend = poly(&[(2, 3), (3, 2), (-1, 1), (5, 0)]);
    let divisor = poly(&[(1, 2), (-1, 0)]);

    let (quotient, remainder) = divide_and_check(&dividend, &divisor)?;
    assert_eq!(quotient, "2x + 3");
    assert_eq!(remainder, "x + 8");
    Ok(())
}

#[test]
fn quartic_by_square_golden() -> Result<()> {
    let dividend = poly(&[(3, 4), (-2, 2), (1, 1), (-7, 0)]);
    let divisor = poly(&[(1, 2), (-2, 1), (1, 0)]);

    let (quotient, remainder) = divide_and_check(&dividend, &divisor)?;
    assert_eq!(quotient, "3x^2 + 6x + 7");
    assert_eq!(remainder, "9x - 14");
    Ok(())
}

#[test]
fn self_division_gives_one_and_zero() -> Result<()> {
    let p = poly(&[(1, 2), (-1, 0)]);

    let (quotient, remainder) = divide_and_check(&p, &p)?;
    assert_eq!(quotient, "1");
    assert_eq!(remainder, "0");
    Ok(())
}

#[test]
fn cancelling_inserts_format_as_zero() {
    let mut p = Polynomial::zero();
    p.insert_term(2, 3);
    p.insert_term(-2, 3);

    assert!(p.terms().is_empty());
    assert_eq!(p.to_string(), "0");
}

#[test]
fn zero_divisor_fails_fast() {
    let dividend = poly(&[(2, 3), (1, 0)]);
    let mut steps: Vec<DivisionStep> = Vec::new();

    assert_eq!(
        dividend.div_with_trace(&Polynomial::zero(), &mut steps),
        Err(PolynomialError::InvalidDivisor)
    );
    assert!(steps.is_empty());
}

#[test]
fn verification_detects_a_wrong_quotient() {
    let dividend = poly(&[(2, 3), (3, 2), (-1, 1), (5, 0)]);
    let divisor = poly(&[(1, 2), (-1, 0)]);

    assert!(!verify_division(
        &dividend,
        &divisor,
        &poly(&[(2, 1), (2, 0)]),
        &poly(&[(1, 1), (8, 0)]),
    ));
}

#[test]
fn high_degree_monic_division() -> Result<()> {
    // (x^10 - 1) / (x - 1) = x^9 + x^8 + ... + 1
    let dividend = poly(&[(1, 10), (-1, 0)]);
    let divisor = poly(&[(1, 1), (-1, 0)]);

    let (quotient, remainder) = divide_and_check(&dividend, &divisor)?;
    assert_eq!(
        quotient,
        "x^9 + x^8 + x^7 + x^6 + x^5 + x^4 + x^3 + x^2 + x + 1"
    );
    assert_eq!(remainder, "0");
    Ok(())
}

#[test]
#[traced_test]
fn non_divisible_leading_coefficient_is_logged() {
    let dividend = poly(&[(1, 1)]);
    let divisor = poly(&[(2, 1)]);

    let (quotient, remainder) = divide_and_check(&dividend, &divisor).unwrap();
    assert_eq!(quotient, "0");
    assert_eq!(remainder, "x");
    assert!(logs_contain("stopping division early"));
}
