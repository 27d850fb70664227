// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Console presentation of a division run.

use polydiv_polynomial::{DivisionCheck, DivisionOutcome, DivisionStep, DivisionTrace, Polynomial};
use std::io::{self, Write};

/// Writes each division step as soon as it is produced.
///
/// `record` cannot fail, so the first write error is kept and returned by
/// [`ConsoleTrace::finish`].
pub struct ConsoleTrace<'a, W: Write> {
    out: &'a mut W,
    error: Option<io::Error>,
}

impl<'a, W: Write> ConsoleTrace<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<W: Write> DivisionTrace for ConsoleTrace<'_, W> {
    fn record(&mut self, step: DivisionStep) {
        if self.error.is_none() {
            self.error = write_step(self.out, &step).err();
        }
    }
}

pub fn write_step(out: &mut impl Write, step: &DivisionStep) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Current remainder:  {}", step.remainder_before)?;
    writeln!(out, "Quotient term:      {}", step.term)?;
    writeln!(out, "Divisor multiplied: {}", step.product)?;
    writeln!(out, "New remainder:      {}", step.remainder_after)
}

pub fn write_selection(
    out: &mut impl Write,
    dividend: &Polynomial,
    divisor: &Polynomial,
) -> io::Result<()> {
    writeln!(out, "Selected polynomials:")?;
    writeln!(out, "Dividend: {dividend}")?;
    writeln!(out, "Divisor:  {divisor}")
}

pub fn write_outcome(out: &mut impl Write, outcome: &DivisionOutcome) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Final result:")?;
    writeln!(out, "Quotient:  {}", outcome.quotient)?;
    writeln!(out, "Remainder: {}", outcome.remainder)
}

pub fn write_check(
    out: &mut impl Write,
    dividend: &Polynomial,
    check: &DivisionCheck,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Checking the division...")?;
    writeln!(out, "Product (divisor x quotient): {}", check.product)?;
    writeln!(out, "Product plus remainder:       {}", check.reconstructed)?;
    writeln!(out, "Original dividend:            {dividend}")?;
    if check.holds {
        writeln!(
            out,
            "Check passed: dividend = divisor x quotient + remainder."
        )
    } else {
        writeln!(out, "Check failed.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polydiv_polynomial::check_division;

    fn poly(pairs: &[(i64, usize)]) -> Polynomial {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_console_trace_streams_steps() {
        let dividend = poly(&[(1, 2), (-1, 0)]);
        let divisor = poly(&[(1, 1), (1, 0)]);

        let mut buf = Vec::new();
        let mut trace = ConsoleTrace::new(&mut buf);
        dividend.div_with_trace(&divisor, &mut trace).unwrap();
        trace.finish().unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "\nCurrent remainder:  x^2 - 1\n\
             Quotient term:      x\n\
             Divisor multiplied: x^2 + x\n\
             New remainder:      -x - 1\n\
             \nCurrent remainder:  -x - 1\n\
             Quotient term:      -1\n\
             Divisor multiplied: -x - 1\n\
             New remainder:      0\n"
        );
    }

    #[test]
    fn test_write_check() {
        let dividend = poly(&[(1, 2), (-1, 0)]);
        let divisor = poly(&[(1, 1), (1, 0)]);
        let quotient = poly(&[(1, 1), (-1, 0)]);
        let check = check_division(&dividend, &divisor, &quotient, &Polynomial::zero());

        let mut buf = Vec::new();
        write_check(&mut buf, &dividend, &check).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Product (divisor x quotient): x^2 - 1"));
        assert!(text.ends_with("Check passed: dividend = divisor x quotient + remainder.\n"));
    }
}
