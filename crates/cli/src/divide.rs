// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Result};
use polydiv_config::AppConfig;
use polydiv_polynomial::{check_division, Polynomial};
use std::io::Write;
use tracing::{info, instrument};

use crate::report::{self, ConsoleTrace};

/// Divides, presents the steps and result, and runs the check when enabled.
///
/// Returns whether the division identity held (`true` when the check is off).
#[instrument(skip_all)]
pub fn run(
    config: &AppConfig,
    dividend: &Polynomial,
    divisor: &Polynomial,
    out: &mut impl Write,
) -> Result<bool> {
    report::write_selection(out, dividend, divisor)?;

    writeln!(out, "\n>>> Starting division...")?;
    let outcome = if config.show_steps() {
        let mut trace = ConsoleTrace::new(out);
        let outcome = dividend.div_with_trace(divisor, &mut trace);
        trace.finish()?;
        outcome?
    } else {
        dividend.div(divisor)?
    };
    writeln!(out, "\n>>> Division finished.")?;

    report::write_outcome(out, &outcome)?;
    info!(quotient = %outcome.quotient, remainder = %outcome.remainder, "division complete");

    if !config.verify() {
        return Ok(true);
    }

    let check = check_division(dividend, divisor, &outcome.quotient, &outcome.remainder);
    report::write_check(out, dividend, &check)?;
    info!(holds = check.holds, "division checked");

    Ok(check.holds)
}

/// Runs a division for the `divide` and `example` commands.
pub fn execute(config: &AppConfig, dividend: Polynomial, divisor: Polynomial) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if !run(config, &dividend, &divisor, &mut stdout)? {
        bail!("Division check failed: dividend != divisor x quotient + remainder");
    }
    writeln!(stdout, "\nDone.")?;
    Ok(())
}
