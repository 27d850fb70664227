// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{anyhow, Result};
use polydiv_polynomial::Polynomial;

use crate::term_input::parse_term_list;

pub mod telemetry;

/// clap value parser for `--dividend` / `--divisor`
pub fn parse_polynomial(s: &str) -> Result<Polynomial> {
    parse_term_list(s).map_err(|e| anyhow!("{e} (in '{s}')"))
}
