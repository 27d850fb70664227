// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{anyhow, Result};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use polydiv_config::AppConfig;
use polydiv_polynomial::Polynomial;
use tracing::{instrument, warn};

use crate::divide;
use crate::presets::{Preset, PRESETS};
use crate::term_input::parse_term_line;

const BANNER: &str = r#"
=======================================
         POLYNOMIAL DIVISION
=======================================
"#;

/// What the user picked from the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Preset(Preset),
    Custom,
}

/// Maps a menu index to a choice. Anything outside the list, including a
/// cancelled prompt, falls back to the configured example.
pub fn resolve_choice(selection: Option<usize>, fallback_example: u8) -> Result<MenuChoice> {
    match selection {
        Some(index) if index < PRESETS.len() => Ok(MenuChoice::Preset(PRESETS[index])),
        Some(index) if index == PRESETS.len() => Ok(MenuChoice::Custom),
        _ => {
            let preset = Preset::get(fallback_example)
                .ok_or_else(|| anyhow!("fallback_example {fallback_example} does not exist"))?;
            warn!(example = fallback_example, "invalid menu option, using fallback example");
            println!("Invalid option, using Example {fallback_example}.");
            Ok(MenuChoice::Preset(preset))
        }
    }
}

/// Prompts for terms one line at a time until an empty line is entered.
///
/// Invalid lines are rejected by the prompt itself and never reach the
/// polynomial.
pub fn prompt_polynomial(title: &str, example: &str) -> Result<Polynomial> {
    println!("\n>>> Enter the {title} polynomial");
    println!("Write each term as: coefficient exponent");
    println!("Example: {example}");
    println!("Press Enter on an empty line to finish");

    let mut poly = Polynomial::zero();
    loop {
        let line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Term (coefficient exponent)")
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                if input.trim().is_empty() {
                    return Ok(());
                }
                parse_term_line(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?;

        if line.trim().is_empty() {
            break;
        }
        let (coefficient, exponent) = parse_term_line(&line)?;
        poly.insert_term(coefficient, exponent);
        println!("  {title} so far: {poly}");
    }

    Ok(poly)
}

#[instrument(name = "menu", skip_all)]
pub fn execute(config: &AppConfig) -> Result<()> {
    println!("{BANNER}");

    let mut items: Vec<String> = PRESETS.iter().map(Preset::label).collect();
    items.push("Enter custom polynomials".to_string());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select an option")
        .items(&items)
        .default(0)
        .interact_opt()?;

    let (dividend, divisor) = match resolve_choice(selection, config.fallback_example())? {
        MenuChoice::Preset(preset) => (preset.dividend(), preset.divisor()),
        MenuChoice::Custom => (
            prompt_polynomial("dividend", "'2 3' means 2x^3")?,
            prompt_polynomial("divisor", "'1 2' means x^2")?,
        ),
    };

    divide::execute(config, dividend, divisor)
}
