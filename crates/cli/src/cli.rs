// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::parse_polynomial;
use crate::helpers::telemetry::setup_tracing;
use crate::presets::Preset;
use crate::{divide, menu};
use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser, Subcommand};
use polydiv_config::{
    config_location, load_config, AppConfig, CliOverrides, BUILT_IN_EXAMPLES,
};
use polydiv_polynomial::Polynomial;
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "polydiv")]
#[command(about = "Exact integer polynomial long division, step by step", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `polydiv -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,

    /// Do not print the intermediate division steps
    #[arg(long = "no-steps", global = true)]
    no_steps: bool,

    /// Skip the `divisor x quotient + remainder` check
    #[arg(long = "no-verify", global = true)]
    no_verify: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            show_steps: self.no_steps.then_some(false),
            verify: self.no_verify.then_some(false),
        }
    }

    pub fn load_config(&self) -> Result<AppConfig> {
        load_config(self.config.clone(), self.overrides())
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        setup_tracing(self.log_level());

        let config = self.load_config()?;
        info!("Config loaded from: {:?}", config.config_file());

        match self.command.unwrap_or(Commands::Menu) {
            Commands::Menu => menu::execute(&config)?,
            Commands::Example { number } => {
                let preset =
                    Preset::get(number).ok_or_else(|| anyhow!("Unknown example {number}"))?;
                divide::execute(&config, preset.dividend(), preset.divisor())?
            }
            Commands::Divide { dividend, divisor } => {
                divide::execute(&config, dividend, divisor)?
            }
            Commands::PrintConfig => {
                let location = config_location(self.config)?;
                println!("config file: {}", location.path().display());
                println!("loaded:      {}", config.config_file().is_some());
                println!("show_steps:  {}", config.show_steps());
                println!("verify:      {}", config.verify());
                println!("fallback_example: {}", config.fallback_example());
            }
        }

        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu: pick an example or type your own polynomials (default)
    Menu,

    /// Run one of the built-in examples
    Example {
        /// Example number
        #[arg(value_parser = clap::value_parser!(u8).range(1..=i64::from(BUILT_IN_EXAMPLES)))]
        number: u8,
    },

    /// Divide two polynomials given as term lists
    Divide {
        /// Dividend as `coefficient exponent` pairs, e.g. "2 3, 3 2, -1 1, 5 0"
        #[arg(long, allow_hyphen_values = true, value_parser = parse_polynomial)]
        dividend: Polynomial,

        /// Divisor as `coefficient exponent` pairs, e.g. "1 2, -1 0"
        #[arg(long, allow_hyphen_values = true, value_parser = parse_polynomial)]
        divisor: Polynomial,
    },

    /// Print where the configuration is read from and its effective values
    PrintConfig,
}
