// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{
    find_in_parent, resolve_config_location, ConfigLocation, DEFAULT_CONFIG_NAME,
};
use anyhow::{ensure, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::{env, io, path::PathBuf};
use tracing::debug;

/// Environment variables with this prefix override file values,
/// e.g. `POLYDIV_SHOW_STEPS=false`.
pub const ENV_PREFIX: &str = "POLYDIV_";

/// Number of built-in examples; `fallback_example` must be in `1..=BUILT_IN_EXAMPLES`.
pub const BUILT_IN_EXAMPLES: u8 = 2;

/// Settings for the console front end
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Print every long division step
    show_steps: bool,
    /// Recompute `divisor * quotient + remainder` after dividing
    verify: bool,
    /// Preset used when the menu receives an invalid choice
    fallback_example: u8,
    /// File the configuration was read from, if any
    #[serde(skip)]
    config_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            show_steps: true,
            verify: true,
            fallback_example: 1,
            config_file: None,
        }
    }
}

impl AppConfig {
    pub fn show_steps(&self) -> bool {
        self.show_steps
    }

    pub fn verify(&self) -> bool {
        self.verify
    }

    pub fn fallback_example(&self) -> u8 {
        self.fallback_example
    }

    pub fn config_file(&self) -> Option<&PathBuf> {
        self.config_file.as_ref()
    }

    pub fn with_overrides(mut self, overrides: &CliOverrides) -> Self {
        if let Some(show_steps) = overrides.show_steps {
            self.show_steps = show_steps;
        }
        if let Some(verify) = overrides.verify {
            self.verify = verify;
        }
        self
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            (1..=BUILT_IN_EXAMPLES).contains(&self.fallback_example),
            "fallback_example must be between 1 and {BUILT_IN_EXAMPLES}, got {}",
            self.fallback_example
        );
        Ok(())
    }
}

/// Value struct for passing flags from the cli to the configuration.
/// `None` leaves the file/env value in place.
#[derive(Default, Clone, Debug)]
pub struct CliOverrides {
    pub show_steps: Option<bool>,
    pub verify: Option<bool>,
}

pub struct OsDirs;
impl OsDirs {
    /// `<os config dir>/polydiv`, or the working directory when the OS has none
    pub fn config_dir() -> Result<PathBuf> {
        match dirs::config_dir() {
            Some(dir) => Ok(dir.join("polydiv")),
            None => Ok(env::current_dir()?),
        }
    }
}

/// Load the config at `config_file`, or discover it, layering
/// defaults, the YAML file and `POLYDIV_*` environment variables.
pub fn load_config(config_file: Option<String>, overrides: CliOverrides) -> Result<AppConfig> {
    let cli_file = config_file.map(PathBuf::from);
    let location = resolve_config_location(
        find_in_parent,
        &env::current_dir()?,
        &OsDirs::config_dir()?,
        DEFAULT_CONFIG_NAME,
        cli_file.as_deref(),
    );

    let exists = location.path().exists();
    if !exists && location.is_required() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Configuration file not found: {}", location.path().display()),
        )
        .into());
    }

    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    if exists {
        figment = figment.merge(Yaml::file(location.path()));
    }

    let mut config: AppConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).only(&["show_steps", "verify", "fallback_example"]))
        .extract()
        .context("Could not parse configuration")?;
    config.validate()?;

    if exists {
        config.config_file = Some(location.path().to_path_buf());
    }
    debug!(location = ?location, loaded = exists, "configuration resolved");

    Ok(config.with_overrides(&overrides))
}

/// Where a config would be read from, without reading it.
pub fn config_location(config_file: Option<String>) -> Result<ConfigLocation> {
    let cli_file = config_file.map(PathBuf::from);
    Ok(resolve_config_location(
        find_in_parent,
        &env::current_dir()?,
        &OsDirs::config_dir()?,
        DEFAULT_CONFIG_NAME,
        cli_file.as_deref(),
    ))
}
