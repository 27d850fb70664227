// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod app_config;
pub mod load_config;

pub use app_config::*;
pub use load_config::{ConfigLocation, DEFAULT_CONFIG_NAME};
