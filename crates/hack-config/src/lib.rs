//! HackBrowser configuration system.
//!
//! TOML-based configuration with full validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hack_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("home page: {}", config.tabs.home_page);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{HackConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use hack_common::ConfigError;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<HackConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path when one is given, otherwise from the
/// platform default path.
pub fn load_config_from(path: Option<&Path>) -> Result<HackConfig, ConfigError> {
    match path {
        Some(p) => toml_loader::load_from_path(p),
        None => load_config(),
    }
}
