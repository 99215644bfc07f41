//! Configuration loading
//!
//! Parses and validates the embedded link configuration.
//! Falls back to defaults if it is unusable.

use defmt::*;

use lumen_core::config::{ConfigError as InvalidConfig, LinkConfig};

use super::toml::{parse_config, ParseError};

/// Configuration loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML parsing failed
    Parse(ParseError),
    /// Values parsed but are inconsistent
    Invalid(InvalidConfig),
}

impl From<ParseError> for ConfigError {
    fn from(e: ParseError) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<InvalidConfig> for ConfigError {
    fn from(e: InvalidConfig) -> Self {
        ConfigError::Invalid(e)
    }
}

/// Parse and validate a configuration
pub fn load_config(text: &str) -> Result<LinkConfig, ConfigError> {
    let config = parse_config(text)?;
    config.validate()?;
    Ok(config)
}

/// Load a configuration, falling back to defaults on error
pub fn load_or_default(text: &str) -> LinkConfig {
    match load_config(text) {
        Ok(config) => {
            info!("Link config loaded: {:?}", config.timing);
            config
        }
        Err(e) => {
            warn!("Link config rejected ({:?}), using defaults", e);
            LinkConfig::default()
        }
    }
}
