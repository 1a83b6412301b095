//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{Result, RollcallError};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_roster_config(&settings.roster)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate remote API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(RollcallError::Config("API base URL is required".to_string()));
    }

    Url::parse(&config.base_url)?;

    if config.timeout_seconds == 0 {
        return Err(RollcallError::Config(
            "API timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate roster configuration
fn validate_roster_config(config: &super::RosterConfig) -> Result<()> {
    if config.school_year < 2000 {
        return Err(RollcallError::Config(format!(
            "Implausible school year: {}",
            config.school_year
        )));
    }

    if config.timezone_offset_hours < -12 || config.timezone_offset_hours > 14 {
        return Err(RollcallError::Config(format!(
            "Timezone offset out of range: {}",
            config.timezone_offset_hours
        )));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(RollcallError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(RollcallError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
