//! Environment variable handling for configuration overrides.
//!
//! This module provides support for CANOPATH_* environment variables that
//! override configuration file values.

use crate::config::schema::{Config, DirMode};
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use canopath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads all CANOPATH_* environment variables and applies them to the
    /// configuration with higher precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., a non-octal mode or an unrecognized boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        // CANOPATH_BASE_DIR
        if let Ok(base_dir) = env::var("CANOPATH_BASE_DIR") {
            config.base_dir = Some(base_dir);
        }

        // CANOPATH_TARGET_DIR
        if let Ok(target_dir) = env::var("CANOPATH_TARGET_DIR") {
            config.target_dir = Some(target_dir);
        }

        // CANOPATH_EXEC_MODE
        if let Ok(val) = env::var("CANOPATH_EXEC_MODE") {
            config.exec_mode = Some(Self::parse_bool("CANOPATH_EXEC_MODE", &val)?);
        }

        Self::apply_mkdir_overrides(config)?;

        Ok(())
    }

    /// Apply mkdir-related environment variable overrides.
    fn apply_mkdir_overrides(config: &mut Config) -> Result<()> {
        if let Ok(mode) = env::var("CANOPATH_MKDIR_MODE") {
            let mode = DirMode::parse_octal(&mode).map_err(|message| Error::Validation {
                field: "CANOPATH_MKDIR_MODE".into(),
                message,
            })?;
            config.mkdir.get_or_insert_with(Default::default).mode = Some(mode);
        }

        if let Ok(val) = env::var("CANOPATH_MKDIR_STRICT") {
            let strict = Self::parse_bool("CANOPATH_MKDIR_STRICT", &val)?;
            config.mkdir.get_or_insert_with(Default::default).strict = Some(strict);
        }

        Ok(())
    }

    /// Parse a boolean environment value.
    ///
    /// Accepts `true/false`, `1/0` and `yes/no`, case-insensitively.
    fn parse_bool(field: &str, value: &str) -> Result<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid boolean value: {value}"),
            }),
        }
    }
}
