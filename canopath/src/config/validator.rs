//! Configuration validation.
//!
//! This module checks that configured directories are usable as resolution
//! bases and containment targets, and that directory modes are in range.

use crate::config::schema::{Config, MkdirConfig};
use crate::error::{Error, Result};
use crate::path::is_absolute;

/// Highest permission value accepted for created directories.
pub const MAX_DIR_MODE: u32 = 0o7777;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use canopath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns validation errors for invalid configurations.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref base_dir) = config.base_dir {
            Self::validate_directory("base_dir", base_dir)?;
        }

        if let Some(ref target_dir) = config.target_dir {
            Self::validate_directory("target_dir", target_dir)?;
        }

        if let Some(ref mkdir) = config.mkdir {
            Self::validate_mkdir(mkdir)?;
        }

        Ok(())
    }

    /// Directories must be absolute and free of NUL bytes.
    fn validate_directory(field: &str, value: &str) -> Result<()> {
        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        if !is_absolute(value) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Must be an absolute path, got '{value}'"),
            });
        }

        Ok(())
    }

    fn validate_mkdir(mkdir: &MkdirConfig) -> Result<()> {
        if let Some(mode) = mkdir.mode {
            if mode.bits() > MAX_DIR_MODE {
                return Err(Error::Validation {
                    field: "mkdir.mode".into(),
                    message: format!("Mode {:o} exceeds {MAX_DIR_MODE:o}", mode.bits()),
                });
            }
        }
        Ok(())
    }
}
