//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: configuration
//! loading and resolution of the base and target directories.

use crate::error::CliError;
use canopath::{Config, ConfigBuilder};
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Directory holding the user configuration file.
    pub config_dir: Option<PathBuf>,

    /// Forbid real filesystem resolution.
    pub exec_mode: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let working_dir = env::current_dir()?;
    let mut builder = ConfigBuilder::new().with_working_dir(&working_dir);

    if let Some(ref config_dir) = global.config_dir {
        builder = builder.with_config_dir(config_dir);
    }

    // The flag only ever tightens the mode; leaving it unset keeps file and env values
    if global.exec_mode {
        builder = builder.with_config(Config {
            exec_mode: Some(true),
            ..Default::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the base directory for relative paths.
///
/// Priority: explicit `--base` > config `base_dir` > current directory.
pub fn resolve_base(explicit: Option<String>, config: &Config) -> Result<String, CliError> {
    if let Some(base) = explicit.or_else(|| config.base_dir.clone()) {
        return Ok(base);
    }

    env::current_dir()?.into_os_string().into_string().map_err(|raw| {
        CliError::InvalidArguments(format!(
            "current directory is not valid UTF-8: {}",
            raw.to_string_lossy()
        ))
    })
}

/// Join a relative `path` onto `base` without collapsing `..`.
///
/// OS-backed commands use this so symlinked directories are resolved by
/// the filesystem rather than symbolically.
pub fn join_base(path: &str, base: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("{}/{path}", base.trim_end_matches('/'))
    }
}

/// Pick the containment target.
///
/// Priority: explicit `--target` > config `target_dir`.
pub fn resolve_target(explicit: Option<String>, config: &Config) -> Result<String, CliError> {
    explicit
        .or_else(|| config.target_dir.clone())
        .ok_or_else(|| {
            CliError::InvalidArguments(
                "no target directory (use --target or set target_dir)".to_string(),
            )
        })
}
