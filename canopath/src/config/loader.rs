//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading canopath configuration files
//! from various locations with proper precedence.

use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "canopath.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use canopath::config::ConfigSource;
/// use std::path::PathBuf;
///
/// // User config has lowest precedence
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.canopath/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use canopath::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.canopath/config.yaml` (precedence 1)
    /// 2. The nearest `canopath.yaml` walking up from `working_dir` (precedence 2)
    ///
    /// The `config_dir` parameter overrides where the user config is loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read,
    /// parsed or validated.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(config_dir)? {
            sources.push(user_config);
        }

        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Load the user configuration file, if present.
    fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let Some(config_path) = Self::user_config_location(config_dir, home::home_dir()) else {
            log::debug!("no home directory; skipping user configuration");
            return Ok(None);
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Find the nearest project configuration by walking up directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        for dir in start_dir.ancestors() {
            let candidate = dir.join(PROJECT_CONFIG_FILE);
            if candidate.exists() {
                log::debug!("found project config at {}", candidate.display());
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }
        }
        Ok(None)
    }

    /// Load and validate a single configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML for the
    /// schema, or fails validation.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.display().to_string(),
            reason: format!("Cannot read configuration file: {e}"),
        })?;

        let config: Config = serde_yaml::from_str(&contents)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Default location of the user configuration file.
    ///
    /// Returns `None` if the home directory cannot be determined.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        Self::user_config_location(None, home::home_dir())
    }

    /// `<config_dir>/config.yaml` if given, else `<home>/.canopath/config.yaml`.
    fn user_config_location(config_dir: Option<&Path>, home: Option<PathBuf>) -> Option<PathBuf> {
        match config_dir {
            Some(dir) => Some(dir.join("config.yaml")),
            None => home.map(|home| home.join(".canopath").join("config.yaml")),
        }
    }
}
