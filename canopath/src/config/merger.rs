//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, MkdirConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use canopath::config::{Config, ConfigMerger};
///
/// let low = Config { base_dir: Some("/low".to_string()), ..Default::default() };
/// let high = Config { base_dir: Some("/high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.base_dir, Some("/high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - `mkdir`: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.base_dir.is_some() {
            target.base_dir.clone_from(&source.base_dir);
        }

        if source.target_dir.is_some() {
            target.target_dir.clone_from(&source.target_dir);
        }

        if source.exec_mode.is_some() {
            target.exec_mode = source.exec_mode;
        }

        if let Some(ref source_mkdir) = source.mkdir {
            let target_mkdir = target.mkdir.get_or_insert_with(MkdirConfig::default);
            Self::merge_mkdir(target_mkdir, source_mkdir);
        }
    }

    fn merge_mkdir(target: &mut MkdirConfig, source: &MkdirConfig) {
        if source.mode.is_some() {
            target.mode = source.mode;
        }
        if source.strict.is_some() {
            target.strict = source.strict;
        }
    }
}
