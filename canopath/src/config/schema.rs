//! Configuration schema definitions.
//!
//! This module defines the configuration structure for canopath: the
//! default resolution base, the containment target, the exec-mode flag and
//! directory-creation settings.

use serde::{Deserialize, Deserializer, Serialize};

use crate::path::mkdir::DEFAULT_DIR_MODE;
use crate::path::{DirectoryMaterializer, ExecMode, MkdirPolicy};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use canopath::config::{Config, MkdirConfig};
///
/// let config = Config {
///     base_dir: Some("/home/user".to_string()),
///     mkdir: Some(MkdirConfig {
///         strict: Some(true),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.base_dir.as_deref(), Some("/home/user"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base directory for relative filenames.
    pub base_dir: Option<String>,

    /// Directory tree used for containment checks.
    pub target_dir: Option<String>,

    /// When true, real filesystem resolution is forbidden.
    pub exec_mode: Option<bool>,

    /// Recursive directory creation settings.
    pub mkdir: Option<MkdirConfig>,
}

impl Config {
    /// The exec mode implied by the `exec_mode` flag (unset means native).
    #[must_use]
    pub fn exec_mode(&self) -> ExecMode {
        ExecMode::from_flag(self.exec_mode.unwrap_or(false))
    }

    /// A materializer configured from the `mkdir` section.
    #[must_use]
    pub fn materializer(&self) -> DirectoryMaterializer {
        let mkdir = self.mkdir.clone().unwrap_or_default();
        let policy = if mkdir.strict.unwrap_or(false) {
            MkdirPolicy::Strict
        } else {
            MkdirPolicy::BestEffort
        };
        DirectoryMaterializer::new()
            .with_mode(mkdir.mode.map_or(DEFAULT_DIR_MODE, DirMode::bits))
            .with_policy(policy)
    }
}

/// Recursive directory creation settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MkdirConfig {
    /// Permission bits for created directories.
    pub mode: Option<DirMode>,

    /// Stop at the first failed directory instead of continuing.
    pub strict: Option<bool>,
}

/// Directory permission bits.
///
/// Deserializes from either an integer (`493`) or an octal string
/// (`"0755"`, `"0o755"`, `"755"`). Serializes as an octal string.
///
/// # Examples
///
/// ```
/// use canopath::config::DirMode;
///
/// assert_eq!(DirMode::parse_octal("0755").unwrap().bits(), 0o755);
/// assert_eq!(DirMode::parse_octal("0o700").unwrap().bits(), 0o700);
/// assert!(DirMode::parse_octal("0799").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirMode(u32);

impl DirMode {
    /// Wraps raw permission bits.
    #[must_use]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw permission bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Parses an octal mode string.
    ///
    /// # Errors
    ///
    /// Returns a message if the string is not a valid octal number.
    pub fn parse_octal(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("0o").unwrap_or(trimmed);
        u32::from_str_radix(digits, 8)
            .map(Self)
            .map_err(|_| format!("Invalid octal mode: {s}"))
    }
}

impl Default for DirMode {
    fn default() -> Self {
        Self(DEFAULT_DIR_MODE)
    }
}

impl Serialize for DirMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!("{:04o}", self.0))
    }
}

impl<'de> Deserialize<'de> for DirMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Bits(u32),
            String(String),
        }

        match Helper::deserialize(deserializer)? {
            Helper::Bits(bits) => Ok(DirMode(bits)),
            Helper::String(s) => DirMode::parse_octal(&s).map_err(D::Error::custom),
        }
    }
}
