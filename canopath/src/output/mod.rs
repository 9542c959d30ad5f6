//! Output formatting for canonicalization and containment results.
//!
//! Results are rendered either as plain lines, suited to shell pipelines, or
//! as pretty-printed JSON.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Result;
use crate::path::canonicalize::canonicalize;
use crate::path::TargetDirectory;

pub use formatters::{JsonFormatter, PlainFormatter};

/// One canonicalized input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalReport {
    /// The path as given.
    pub input: String,
    /// Its canonical absolute form.
    pub canonical: String,
}

impl CanonicalReport {
    /// Canonicalizes `input` against `base`.
    ///
    /// # Errors
    ///
    /// See [`canonicalize`].
    pub fn resolve(input: &str, base: &str) -> Result<Self> {
        Ok(Self {
            input: input.to_string(),
            canonical: canonicalize(input, base)?,
        })
    }
}

/// Outcome of a containment check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainmentReport {
    /// The filename as given.
    pub filename: String,
    /// The canonical filename.
    pub canonical: String,
    /// The canonical target directory.
    pub target_dir: String,
    /// Whether the file lies inside the target.
    pub within: bool,
}

impl ContainmentReport {
    /// Checks `filename` (resolved against `base`) against `target`.
    ///
    /// # Errors
    ///
    /// See [`canonicalize`].
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::output::ContainmentReport;
    /// use canopath::path::TargetDirectory;
    ///
    /// let target = TargetDirectory::new("/srv").unwrap();
    /// let report = ContainmentReport::check("data/x", &target, "/srv").unwrap();
    /// assert!(report.within);
    /// assert_eq!(report.canonical, "/srv/data/x");
    /// ```
    pub fn check(filename: &str, target: &TargetDirectory, base: &str) -> Result<Self> {
        let canonical = canonicalize(filename, base)?;
        Ok(Self {
            filename: filename.to_string(),
            within: target.contains_canonical(&canonical),
            canonical,
            target_dir: target.as_str().to_string(),
        })
    }
}

/// Renders reports into text.
pub trait OutputFormatter {
    /// Formats a batch of canonicalized paths.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_canonical(&self, reports: &[CanonicalReport]) -> Result<String>;

    /// Formats a containment result.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_containment(&self, report: &ContainmentReport) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One value per line.
    #[default]
    Plain,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Plain => Box::new(PlainFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s} (expected plain or json)")),
        }
    }
}
