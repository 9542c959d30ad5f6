//! Output formatter implementations.

use crate::{Error, Result};

use super::{CanonicalReport, ContainmentReport, OutputFormatter};

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Validation {
        field: "json_output".to_string(),
        message: format!("failed to serialize to JSON: {e}"),
    })
}

/// Plain text: one canonical path per line, or `true`/`false`.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_canonical(&self, reports: &[CanonicalReport]) -> Result<String> {
        Ok(reports
            .iter()
            .map(|r| r.canonical.as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn format_containment(&self, report: &ContainmentReport) -> Result<String> {
        Ok(report.within.to_string())
    }
}

/// Pretty-printed JSON.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_canonical(&self, reports: &[CanonicalReport]) -> Result<String> {
        to_json(reports)
    }

    fn format_containment(&self, report: &ContainmentReport) -> Result<String> {
        to_json(report)
    }
}
