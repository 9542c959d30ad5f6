//! Command to check whether a file lies inside a target directory.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_base, resolve_target, GlobalOptions};
use canopath::output::{ContainmentReport, OutputFormat};
use canopath::{canonicalize, TargetDirectory};
use clap::Args;

/// Check whether a file lies strictly inside a target directory.
///
/// Exits with status 1 when it does not.
#[derive(Args)]
pub struct WithinCommand {
    /// File to check
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Target directory (defaults to target_dir from configuration)
    #[arg(long, value_name = "DIR")]
    pub target: Option<String>,

    /// Base directory for relative paths (defaults to base_dir, then the cwd)
    #[arg(long, value_name = "DIR")]
    pub base: Option<String>,

    /// Output format (plain or json)
    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,
}

impl WithinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let base = resolve_base(self.base, &config)?;
        let target = resolve_target(self.target, &config)?;

        // A relative --target is taken relative to the same base as the file
        let target = TargetDirectory::new(&canonicalize(&target, &base)?)?;
        let report = ContainmentReport::check(&self.file, &target, &base)?;

        let output = self.format.create_formatter().format_containment(&report)?;
        println!("{output}");

        if report.within {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} is not within {}",
                report.canonical, report.target_dir
            )))
        }
    }
}
