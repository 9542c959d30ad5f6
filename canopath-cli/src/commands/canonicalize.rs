//! Command to canonicalize paths symbolically.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_base, GlobalOptions};
use canopath::output::{CanonicalReport, OutputFormat};
use clap::Args;

/// Canonicalize paths without consulting the filesystem.
#[derive(Args)]
pub struct CanonicalizeCommand {
    /// Paths to canonicalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Base directory for relative paths (defaults to base_dir, then the cwd)
    #[arg(long, value_name = "DIR")]
    pub base: Option<String>,

    /// Output format (plain or json)
    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,
}

impl CanonicalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let base = resolve_base(self.base, &config)?;

        let reports = self
            .paths
            .iter()
            .map(|path| CanonicalReport::resolve(path, &base))
            .collect::<Result<Vec<_>, _>>()?;

        let output = self.format.create_formatter().format_canonical(&reports)?;
        println!("{output}");
        Ok(())
    }
}
