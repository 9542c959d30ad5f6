//! Command to create a directory chain.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use canopath::config::DirMode;
use canopath::MkdirPolicy;
use clap::Args;

/// Create a directory and every missing ancestor, like `mkdir -p`.
///
/// A relative path is created under the current directory, as the OS
/// resolves it; `base_dir` does not apply.
#[derive(Args)]
pub struct MkdirCommand {
    /// Directory (or file, with --parent-only) to materialize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Treat the last component as a file name and create only its parents
    #[arg(long)]
    pub parent_only: bool,

    /// Stop at the first directory that cannot be created
    #[arg(long)]
    pub strict: bool,

    /// Permission bits for created directories, in octal (e.g. 0755)
    #[arg(long, value_name = "OCTAL")]
    pub mode: Option<String>,
}

impl MkdirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut materializer = config.materializer();
        if let Some(ref mode) = self.mode {
            let mode = DirMode::parse_octal(mode).map_err(CliError::InvalidArguments)?;
            materializer = materializer.with_mode(mode.bits());
        }
        if self.strict {
            materializer = materializer.with_policy(MkdirPolicy::Strict);
        }

        let report = materializer.materialize(&self.path, self.parent_only)?;

        if global.verbose {
            for dir in &report.created {
                eprintln!("created {dir}");
            }
            for dir in &report.existing {
                eprintln!("exists  {dir}");
            }
        }
        if !global.quiet {
            for (dir, err) in &report.failed {
                eprintln!("failed  {dir}: {err}");
            }
        }

        if report.is_complete() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} of {} directories could not be created",
                report.failed.len(),
                report.requested.len()
            )))
        }
    }
}
