//! Command to print where a symlink points.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_base, GlobalOptions};
use canopath::FsResolver;
use clap::Args;

/// Print a symbolic link's destination as a canonical absolute path.
///
/// Relative link text is resolved against the directory holding the link.
#[derive(Args)]
pub struct LinkTargetCommand {
    /// Symbolic link to read
    #[arg(value_name = "LINK")]
    pub link: String,

    /// Base directory for a relative link path (defaults to base_dir, then the cwd)
    #[arg(long, value_name = "DIR")]
    pub base: Option<String>,
}

impl LinkTargetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let base = resolve_base(self.base, &config)?;

        let resolver = FsResolver::new(config.exec_mode());
        println!("{}", resolver.link_destination(&self.link, &base)?);
        Ok(())
    }
}
