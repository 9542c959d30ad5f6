//! Command to print a symlink's immediate target.

use crate::error::CliError;
use crate::utils::{join_base, load_configuration, resolve_base, GlobalOptions};
use canopath::FsResolver;
use clap::Args;

/// Print the target text of a symbolic link without following it.
#[derive(Args)]
pub struct ReadlinkCommand {
    /// Symbolic link to read
    #[arg(value_name = "LINK")]
    pub link: String,

    /// Base directory for a relative path (defaults to base_dir, then the cwd)
    #[arg(long, value_name = "DIR")]
    pub base: Option<String>,
}

impl ReadlinkCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let base = resolve_base(self.base, &config)?;

        let resolver = FsResolver::new(config.exec_mode());
        let target = resolver.symlink_target(&join_base(&self.link, &base))?;

        println!("{target}");
        Ok(())
    }
}
