//! Command to resolve a path through the filesystem.

use crate::error::CliError;
use crate::utils::{join_base, load_configuration, resolve_base, GlobalOptions};
use canopath::FsResolver;
use clap::Args;

/// Resolve an existing path to its real location, following symlinks.
#[derive(Args)]
pub struct RealpathCommand {
    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Base directory for a relative path (defaults to base_dir, then the cwd)
    #[arg(long, value_name = "DIR")]
    pub base: Option<String>,
}

impl RealpathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let base = resolve_base(self.base, &config)?;

        let resolver = FsResolver::new(config.exec_mode());
        let real = resolver.real_path(&join_base(&self.path, &base))?;

        println!("{real}");
        Ok(())
    }
}
