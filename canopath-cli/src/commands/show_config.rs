//! Command to print the merged configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::{Args, ValueEnum};

/// Serialization used by `show-config`.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ConfigFormat {
    /// YAML, as written in configuration files
    #[default]
    Yaml,
    /// Pretty-printed JSON
    Json,
}

/// Show the configuration after merging files, environment and flags.
#[derive(Args)]
pub struct ShowConfigCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = ConfigFormat::Yaml)]
    pub format: ConfigFormat,
}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let output = match self.format {
            ConfigFormat::Yaml => {
                serde_yaml::to_string(&config).map_err(|e| CliError::Config(e.to_string()))?
            }
            ConfigFormat::Json => {
                serde_json::to_string_pretty(&config).map_err(|e| CliError::Config(e.to_string()))?
            }
        };

        println!("{}", output.trim_end());
        Ok(())
    }
}
