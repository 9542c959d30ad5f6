//! Main entry point for the canopath CLI.
//!
//! This is the command-line front end for the canopath library. It exposes
//! the path operations a process tracer relies on:
//! - `canonicalize`: Resolve paths symbolically against a base directory
//! - `within`: Check whether a file lies inside a target directory
//! - `mkdir`: Create a directory chain, `mkdir -p` style
//! - `realpath` / `readlink` / `link-target`: OS-backed resolution

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library diagnostics to stderr based on verbosity
    canopath::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
        exec_mode: cli.exec_mode,
    };

    let result = match cli.command {
        cli::Command::Canonicalize(cmd) => cmd.execute(&global),
        cli::Command::Within(cmd) => cmd.execute(&global),
        cli::Command::Mkdir(cmd) => cmd.execute(&global),
        cli::Command::Realpath(cmd) => cmd.execute(&global),
        cli::Command::Readlink(cmd) => cmd.execute(&global),
        cli::Command::LinkTarget(cmd) => cmd.execute(&global),
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
