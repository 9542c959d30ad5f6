//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CanonicalizeCommand, CompletionsCommand, LinkTargetCommand, MkdirCommand, ReadlinkCommand,
    RealpathCommand, ShowConfigCommand, WithinCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for canonicalizing traced paths.
#[derive(Parser)]
#[command(name = "canopath")]
#[command(
    version,
    about = "Canonicalize paths and check directory containment",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Directory holding the user configuration file
    #[arg(long, value_name = "PATH", global = true, env = "CANOPATH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Forbid real filesystem resolution (sandboxed exec mode).
    /// CANOPATH_EXEC_MODE is read with the rest of the configuration
    #[arg(long, global = true)]
    pub exec_mode: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Canonicalize one or more paths
    Canonicalize(CanonicalizeCommand),

    /// Check whether a file lies inside a target directory
    Within(WithinCommand),

    /// Create a directory and all of its ancestors
    Mkdir(MkdirCommand),

    /// Resolve an existing path through the filesystem
    Realpath(RealpathCommand),

    /// Print the immediate target of a symbolic link
    Readlink(ReadlinkCommand),

    /// Print where a symbolic link points, canonicalized
    LinkTarget(LinkTargetCommand),

    /// Show the merged configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
