//! Build script for canopath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared again here.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("canopath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Canonicalize paths and check directory containment")
        .long_about(
            "Symbolic path canonicalization, containment checks and recursive directory \
             creation for process tracers",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Directory holding the user configuration file")
                .value_name("PATH")
                .global(true)
                .env("CANOPATH_CONFIG_DIR"),
        )
        .arg(
            Arg::new("exec-mode")
                .long("exec-mode")
                .help("Forbid real filesystem resolution (sandboxed exec mode)")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("canonicalize")
                .about("Canonicalize one or more paths")
                .long_about("Resolve paths against a base directory without touching the filesystem"),
            Command::new("within")
                .about("Check whether a file lies inside a target directory")
                .long_about("Exit 0 if the canonical file is strictly inside the target, 1 otherwise"),
            Command::new("mkdir")
                .about("Create a directory and all of its ancestors")
                .long_about("Create every missing directory along a path, like mkdir -p"),
            Command::new("realpath")
                .about("Resolve an existing path through the filesystem")
                .long_about("Follow symlinks to the real absolute path; refused in exec mode"),
            Command::new("readlink")
                .about("Print the immediate target of a symbolic link")
                .long_about("Print a symlink's target text without following it; refused in exec mode"),
            Command::new("link-target")
                .about("Print where a symbolic link points, canonicalized")
                .long_about("Resolve a symlink's target text against the directory holding the link"),
            Command::new("show-config")
                .about("Show the merged configuration")
                .long_about("Print configuration merged from files, environment and flags"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("canopath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
