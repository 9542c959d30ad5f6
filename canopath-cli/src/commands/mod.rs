//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `canonicalize`: Resolve paths symbolically
//! - `within`: Containment check against a target directory
//! - `mkdir`: Recursive directory creation
//! - `realpath`: Real path through the filesystem
//! - `readlink`: Immediate symlink target
//! - `link_target`: Canonical symlink destination
//! - `show_config`: Print the merged configuration
//! - `completions`: Shell completion scripts

pub mod canonicalize;
pub mod completions;
pub mod link_target;
pub mod mkdir;
pub mod readlink;
pub mod realpath;
pub mod show_config;
pub mod within;

pub use canonicalize::CanonicalizeCommand;
pub use completions::CompletionsCommand;
pub use link_target::LinkTargetCommand;
pub use mkdir::MkdirCommand;
pub use readlink::ReadlinkCommand;
pub use realpath::RealpathCommand;
pub use show_config::ShowConfigCommand;
pub use within::WithinCommand;
