#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # canopath
//!
//! Symbolic path canonicalization and containment checks for process tracers.
//!
//! A tracer sees filenames exactly as the traced program passed them, often
//! relative to that program's own working directory. This library resolves
//! them into canonical absolute paths without consulting the filesystem,
//! decides whether they fall inside a target directory tree, and creates
//! directory chains on demand.
//!
//! ## Core Types
//!
//! - [`PathStack`]: the segment stack behind every canonical path
//! - [`TargetDirectory`]: a canonical containment target
//! - [`DirectoryMaterializer`]: `mkdir -p` with a configurable failure policy
//! - [`ExecMode`] and [`FsResolver`]: OS-backed resolution, gated by mode
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use canopath::{canonicalize, is_within_directory};
//!
//! let file = canonicalize("./src/../lib.rs", "/work/project").unwrap();
//! assert_eq!(file, "/work/project/lib.rs");
//!
//! assert!(is_within_directory(&file, "/work/project", "/").unwrap());
//! assert!(!is_within_directory("/work/project2/x", "/work/project", "/").unwrap());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::canonicalize::{canonicalize, canonicalize_absolute, canonicalize_relative};
pub use path::containment::is_within_directory;
pub use path::mkdir::make_directory_recursive;
pub use path::resolve::{resolve_link_destination, resolve_real_path, resolve_symlink_target};
pub use path::{
    DirectoryMaterializer, ExecMode, FsResolver, MkdirPolicy, MkdirReport, PathStack,
    TargetDirectory,
};
