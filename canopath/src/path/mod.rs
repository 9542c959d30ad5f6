//! Symbolic path algebra for traced processes.
//!
//! This module turns filenames as seen by a traced process into canonical
//! absolute paths and decides whether they fall inside a target directory.
//! It works on strings rather than the live filesystem, so paths that do not
//! exist yet are handled, and relative paths are resolved against an
//! explicit per-process base instead of this process's working directory.
//!
//! # Key Concepts
//!
//! ## Component stack
//!
//! [`PathStack`] holds the segments of a path. Parsing collapses repeated
//! slashes, drops `.` and lets `..` pop the previous segment. A `..` at the
//! root (or at the start of a relative path) is ignored.
//!
//! ## Canonical paths
//!
//! A canonical path is rooted at `/`, has no `.`/`..`, no duplicate slashes
//! and no trailing slash unless it is exactly `/`. See [`canonicalize`].
//!
//! ## Containment
//!
//! A file is within a directory when the directory's canonical form plus a
//! trailing `/` is a prefix of the file's canonical form. See [`containment`].
//!
//! ## Exec mode
//!
//! The OS-backed resolvers in [`resolve`] only run under [`ExecMode::Native`].
//!
//! # Examples
//!
//! ```
//! use canopath::path::canonicalize::canonicalize;
//! use canopath::path::containment::is_within_directory;
//!
//! let file = canonicalize("../lib/./libc.so.6", "/usr/bin").unwrap();
//! assert_eq!(file, "/usr/lib/libc.so.6");
//!
//! assert!(is_within_directory(&file, "/usr", "/").unwrap());
//! assert!(!is_within_directory(&file, "/usr/lib64", "/").unwrap());
//! ```

pub mod canonicalize;
pub mod containment;
pub mod mkdir;
mod parse;
pub mod resolve;
mod stack;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use containment::TargetDirectory;
pub use mkdir::{DirCreator, DirectoryMaterializer, MkdirPolicy, MkdirReport, OsDirCreator};
pub use parse::is_absolute;
pub use resolve::FsResolver;
pub use stack::PathStack;
pub use types::ExecMode;
