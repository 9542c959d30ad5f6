//! Error types for the canopath library.
//!
//! This module provides the error hierarchy for path canonicalization,
//! containment checks, directory materialization and OS-backed resolution,
//! using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a canopath error.
///
/// # Examples
///
/// ```
/// use canopath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/a/b".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the canopath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path violated a precondition of the operation it was passed to,
    /// e.g. a relative path where an absolute one is required.
    ///
    /// Callers must not proceed after receiving this error.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath {
        /// The offending path.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// Real filesystem resolution was requested while running sandboxed.
    #[error("filesystem resolution of '{path}' is forbidden in sandboxed exec mode")]
    ResolutionForbidden {
        /// The path whose resolution was refused.
        path: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A path expected to be a symbolic link is not one.
    #[error("not a symbolic link: {}", path.display())]
    NotASymlink {
        /// The path that is not a symbolic link.
        path: PathBuf,
    },

    /// A symbolic link resolved to empty target text.
    #[error("symbolic link has an empty target: {}", path.display())]
    EmptyLinkTarget {
        /// The link with the empty target.
        path: PathBuf,
    },

    /// The OS resolution primitive returned a path that is not absolute.
    #[error("resolution of {} produced non-absolute path '{resolved}'", path.display())]
    NonAbsoluteResolution {
        /// The path that was resolved.
        path: PathBuf,
        /// What the OS returned.
        resolved: String,
    },

    /// Creating one directory of a recursive chain failed.
    #[error("failed to create directory '{path}': {source}")]
    DirectoryCreation {
        /// The directory prefix that could not be created.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Builds an [`Error::InvalidPath`] from anything string-like.
    pub(crate) fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if error is a caller precondition violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::path::canonicalize::canonicalize_absolute;
    ///
    /// let err = canonicalize_absolute("relative/path").unwrap_err();
    /// assert!(err.is_precondition());
    /// ```
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }
}
