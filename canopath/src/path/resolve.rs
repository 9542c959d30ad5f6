//! Resolution through the operating system.
//!
//! Symbolic parsing cannot see through real symlinks, so for paths that
//! already exist these functions ask the OS. They only run in
//! [`ExecMode::Native`]; in sandboxed mode the filesystem view is not the
//! one the traced program sees and resolution is refused.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

use super::canonicalize::{canonicalize, canonicalize_absolute};
use super::parse::is_absolute;
use super::stack::PathStack;
use super::types::ExecMode;

fn ensure_allowed(filename: &str, mode: ExecMode) -> Result<()> {
    if mode.allows_resolution() {
        Ok(())
    } else {
        log::debug!("refusing to resolve '{filename}' in {mode} mode");
        Err(Error::ResolutionForbidden {
            path: filename.to_string(),
        })
    }
}

fn map_io_error(path: &Path, e: std::io::Error) -> Error {
    match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    }
}

/// Resolves an existing path to its real absolute path, following symlinks.
///
/// # Errors
///
/// Returns:
/// - [`Error::ResolutionForbidden`] in sandboxed mode
/// - [`Error::PathNotFound`] / [`Error::PermissionDenied`] if the OS cannot resolve it
/// - [`Error::NonAbsoluteResolution`] if the OS returns a relative result
/// - [`Error::InvalidPath`] if the result is not valid UTF-8
///
/// # Examples
///
/// ```no_run
/// use canopath::path::{resolve::resolve_real_path, ExecMode};
///
/// let real = resolve_real_path("/usr/bin/../lib", ExecMode::Native).unwrap();
/// assert!(real.starts_with('/'));
/// ```
pub fn resolve_real_path(filename: &str, mode: ExecMode) -> Result<String> {
    ensure_allowed(filename, mode)?;

    let path = Path::new(filename);
    let real = fs::canonicalize(path).map_err(|e| map_io_error(path, e))?;
    let real = real
        .into_os_string()
        .into_string()
        .map_err(|raw| Error::invalid_path(raw.to_string_lossy(), "resolved path is not valid UTF-8"))?;

    if !is_absolute(&real) {
        return Err(Error::NonAbsoluteResolution {
            path: path.to_path_buf(),
            resolved: real,
        });
    }
    Ok(real)
}

/// Reads the immediate target text of a symbolic link, without following it further.
///
/// # Errors
///
/// Returns:
/// - [`Error::ResolutionForbidden`] in sandboxed mode
/// - [`Error::NotASymlink`] if `filename` exists but is not a symlink
/// - [`Error::PathNotFound`] / [`Error::PermissionDenied`] on OS failure
/// - [`Error::EmptyLinkTarget`] if the link text is empty
pub fn resolve_symlink_target(filename: &str, mode: ExecMode) -> Result<String> {
    ensure_allowed(filename, mode)?;

    let path = Path::new(filename);
    let target = fs::read_link(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidInput => Error::NotASymlink {
            path: path.to_path_buf(),
        },
        _ => map_io_error(path, e),
    })?;
    let target = target
        .into_os_string()
        .into_string()
        .map_err(|raw| Error::invalid_path(raw.to_string_lossy(), "link target is not valid UTF-8"))?;

    if target.is_empty() {
        return Err(Error::EmptyLinkTarget {
            path: path.to_path_buf(),
        });
    }
    Ok(target)
}

/// Where a symbolic link points, as a canonical absolute path.
///
/// The link's own location is canonicalized against `base`; its target text
/// is then resolved against the link's parent directory. Only the link
/// itself is read, so the result may name a path that does not exist or is
/// itself a link.
///
/// # Errors
///
/// Returns the errors of [`resolve_symlink_target`], plus
/// [`Error::InvalidPath`] if `link` is relative and `base` is not absolute.
pub fn resolve_link_destination(link: &str, base: &str, mode: ExecMode) -> Result<String> {
    let cano_link = canonicalize(link, base)?;
    let target = resolve_symlink_target(&cano_link, mode)?;

    if is_absolute(&target) {
        return canonicalize_absolute(&target);
    }

    let mut parent = PathStack::parse(&cano_link, true);
    parent.pop();
    canonicalize(&target, &parent.to_string())
}

/// OS-backed resolver bound to an [`ExecMode`].
///
/// # Examples
///
/// ```
/// use canopath::path::{ExecMode, FsResolver};
///
/// let resolver = FsResolver::new(ExecMode::Sandboxed);
/// assert!(resolver.real_path("/").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FsResolver {
    mode: ExecMode,
}

impl FsResolver {
    /// Creates a resolver for the given mode.
    #[must_use]
    pub const fn new(mode: ExecMode) -> Self {
        Self { mode }
    }

    /// The mode this resolver runs under.
    #[must_use]
    pub const fn mode(&self) -> ExecMode {
        self.mode
    }

    /// See [`resolve_real_path`].
    ///
    /// # Errors
    ///
    /// See [`resolve_real_path`].
    pub fn real_path(&self, filename: &str) -> Result<String> {
        resolve_real_path(filename, self.mode)
    }

    /// See [`resolve_symlink_target`].
    ///
    /// # Errors
    ///
    /// See [`resolve_symlink_target`].
    pub fn symlink_target(&self, filename: &str) -> Result<String> {
        resolve_symlink_target(filename, self.mode)
    }

    /// See [`resolve_link_destination`].
    ///
    /// # Errors
    ///
    /// See [`resolve_link_destination`].
    pub fn link_destination(&self, link: &str, base: &str) -> Result<String> {
        resolve_link_destination(link, base, self.mode)
    }
}
