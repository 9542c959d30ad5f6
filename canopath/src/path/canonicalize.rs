//! Symbolic path canonicalization.
//!
//! These functions never touch the filesystem. They work on paths that may
//! not exist yet, and on relative paths resolved against a caller-supplied
//! base rather than the current process's working directory.

use crate::error::{Error, Result};

use super::parse::is_absolute;
use super::stack::PathStack;

/// Canonicalizes an absolute path.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if `path` does not begin with `/`.
///
/// # Examples
///
/// ```
/// use canopath::path::canonicalize::canonicalize_absolute;
///
/// assert_eq!(canonicalize_absolute("/a/./b/../c").unwrap(), "/a/c");
/// assert_eq!(canonicalize_absolute("/..").unwrap(), "/");
/// assert!(canonicalize_absolute("a/b").is_err());
/// ```
pub fn canonicalize_absolute(path: &str) -> Result<String> {
    if !is_absolute(path) {
        return Err(Error::invalid_path(path, "expected an absolute path"));
    }
    Ok(PathStack::parse(path, true).to_string())
}

/// Canonicalizes `relpath` against the absolute directory `base`.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if `relpath` is absolute or `base` is not.
///
/// # Examples
///
/// ```
/// use canopath::path::canonicalize::canonicalize_relative;
///
/// assert_eq!(canonicalize_relative("b/../c", "/a").unwrap(), "/a/c");
/// assert_eq!(canonicalize_relative("../../..", "/a").unwrap(), "/");
/// ```
pub fn canonicalize_relative(relpath: &str, base: &str) -> Result<String> {
    if is_absolute(relpath) {
        return Err(Error::invalid_path(relpath, "expected a relative path"));
    }
    if !is_absolute(base) {
        return Err(Error::invalid_path(
            base,
            "base directory for a relative path must be absolute",
        ));
    }
    canonicalize_absolute(&format!("{base}/{relpath}"))
}

/// Canonicalizes `path`, resolving it against `base` when it is relative.
///
/// The result is always rooted at `/`, free of `.`/`..` and duplicate
/// slashes, and has no trailing slash unless it is exactly `/`.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if `path` is relative and `base` is not
/// absolute.
///
/// # Examples
///
/// ```
/// use canopath::path::canonicalize::canonicalize;
///
/// assert_eq!(canonicalize("/a//b///c", "/x").unwrap(), "/a/b/c");
/// assert_eq!(canonicalize("b/../c", "/a").unwrap(), "/a/c");
/// ```
pub fn canonicalize(path: &str, base: &str) -> Result<String> {
    let canonical = if is_absolute(path) {
        canonicalize_absolute(path)?
    } else {
        canonicalize_relative(path, base)?
    };
    log::debug!("canonicalized '{path}' (base '{base}') to '{canonical}'");
    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_dot_elimination() {
        assert_eq!(canonicalize("/a/./b/../c", "/x").unwrap(), "/a/c");
    }

    #[test]
    fn test_canonicalize_cannot_climb_above_root() {
        assert_eq!(canonicalize("/../../a", "/x").unwrap(), "/a");
    }

    #[test]
    fn test_canonicalize_collapses_slashes() {
        assert_eq!(canonicalize("/a//b///c", "/x").unwrap(), "/a/b/c");
    }

    #[test]
    fn test_canonicalize_relative_to_base() {
        assert_eq!(canonicalize("b/../c", "/a").unwrap(), "/a/c");
        assert_eq!(canonicalize("./file.txt", "/home/user/").unwrap(), "/home/user/file.txt");
    }

    #[test]
    fn test_canonicalize_relative_climbs_out_of_base() {
        assert_eq!(canonicalize("../etc/passwd", "/home/user").unwrap(), "/home/etc/passwd");
    }

    #[test]
    fn test_canonicalize_root_results() {
        assert_eq!(canonicalize("/", "/x").unwrap(), "/");
        assert_eq!(canonicalize("/.", "/x").unwrap(), "/");
        assert_eq!(canonicalize(".", "/").unwrap(), "/");
        assert_eq!(canonicalize("", "/a/b").unwrap(), "/a/b");
    }

    #[test]
    fn test_canonicalize_trailing_slash_removed() {
        assert_eq!(canonicalize("/a/b/", "/x").unwrap(), "/a/b");
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let once = canonicalize("/a/./b//../c/", "/x").unwrap();
        let twice = canonicalize(&once, "/x").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_canonicalize_absolute_rejects_relative() {
        let err = canonicalize_absolute("a/b").unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }

    #[test]
    fn test_canonicalize_relative_rejects_absolute_path() {
        let err = canonicalize_relative("/a", "/b").unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn test_canonicalize_relative_rejects_relative_base() {
        let err = canonicalize("a", "relative/base").unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn test_canonicalize_absolute_ignores_bad_base() {
        assert_eq!(canonicalize("/a", "not-absolute").unwrap(), "/a");
    }
}
