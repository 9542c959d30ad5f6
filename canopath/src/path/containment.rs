//! Deciding whether a file lives inside a target directory tree.
//!
//! Both paths are canonicalized first, so the check is a plain string
//! prefix test. The target gets a trailing `/` before comparison, which
//! enforces a directory boundary: `/a/bee` is not inside `/a/b`.
//!
//! The filename is assumed to name a file. A directory equal to the target
//! is reported as *not* contained, because nothing follows the boundary.

use crate::error::Result;

use super::canonicalize::{canonicalize, canonicalize_absolute};

/// A canonicalized target directory, ready for repeated containment checks.
///
/// # Examples
///
/// ```
/// use canopath::path::TargetDirectory;
///
/// let target = TargetDirectory::new("/home/user/./project/").unwrap();
/// assert_eq!(target.as_str(), "/home/user/project");
///
/// assert!(target.contains("src/main.rs", "/home/user/project").unwrap());
/// assert!(!target.contains("/home/user/project2/x", "/").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDirectory {
    canonical: String,
    boundary: String,
}

impl TargetDirectory {
    /// Canonicalizes `target_dir` and prepares its boundary prefix.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPath`] if `target_dir` is not absolute.
    pub fn new(target_dir: &str) -> Result<Self> {
        let canonical = canonicalize_absolute(target_dir)?;
        let boundary = if canonical == "/" {
            canonical.clone()
        } else {
            format!("{canonical}/")
        };
        Ok(Self {
            canonical,
            boundary,
        })
    }

    /// The canonical target directory, without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Returns `true` if the already-canonical `cano_file` lies under the target.
    #[must_use]
    pub fn contains_canonical(&self, cano_file: &str) -> bool {
        cano_file.starts_with(&self.boundary)
    }

    /// Canonicalizes `filename` against `base` and tests containment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPath`] if `filename` is relative and
    /// `base` is not absolute.
    pub fn contains(&self, filename: &str, base: &str) -> Result<bool> {
        let cano_file = canonicalize(filename, base)?;
        let within = self.contains_canonical(&cano_file);
        log::debug!(
            "'{cano_file}' is {} '{}'",
            if within { "within" } else { "outside" },
            self.canonical
        );
        Ok(within)
    }
}

/// Returns `true` iff `filename`, resolved against `base`, lies inside `target_dir`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidPath`] if `target_dir` is not absolute, or
/// if `filename` is relative and `base` is not absolute.
///
/// # Examples
///
/// ```
/// use canopath::path::containment::is_within_directory;
///
/// assert!(is_within_directory("/a/b/c", "/a/b", "/").unwrap());
/// assert!(!is_within_directory("/a/bee", "/a/b", "/").unwrap());
/// // a directory is not "within" itself
/// assert!(!is_within_directory("/a/b", "/a/b", "/").unwrap());
/// // everything is within the root
/// assert!(is_within_directory("/anything/at/all", "/", "/").unwrap());
/// ```
pub fn is_within_directory(filename: &str, target_dir: &str, base: &str) -> Result<bool> {
    TargetDirectory::new(target_dir)?.contains(filename, base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_rejects_sibling_with_common_prefix() {
        assert!(!is_within_directory("/a/bee", "/a/b", "/").unwrap());
        assert!(!is_within_directory("/home/user/hello.txt", "/home/user/hello", "/").unwrap());
    }

    #[test]
    fn test_file_inside_target() {
        assert!(is_within_directory("/a/b/c", "/a/b", "/").unwrap());
        assert!(is_within_directory("/a/b/c/d/e", "/a/b", "/").unwrap());
    }

    #[test]
    fn test_directory_not_within_itself() {
        assert!(!is_within_directory("/a/b", "/a/b", "/").unwrap());
        assert!(!is_within_directory("/a/b/", "/a/b", "/").unwrap());
    }

    #[test]
    fn test_root_target_contains_everything() {
        assert!(is_within_directory("/anything/at/all", "/", "/").unwrap());
        assert!(is_within_directory("x", "/", "/base").unwrap());
    }

    #[test]
    fn test_root_file_within_root() {
        // "/" as a file starts with the "/" boundary
        assert!(is_within_directory("/", "/", "/").unwrap());
    }

    #[test]
    fn test_relative_filename_uses_base() {
        assert!(is_within_directory("c.txt", "/a/b", "/a/b").unwrap());
        assert!(!is_within_directory("../c.txt", "/a/b", "/a/b").unwrap());
        assert!(is_within_directory("sub/../c.txt", "/a/b", "/a/b/d").unwrap());
    }

    #[test]
    fn test_dotdot_escape_detected() {
        assert!(!is_within_directory("/a/b/../../etc/passwd", "/a/b", "/").unwrap());
    }

    #[test]
    fn test_target_is_canonicalized() {
        assert!(is_within_directory("/a/b/c", "/a/./x/../b//", "/").unwrap());
    }

    #[test]
    fn test_relative_target_rejected() {
        let err = is_within_directory("/a/b", "a", "/").unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn test_relative_file_with_relative_base_rejected() {
        let err = is_within_directory("b", "/a", "a").unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn test_target_directory_reuse() {
        let target = TargetDirectory::new("/srv/data").unwrap();
        assert_eq!(target.as_str(), "/srv/data");
        assert!(target.contains_canonical("/srv/data/x"));
        assert!(!target.contains_canonical("/srv/database"));
        assert!(!target.contains_canonical("/srv/data"));
    }
}
