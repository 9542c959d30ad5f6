//! Recursive directory creation (`mkdir -p`).
//!
//! The path is parsed the same way the canonicalizer parses it, then every
//! ancestor prefix is requested in order, shortest first. Relative paths are
//! not joined to any base; they are handed to the OS as-is and therefore
//! resolve against the current process's working directory.
//!
//! Creation is not transactional. Directories created before a failure stay
//! in place.

use std::io;

use crate::error::{Error, Result};

use super::stack::PathStack;

/// Permission bits used when none are configured.
pub const DEFAULT_DIR_MODE: u32 = 0o777;

/// Creates a single directory.
///
/// This is the seam between the materializer and the operating system.
/// Implementations must report an existing directory with
/// [`io::ErrorKind::AlreadyExists`].
#[cfg_attr(test, mockall::automock)]
pub trait DirCreator {
    /// Creates the directory `path` with permission bits `mode`.
    ///
    /// # Errors
    ///
    /// Returns the OS error for the single `mkdir` request.
    fn create_dir(&mut self, path: &str, mode: u32) -> io::Result<()>;
}

/// [`DirCreator`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsDirCreator;

impl DirCreator for OsDirCreator {
    fn create_dir(&mut self, path: &str, mode: u32) -> io::Result<()> {
        let mut builder = std::fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;
        builder.create(path)
    }
}

/// What to do when one directory in the chain cannot be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MkdirPolicy {
    /// Record the failure and keep going with the remaining prefixes.
    #[default]
    BestEffort,

    /// Stop at the first failure and return it.
    Strict,
}

/// Outcome of a recursive directory creation.
#[derive(Debug, Default)]
pub struct MkdirReport {
    /// Every prefix requested, in request order.
    pub requested: Vec<String>,
    /// Prefixes that were newly created.
    pub created: Vec<String>,
    /// Prefixes that already existed.
    pub existing: Vec<String>,
    /// Prefixes that failed, with the OS error (best-effort mode only).
    pub failed: Vec<(String, io::Error)>,
}

impl MkdirReport {
    /// Returns `true` if no request failed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Creates every missing ancestor of a path.
///
/// # Examples
///
/// ```no_run
/// use canopath::path::{DirectoryMaterializer, MkdirPolicy};
///
/// let report = DirectoryMaterializer::new()
///     .with_mode(0o755)
///     .with_policy(MkdirPolicy::Strict)
///     .materialize("/tmp/mirror/usr/lib/libc.so.6", true)
///     .unwrap();
/// assert_eq!(report.requested.last().unwrap(), "/tmp/mirror/usr/lib");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryMaterializer {
    mode: u32,
    policy: MkdirPolicy,
}

impl Default for DirectoryMaterializer {
    fn default() -> Self {
        Self {
            mode: DEFAULT_DIR_MODE,
            policy: MkdirPolicy::default(),
        }
    }
}

impl DirectoryMaterializer {
    /// Creates a best-effort materializer using mode `0o777`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the permission bits passed with each request.
    #[must_use]
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the failure policy.
    #[must_use]
    pub fn with_policy(mut self, policy: MkdirPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured permission bits.
    #[must_use]
    pub fn mode(&self) -> u32 {
        self.mode
    }

    /// The configured failure policy.
    #[must_use]
    pub fn policy(&self) -> MkdirPolicy {
        self.policy
    }

    /// Creates the ancestors of `full_path` on the real filesystem.
    ///
    /// With `pop_last` set the final component is treated as a file name and
    /// only its parent chain is created.
    ///
    /// # Errors
    ///
    /// In [`MkdirPolicy::Strict`] mode, returns [`Error::DirectoryCreation`]
    /// for the first prefix that fails for any reason other than already
    /// existing.
    pub fn materialize(&self, full_path: &str, pop_last: bool) -> Result<MkdirReport> {
        self.materialize_with(&mut OsDirCreator, full_path, pop_last)
    }

    /// Like [`DirectoryMaterializer::materialize`], issuing requests through `creator`.
    ///
    /// # Errors
    ///
    /// See [`DirectoryMaterializer::materialize`].
    pub fn materialize_with<C>(
        &self,
        creator: &mut C,
        full_path: &str,
        pop_last: bool,
    ) -> Result<MkdirReport>
    where
        C: DirCreator + ?Sized,
    {
        let mut stack = PathStack::parse_auto(full_path);
        if pop_last {
            stack.pop();
        }

        let mut report = MkdirReport::default();
        for prefix in stack.prefixes() {
            log::debug!("mkdir '{prefix}' (mode {:o})", self.mode);
            report.requested.push(prefix.clone());

            match creator.create_dir(&prefix, self.mode) {
                Ok(()) => report.created.push(prefix),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => report.existing.push(prefix),
                Err(e) => match self.policy {
                    MkdirPolicy::Strict => {
                        return Err(Error::DirectoryCreation {
                            path: prefix,
                            source: e,
                        });
                    }
                    MkdirPolicy::BestEffort => {
                        log::warn!("could not create directory '{prefix}': {e}");
                        report.failed.push((prefix, e));
                    }
                },
            }
        }

        Ok(report)
    }
}

/// Emulates `mkdir -p` for `full_path` with mode `0o777`, best effort.
///
/// With `pop_last` set the final component is skipped, which is what callers
/// want when `full_path` names a file.
///
/// # Errors
///
/// Never fails in best-effort mode; failures are listed in
/// [`MkdirReport::failed`]. The `Result` leaves room for strict callers that
/// go through [`DirectoryMaterializer`].
pub fn make_directory_recursive(full_path: &str, pop_last: bool) -> Result<MkdirReport> {
    DirectoryMaterializer::new().materialize(full_path, pop_last)
}
