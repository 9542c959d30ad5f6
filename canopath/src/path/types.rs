//! Core types shared by the path modules.

use std::fmt;

/// Whether real filesystem resolution can be trusted in this process.
///
/// The mode is set once by whatever controls the traced process and passed
/// explicitly to the OS-backed resolvers in [`crate::path::resolve`]:
///
/// - **Native** (`ExecMode::Native`): the filesystem view is the real one,
///   so `realpath`/`readlink` style resolution is allowed.
/// - **Sandboxed** (`ExecMode::Sandboxed`): running inside an emulated or
///   redirected execution context. The filesystem view is untrustworthy and
///   the resolvers refuse to run.
///
/// # Examples
///
/// ```
/// use canopath::path::ExecMode;
///
/// assert!(ExecMode::Native.allows_resolution());
/// assert!(!ExecMode::Sandboxed.allows_resolution());
/// assert_eq!(ExecMode::from_flag(true), ExecMode::Sandboxed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecMode {
    /// Real filesystem resolution is permitted.
    #[default]
    Native,

    /// Real filesystem resolution is forbidden.
    Sandboxed,
}

impl ExecMode {
    /// Maps the boolean exec-mode flag (set means sandboxed) to a mode.
    #[must_use]
    pub const fn from_flag(exec_mode: bool) -> Self {
        if exec_mode {
            Self::Sandboxed
        } else {
            Self::Native
        }
    }

    /// Returns `true` if OS-level resolution may run in this mode.
    #[must_use]
    pub const fn allows_resolution(self) -> bool {
        matches!(self, Self::Native)
    }
}

impl fmt::Display for ExecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Sandboxed => write!(f, "sandboxed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_native() {
        assert_eq!(ExecMode::default(), ExecMode::Native);
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(ExecMode::from_flag(false), ExecMode::Native);
        assert_eq!(ExecMode::from_flag(true), ExecMode::Sandboxed);
    }

    #[test]
    fn test_display() {
        assert_eq!(ExecMode::Native.to_string(), "native");
        assert_eq!(ExecMode::Sandboxed.to_string(), "sandboxed");
    }
}
