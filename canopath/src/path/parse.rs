//! Parsing raw path strings into stacks and serializing them back.
//!
//! Parsing is a single left-to-right pass: runs of `/` collapse into one
//! separator, `.` is dropped and `..` pops the previous segment. A `..` that
//! would climb above the root (or above the implicit base of a relative
//! stack) is silently ignored.

use std::fmt;

use super::stack::PathStack;

/// Returns `true` if `path` is rooted at `/`.
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
}

impl PathStack {
    /// Parses `raw` into a canonical, dot-free stack.
    ///
    /// When `is_absolute` is set the leading `/` is consumed along with any
    /// run of slashes that follows it.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::path::PathStack;
    ///
    /// let stack = PathStack::parse("/a/./b/../c//d/", true);
    /// assert_eq!(stack.segments(), ["a", "c", "d"]);
    ///
    /// // ".." never climbs above the root
    /// let stack = PathStack::parse("/../../x", true);
    /// assert_eq!(stack.to_string(), "/x");
    ///
    /// let stack = PathStack::parse("../b", false);
    /// assert_eq!(stack.to_string(), "b");
    /// ```
    #[must_use]
    pub fn parse(raw: &str, is_absolute: bool) -> Self {
        let mut stack = Self::new(is_absolute);
        let body = if is_absolute {
            raw.strip_prefix('/').unwrap_or(raw)
        } else {
            raw
        };

        for component in body.split('/').filter(|c| !c.is_empty()) {
            stack.grow_for_append();
            match component {
                "." => {}
                ".." => {
                    stack.pop();
                }
                name => stack.push(name),
            }
        }

        // The terminating empty component is a step of its own
        if body.is_empty() || body.ends_with('/') {
            stack.grow_for_append();
        }

        stack
    }

    /// Parses `raw`, inferring the absolute flag from its leading `/`.
    #[must_use]
    pub fn parse_auto(raw: &str) -> Self {
        Self::parse(raw, is_absolute(raw))
    }

    /// Serializes the first `depth_limit` segments.
    ///
    /// A `depth_limit` of 0, or one larger than the stack, serializes the
    /// whole stack. Absolute stacks get a leading `/`; there is never a
    /// trailing separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::path::PathStack;
    ///
    /// let stack = PathStack::parse("/a/b/c", true);
    /// assert_eq!(stack.serialize(2), "/a/b");
    /// assert_eq!(stack.serialize(0), "/a/b/c");
    /// assert_eq!(stack.serialize(9), "/a/b/c");
    /// ```
    #[must_use]
    pub fn serialize(&self, depth_limit: usize) -> String {
        let depth = if depth_limit == 0 || depth_limit > self.depth() {
            self.depth()
        } else {
            depth_limit
        };
        let segments = &self.segments()[..depth];

        let len = segments.iter().map(|s| s.len() + 1).sum::<usize>() + 1;
        let mut out = String::with_capacity(len);
        if self.is_absolute() {
            out.push('/');
        }
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                out.push('/');
            }
            out.push_str(segment);
        }
        out
    }

    /// Serializations of every non-empty prefix, shortest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::path::PathStack;
    ///
    /// let stack = PathStack::parse("/a/b", true);
    /// let prefixes: Vec<_> = stack.prefixes().collect();
    /// assert_eq!(prefixes, ["/a", "/a/b"]);
    /// ```
    pub fn prefixes(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.depth()).map(move |depth| self.serialize(depth))
    }
}

impl fmt::Display for PathStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_absolute() {
        let stack = PathStack::parse("/usr/local/bin", true);
        assert!(stack.is_absolute());
        assert_eq!(stack.segments(), ["usr", "local", "bin"]);
    }

    #[test]
    fn test_parse_collapses_slashes() {
        let stack = PathStack::parse("/a//b///c", true);
        assert_eq!(stack.to_string(), "/a/b/c");
    }

    #[test]
    fn test_parse_growth_counts_every_step() {
        assert_eq!(PathStack::parse("/", true).capacity(), 3);
        assert_eq!(PathStack::parse("a/b/c/d", false).capacity(), 7);
        // The trailing empty component finds one free slot left and grows
        assert_eq!(PathStack::parse("a/b/c/d/", false).capacity(), 15);
        assert_eq!(PathStack::parse("/a/b/c/d/./x", true).capacity(), 15);
        // The fifth push grows unless a ".." handed a slot back first
        assert_eq!(PathStack::parse("/a/b/c/d/e", true).capacity(), 15);
        assert_eq!(PathStack::parse("/a/b/c/../d/e", true).capacity(), 7);
    }

    #[test]
    fn test_parse_ignores_trailing_slash() {
        let stack = PathStack::parse("/a/b/", true);
        assert_eq!(stack.to_string(), "/a/b");
    }

    #[test]
    fn test_parse_dot_and_dotdot() {
        let stack = PathStack::parse("/a/./b/../c", true);
        assert_eq!(stack.to_string(), "/a/c");
    }

    #[test]
    fn test_parse_dotdot_above_root() {
        let stack = PathStack::parse("/../../a", true);
        assert_eq!(stack.to_string(), "/a");
    }

    #[test]
    fn test_parse_relative_dotdot_above_base() {
        let stack = PathStack::parse("../../a/b", false);
        assert!(!stack.is_absolute());
        assert_eq!(stack.to_string(), "a/b");
    }

    #[test]
    fn test_parse_hidden_names_are_segments() {
        let stack = PathStack::parse("/a/.hidden/...", true);
        assert_eq!(stack.segments(), ["a", ".hidden", "..."]);
    }

    #[test]
    fn test_parse_root_and_empty() {
        assert_eq!(PathStack::parse("/", true).to_string(), "/");
        assert_eq!(PathStack::parse("//", true).to_string(), "/");
        assert_eq!(PathStack::parse("", false).to_string(), "");
        assert_eq!(PathStack::parse(".", false).to_string(), "");
    }

    #[test]
    fn test_parse_auto() {
        assert!(PathStack::parse_auto("/x").is_absolute());
        assert!(!PathStack::parse_auto("x").is_absolute());
    }

    #[test]
    fn test_serialize_prefix() {
        let stack = PathStack::parse("/a/b/c", true);
        assert_eq!(stack.serialize(1), "/a");
        assert_eq!(stack.serialize(2), "/a/b");
        assert_eq!(stack.serialize(3), "/a/b/c");
    }

    #[test]
    fn test_serialize_relative_prefix() {
        let stack = PathStack::parse("a/b/c", false);
        assert_eq!(stack.serialize(2), "a/b");
        assert_eq!(stack.to_string(), "a/b/c");
    }

    #[test]
    fn test_prefixes_in_order() {
        let stack = PathStack::parse("/a/b/c", true);
        let prefixes: Vec<String> = stack.prefixes().collect();
        assert_eq!(prefixes, ["/a", "/a/b", "/a/b/c"]);
    }

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("/"));
        assert!(is_absolute("//a"));
        assert!(!is_absolute("a/b"));
        assert!(!is_absolute(""));
    }
}
