//! The component stack behind every canonical path.
//!
//! A [`PathStack`] is an ordered list of path segments plus a flag saying
//! whether the path is rooted at `/`. Segments are never empty, `.` or `..`;
//! those are eliminated while parsing (see [`PathStack::parse`]).

/// An ordered, growable sequence of path segments.
///
/// Each stack exclusively owns its segments. Dropping the stack releases
/// every segment along with the container.
///
/// # Examples
///
/// ```
/// use canopath::path::PathStack;
///
/// let mut stack = PathStack::new(true);
/// stack.push("usr");
/// stack.push("lib");
/// assert_eq!(stack.depth(), 2);
/// assert_eq!(stack.to_string(), "/usr/lib");
///
/// stack.pop();
/// assert_eq!(stack.to_string(), "/usr");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathStack {
    segments: Vec<String>,
    is_absolute: bool,
    capacity: usize,
    // Free-slot budget, only resynchronized with `capacity` on growth and clear
    free_slots: usize,
}

impl PathStack {
    /// Creates an empty stack.
    ///
    /// The stack starts with room for a single slot, which is reserved as
    /// the terminating slot, so the first push grows it.
    #[must_use]
    pub fn new(is_absolute: bool) -> Self {
        Self {
            segments: Vec::with_capacity(1),
            is_absolute,
            capacity: 1,
            free_slots: 0,
        }
    }

    /// Appends `component` as the new last segment.
    ///
    /// Callers filter out empty components, `.` and `..` before pushing;
    /// [`PathStack::parse`] is the usual way to build a stack.
    pub fn push(&mut self, component: impl Into<String>) {
        let component = component.into();
        debug_assert!(
            !component.is_empty() && component != "." && component != ".." && !component.contains('/'),
            "not a plain path segment: {component:?}"
        );

        self.grow_for_append();
        self.segments.push(component);
        self.free_slots -= 1;
    }

    /// Removes the last segment. Popping an empty stack is a no-op.
    pub fn pop(&mut self) -> Option<String> {
        let popped = self.segments.pop();
        if popped.is_some() {
            self.free_slots += 1;
        }
        popped
    }

    /// Releases every segment, keeping the capacity and the absolute flag.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.free_slots = self.capacity - 1;
    }

    /// Number of segments currently on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the stack holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns `true` if the stack represents a path rooted at `/`.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.is_absolute
    }

    /// Allocated slot count, including the terminating slot.
    ///
    /// Starts at 1 and becomes `2 * capacity + 1` whenever fewer than two
    /// free slots remain before an append. After growing, the free-slot
    /// budget is `old_capacity + 1` rather than the true number of unused
    /// slots, so growth happens at pushes 1, 2, 5, 12, 27, ... on a fresh stack.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The innermost segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Consumes the stack, handing back its segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }

    /// Grows the stack if fewer than two free slots remain.
    ///
    /// Parsing runs this once per component step, including `.` and a
    /// trailing empty component, before deciding what the component does.
    pub(super) fn grow_for_append(&mut self) {
        while self.free_slots <= 1 {
            self.free_slots = self.capacity + 1;
            self.capacity = self.capacity * 2 + 1;
        }
        let wanted = self.capacity - 1;
        if self.segments.capacity() < wanted {
            self.segments.reserve_exact(wanted - self.segments.len());
        }
    }
}
