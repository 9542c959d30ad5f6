//! Property-based tests for the path algebra.

use super::canonicalize::{canonicalize, canonicalize_absolute};
use super::containment::is_within_directory;
use super::stack::PathStack;
use proptest::prelude::*;

// Strategy for generating plain segment names
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 0..8).prop_map(|parts| format!("/{}", parts.join("/")))
}

// Raw paths mixing segments, dots, and doubled slashes
fn messy_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            Just(String::new()),
            segment_strategy(),
        ],
        0..12,
    )
    .prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // canonicalize(canonicalize(p)) == canonicalize(p)
    #[test]
    fn canonicalize_idempotent(raw in messy_path_strategy()) {
        let path = format!("/{raw}");
        let once = canonicalize(&path, "/base").unwrap();
        let twice = canonicalize(&once, "/base").unwrap();
        prop_assert_eq!(once, twice);
    }

    // Canonical output is rooted and free of dots, empty segments, and trailing slashes
    #[test]
    fn canonical_form_is_clean(raw in messy_path_strategy(), base in absolute_path_strategy()) {
        let cano = canonicalize(&raw, &base).unwrap();
        prop_assert!(cano.starts_with('/'));
        if cano != "/" {
            prop_assert!(!cano.ends_with('/'));
            for segment in cano[1..].split('/') {
                prop_assert!(!segment.is_empty());
                prop_assert_ne!(segment, ".");
                prop_assert_ne!(segment, "..");
            }
        }
    }

    // Already-clean absolute paths are unchanged
    #[test]
    fn clean_paths_are_fixed_points(path in absolute_path_strategy()) {
        prop_assert_eq!(canonicalize_absolute(&path).unwrap(), path);
    }

    // Parsed segments never contain separators or dot entries
    #[test]
    fn parsed_segments_are_plain(raw in messy_path_strategy()) {
        let stack = PathStack::parse(&raw, false);
        for segment in stack.segments() {
            prop_assert!(!segment.is_empty());
            prop_assert!(!segment.contains('/'));
            prop_assert!(segment != "." && segment != "..");
        }
    }

    // Capacity always leaves room for the terminating slot
    #[test]
    fn capacity_exceeds_depth(raw in messy_path_strategy()) {
        let stack = PathStack::parse(&raw, true);
        prop_assert!(stack.capacity() > stack.depth());
    }

    // Appending a segment to a directory yields a contained file
    #[test]
    fn child_is_within_parent(dir in absolute_path_strategy(), name in segment_strategy()) {
        let file = format!("{dir}/{name}");
        prop_assert!(is_within_directory(&file, &dir, "/").unwrap());
    }

    // A directory is never within itself, and neither is a sibling sharing its prefix
    #[test]
    fn boundary_is_respected(dir in absolute_path_strategy(), suffix in segment_strategy()) {
        prop_assume!(dir != "/");
        prop_assert!(!is_within_directory(&dir, &dir, "/").unwrap());
        let sibling = format!("{dir}{suffix}");
        prop_assert!(!is_within_directory(&sibling, &dir, "/").unwrap());
    }

    // Containment is transitive along a chain of descendants
    #[test]
    fn containment_transitive(base in absolute_path_strategy(), a in segment_strategy(), b in segment_strategy()) {
        let mid = format!("{base}/{a}");
        let leaf = format!("{mid}/{b}");
        prop_assert!(is_within_directory(&mid, &base, "/").unwrap());
        prop_assert!(is_within_directory(&leaf, &mid, "/").unwrap());
        prop_assert!(is_within_directory(&leaf, &base, "/").unwrap());
    }
}
