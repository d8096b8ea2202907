//! Property-based tests for node paths.
//!
//! The normalize module already carries a few quick properties. This module
//! runs the heavier checks: decomposition, absolutization and relationships.

use super::*;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9_-]{1,12}",
        "[a-z]{1,4}:[a-z0-9]{1,8}",
        "[a-z]{1,8}\\[[1-9][0-9]{0,3}\\]",
    ]
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            segment_strategy(),
        ],
        1..6,
    )
    .prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Canonical input is left unchanged
    #[test]
    fn normalize_keeps_canonical(path in absolute_path_strategy()) {
        prop_assert_eq!(normalize_path(&path, PathRole::Lookup).unwrap(), path);
    }

    // Generated paths are valid for lookup
    #[test]
    fn generated_paths_valid(path in absolute_path_strategy()) {
        prop_assert!(is_valid_absolute_path(&path, PathRole::Lookup));
    }

    // Destination validity is exactly "no index anywhere"
    #[test]
    fn destination_iff_no_index(path in absolute_path_strategy()) {
        let has_index = path.contains('[');
        prop_assert_eq!(is_valid_absolute_path(&path, PathRole::Destination), !has_index);
    }

    // Parent plus name reconstructs the path
    #[test]
    fn parent_and_name_reconstruct(path in absolute_path_strategy()) {
        prop_assert_eq!(join_path(parent_path(&path), node_name(&path)), path);
    }

    // Parent is one level shallower
    #[test]
    fn parent_depth(path in absolute_path_strategy()) {
        prop_assert_eq!(path_depth(parent_path(&path)) + 1, path_depth(&path));
    }

    // Trailing slash does not change depth
    #[test]
    fn depth_trailing_slash(path in absolute_path_strategy()) {
        prop_assert_eq!(path_depth(&format!("{path}/")), path_depth(&path));
    }

    // Absolute input ignores the context
    #[test]
    fn absolutize_ignores_context(path in absolute_path_strategy(), ctx in absolute_path_strategy()) {
        prop_assert_eq!(
            absolutize_path(&path, &ctx).unwrap(),
            normalize_path(&path, PathRole::Lookup).unwrap()
        );
    }

    // Absolutized output is always valid and never above the root
    #[test]
    fn absolutize_valid(rel in relative_path_strategy(), ctx in absolute_path_strategy()) {
        let resolved = absolutize_path(&rel, &ctx).unwrap();
        prop_assert!(is_valid_absolute_path(&resolved, PathRole::Lookup));
    }

    // Relativize then absolutize returns the original path
    #[test]
    fn relativize_round_trip(base in absolute_path_strategy(), rest in absolute_path_strategy()) {
        let full = format!("{base}{rest}");
        let rel = relativize_path(&full, &base).unwrap();
        prop_assert_eq!(absolutize_path(&rel, &base).unwrap(), full);
    }

    // Relationship symmetry
    #[test]
    fn relationship_symmetric(a in absolute_path_strategy(), b in absolute_path_strategy()) {
        let is_symmetric = matches!(
            (PathRelationship::between(&a, &b), PathRelationship::between(&b, &a)),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );
        prop_assert!(is_symmetric);
    }

    // Every non-root path is within the root
    #[test]
    fn within_root(path in absolute_path_strategy()) {
        prop_assert!(PathRelationship::is_within(&path, "/"));
        prop_assert!(PathRelationship::contains("/", &path));
    }
}
