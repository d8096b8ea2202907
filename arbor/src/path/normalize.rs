//! Path canonicalization.
//!
//! This module resolves `.` and `..` segments in well-shaped absolute
//! paths and resolves relative paths against a context path.

use crate::error::{Error, InvalidPathReason, Result};
use crate::path::grammar::{check_segment, strip_root, PathRole};

/// Resolve `.` and `..` segments in an absolute path.
///
/// Every kept segment is checked against the path grammar for `role`. A `..`
/// at the top of the tree is a no-op, so `/../foo` becomes `/foo`. The input
/// must be well-shaped: absolute, no `//`, and no trailing slash except
/// directly after a navigation segment (`/../` names the same node as
/// `/..`).
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the input is malformed or a kept
/// segment violates the grammar.
///
/// # Examples
///
/// ```
/// use arbor::path::{normalize_path, PathRole};
///
/// assert_eq!(normalize_path("/../foo", PathRole::Lookup).unwrap(), "/foo");
/// assert_eq!(normalize_path("/../", PathRole::Lookup).unwrap(), "/");
/// assert_eq!(normalize_path("/foo/../bar", PathRole::Lookup).unwrap(), "/bar");
/// assert_eq!(normalize_path("/foo/./bar", PathRole::Lookup).unwrap(), "/foo/bar");
///
/// assert!(normalize_path("foo/bar", PathRole::Lookup).is_err());
/// assert!(normalize_path("/foo/bar/", PathRole::Lookup).is_err());
/// ```
pub fn normalize_path(path: &str, role: PathRole) -> Result<String> {
    let mut rest = strip_root(path)?;
    if rest.is_empty() {
        return Ok("/".to_string());
    }

    if let Some(stripped) = rest.strip_suffix('/') {
        let last = stripped.rsplit('/').next().unwrap_or_default();
        if last.is_empty() {
            return Err(Error::invalid_path(path, InvalidPathReason::EmptySegment));
        }
        if last != "." && last != ".." {
            return Err(Error::invalid_path(path, InvalidPathReason::TrailingSlash));
        }
        rest = stripped;
    }

    let mut stack: Vec<&str> = Vec::new();
    for segment in rest.split('/') {
        match segment {
            "" => return Err(Error::invalid_path(path, InvalidPathReason::EmptySegment)),
            "." => {}
            ".." => {
                // Above the root there is nothing to pop
                stack.pop();
            }
            _ => {
                check_segment(path, segment, role)?;
                stack.push(segment);
            }
        }
    }

    if stack.is_empty() {
        Ok("/".to_string())
    } else {
        Ok(format!("/{}", stack.join("/")))
    }
}

/// Resolve `path` against `context` and normalize the result.
///
/// An absolute `path` ignores the context entirely. A relative one is
/// appended to the (normalized) context; an empty relative path resolves to
/// the context itself.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the context is malformed or the
/// combined path fails [`normalize_path`].
///
/// # Examples
///
/// ```
/// use arbor::path::absolutize_path;
///
/// assert_eq!(absolutize_path("../foo/bar", "/baz").unwrap(), "/foo/bar");
/// assert_eq!(absolutize_path("foo/./bar", "/baz").unwrap(), "/baz/foo/bar");
/// assert_eq!(absolutize_path("/../foo", "/").unwrap(), "/foo");
/// assert_eq!(absolutize_path("../", "/").unwrap(), "/");
/// ```
pub fn absolutize_path(path: &str, context: &str) -> Result<String> {
    if path.starts_with('/') {
        return normalize_path(path, PathRole::Lookup);
    }

    let base = normalize_path(context, PathRole::Lookup)?;
    if path.is_empty() {
        return Ok(base);
    }

    let joined = if base == "/" {
        format!("/{path}")
    } else {
        format!("{base}/{path}")
    };
    normalize_path(&joined, PathRole::Lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(path: &str) -> Result<String> {
        normalize_path(path, PathRole::Lookup)
    }

    #[test]
    fn test_normalize_scenarios() {
        let cases = [
            ("/../foo", "/foo"),
            ("/../", "/"),
            ("/foo/../bar", "/bar"),
            ("/foo/./bar", "/foo/bar"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize(input).unwrap(), expected, "input: {input}");
        }
    }

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize("/").unwrap(), "/");
        assert_eq!(normalize("/.").unwrap(), "/");
        assert_eq!(normalize("/..").unwrap(), "/");
        assert_eq!(normalize("/a/b/../..").unwrap(), "/");
    }

    #[test]
    fn test_normalize_surplus_parents_collapse_to_root() {
        assert_eq!(normalize("/a/../../../b").unwrap(), "/b");
    }

    #[test]
    fn test_normalize_trailing_after_navigation() {
        assert_eq!(normalize("/foo/./").unwrap(), "/foo");
        assert_eq!(normalize("/foo/bar/../").unwrap(), "/foo");
    }

    #[test]
    fn test_normalize_canonical_unchanged() {
        for path in ["/", "/a", "/a/b[2]/ns:c", "/jcr:foo_/b-a/0^.txt"] {
            assert_eq!(normalize(path).unwrap(), path);
        }
    }

    #[test]
    fn test_normalize_invalid() {
        let cases = [
            ("foo/bar", InvalidPathReason::NotAbsolute),
            ("bar", InvalidPathReason::NotAbsolute),
            ("/foo/bar/", InvalidPathReason::TrailingSlash),
            ("", InvalidPathReason::Empty),
            ("/foo//bar", InvalidPathReason::EmptySegment),
            ("//", InvalidPathReason::EmptySegment),
            ("/foo[0]", InvalidPathReason::MalformedIndex),
        ];
        for (input, expected) in cases {
            let err = normalize(input).unwrap_err();
            assert_eq!(err.invalid_path_reason(), Some(expected), "input: {input}");
        }
    }

    #[test]
    fn test_normalize_destination_rejects_index() {
        let err = normalize_path("/foo[2]/bar", PathRole::Destination).unwrap_err();
        assert_eq!(
            err.invalid_path_reason(),
            Some(InvalidPathReason::IndexNotAllowed)
        );

        // Checked when pushed, even if a later `..` pops it again
        assert!(normalize_path("/foo[2]/../bar", PathRole::Destination).is_err());
        assert_eq!(
            normalize_path("/foo[2]/../bar", PathRole::Lookup).unwrap(),
            "/bar"
        );
    }

    #[test]
    fn test_absolutize_scenarios() {
        let cases = [
            ("/../foo", "/", "/foo"),
            ("../", "/", "/"),
            ("../foo/bar", "/baz", "/foo/bar"),
            ("foo/./bar", "/baz", "/baz/foo/bar"),
        ];
        for (path, context, expected) in cases {
            assert_eq!(absolutize_path(path, context).unwrap(), expected);
        }
    }

    #[test]
    fn test_absolutize_absolute_ignores_context() {
        assert_eq!(absolutize_path("/a/b", "/x/y").unwrap(), "/a/b");
        assert_eq!(absolutize_path("/a/b", "not a context").unwrap(), "/a/b");
    }

    #[test]
    fn test_absolutize_root_context() {
        assert_eq!(absolutize_path("foo", "/").unwrap(), "/foo");
    }

    #[test]
    fn test_absolutize_empty_relative() {
        assert_eq!(absolutize_path("", "/baz").unwrap(), "/baz");
    }

    #[test]
    fn test_absolutize_invalid_context() {
        let err = absolutize_path("foo", "baz").unwrap_err();
        assert_eq!(
            err.invalid_path_reason(),
            Some(InvalidPathReason::NotAbsolute)
        );
        assert!(absolutize_path("foo", "").is_err());
        assert!(absolutize_path("foo", "/baz/").is_err());
    }

    #[test]
    fn test_absolutize_invalid_relative() {
        assert!(absolutize_path("foo//bar", "/baz").is_err());
        assert!(absolutize_path("foo/", "/baz").is_err());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn segment_strategy() -> impl Strategy<Value = String> {
            prop_oneof![
                "[a-z0-9_-]{1,8}",
                "[a-z]{1,4}:[a-z]{1,6}",
                "[a-z]{1,6}\\[[1-9][0-9]{0,2}\\]",
            ]
        }

        fn path_with_dots_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec(
                prop_oneof![
                    Just(".".to_string()),
                    Just("..".to_string()),
                    segment_strategy(),
                ],
                1..=8,
            )
            .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        proptest! {
            /// Normalization is idempotent
            #[test]
            fn normalize_idempotent(s in path_with_dots_strategy()) {
                let once = normalize(&s).unwrap();
                let twice = normalize(&once).unwrap();
                prop_assert_eq!(once, twice);
            }

            /// Normalized paths never contain navigation segments
            #[test]
            fn normalize_no_navigation(s in path_with_dots_strategy()) {
                let normalized = normalize(&s).unwrap();
                prop_assert!(normalized.split('/').all(|seg| seg != "." && seg != ".."));
                prop_assert!(!normalized.contains("//"));
            }

            /// Normalized paths pass strict validation
            #[test]
            fn normalize_result_is_valid(s in path_with_dots_strategy()) {
                let normalized = normalize(&s).unwrap();
                prop_assert!(crate::path::is_valid_absolute_path(&normalized, PathRole::Lookup));
            }
        }
    }
}
