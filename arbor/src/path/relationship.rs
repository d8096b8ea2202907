//! Path relationship checking.
//!
//! This module determines how two valid absolute node paths relate in the
//! tree. Comparison works on whole segments, so `/a` is not an ancestor of
//! `/ab`.

use crate::error::{Error, Result};

/// Relationship between two node paths.
///
/// # Examples
///
/// ```
/// use arbor::path::PathRelationship;
///
/// assert_eq!(
///     PathRelationship::between("/cms", "/cms/content"),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::path::PathRelationship;
    ///
    /// assert_eq!(PathRelationship::between("/a", "/a/b"), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between("/a/b", "/a"), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between("/a", "/a"), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between("/a", "/ab"), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &str, path2: &str) -> Self {
        if path1 == path2 {
            Self::Same
        } else if is_strict_ancestor(path1, path2) {
            Self::Ancestor
        } else if is_strict_ancestor(path2, path1) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if `path` is `node` or lies beneath it.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::path::PathRelationship;
    ///
    /// assert!(PathRelationship::is_within("/cms/content", "/cms"));
    /// assert!(PathRelationship::is_within("/cms", "/cms"));
    /// assert!(!PathRelationship::is_within("/cms", "/cms/content"));
    /// ```
    #[must_use]
    pub fn is_within(path: &str, node: &str) -> bool {
        matches!(Self::between(path, node), Self::Descendant | Self::Same)
    }

    /// Check if `path` is `other` or one of its ancestors.
    #[must_use]
    pub fn contains(path: &str, other: &str) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Ancestor => "is an ancestor of",
            Self::Descendant => "is a descendant of",
            Self::Same => "is the same as",
            Self::Unrelated => "is unrelated to",
        }
    }
}

fn is_strict_ancestor(ancestor: &str, descendant: &str) -> bool {
    if ancestor == "/" {
        return descendant.len() > 1 && descendant.starts_with('/');
    }
    descendant
        .strip_prefix(ancestor)
        .is_some_and(|rest| rest.len() > 1 && rest.starts_with('/'))
}

/// Express `path` relative to `context`.
///
/// # Errors
///
/// Returns [`Error::UnrelatedPath`] if `path` is not `context` or beneath it.
///
/// # Examples
///
/// ```
/// use arbor::path::relativize_path;
///
/// assert_eq!(relativize_path("/a/b/c", "/a").unwrap(), "b/c");
/// assert_eq!(relativize_path("/a/b", "/").unwrap(), "a/b");
/// assert_eq!(relativize_path("/a", "/a").unwrap(), "");
/// assert!(relativize_path("/b", "/a").is_err());
/// ```
pub fn relativize_path(path: &str, context: &str) -> Result<String> {
    match PathRelationship::between(path, context) {
        PathRelationship::Same => Ok(String::new()),
        PathRelationship::Descendant => {
            let skip = if context == "/" { 1 } else { context.len() + 1 };
            Ok(path[skip..].to_string())
        }
        PathRelationship::Ancestor | PathRelationship::Unrelated => Err(Error::UnrelatedPath {
            path: path.to_string(),
            context: context.to_string(),
        }),
    }
}
