//! Structural facts about valid absolute paths.
//!
//! These functions do not re-validate their input. Callers pass paths that
//! already satisfy [`validate_absolute_path`](crate::path::validate_absolute_path).

/// The path of the parent node.
///
/// The root is its own parent.
///
/// # Examples
///
/// ```
/// use arbor::path::parent_path;
///
/// assert_eq!(parent_path("/parent/child"), "/parent");
/// assert_eq!(parent_path("/jcr:parent/ns:child"), "/jcr:parent");
/// assert_eq!(parent_path("/parent"), "/");
/// assert_eq!(parent_path("/"), "/");
/// ```
#[must_use]
pub fn parent_path(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(idx) => &path[..idx],
    }
}

/// The name of the node, exactly as it appears in the final segment.
///
/// Namespace prefixes and index suffixes are kept. The root's name is `""`.
///
/// # Examples
///
/// ```
/// use arbor::path::node_name;
///
/// assert_eq!(node_name("/parent/child"), "child");
/// assert_eq!(node_name("/parent/ns:child"), "ns:child");
/// assert_eq!(node_name("/parent/child[2]"), "child[2]");
/// assert_eq!(node_name("/"), "");
/// ```
#[must_use]
pub fn node_name(path: &str) -> &str {
    path.rfind('/').map_or(path, |idx| &path[idx + 1..])
}

/// The node name with namespace prefix and index suffix removed.
///
/// # Examples
///
/// ```
/// use arbor::path::local_node_name;
///
/// assert_eq!(local_node_name("/parent/ns:child[2]"), "child");
/// assert_eq!(local_node_name("/parent/child"), "child");
/// assert_eq!(local_node_name("/"), "");
/// ```
#[must_use]
pub fn local_node_name(path: &str) -> &str {
    let name = node_name(path);
    let name = name.split_once('[').map_or(name, |(name, _)| name);
    match name.split_once(':') {
        Some((prefix, local)) if !prefix.is_empty() && !local.is_empty() => local,
        _ => name,
    }
}

/// The number of segments below the root.
///
/// One trailing slash is tolerated here, since counting segments does not
/// depend on it.
///
/// # Examples
///
/// ```
/// use arbor::path::path_depth;
///
/// assert_eq!(path_depth("/"), 0);
/// assert_eq!(path_depth("/foo"), 1);
/// assert_eq!(path_depth("/foo/bar"), 2);
/// assert_eq!(path_depth("/foo/bar/"), 2);
/// ```
#[must_use]
pub fn path_depth(path: &str) -> usize {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    trimmed.split('/').filter(|segment| !segment.is_empty()).count()
}

/// Append a child name to a node path.
///
/// # Examples
///
/// ```
/// use arbor::path::join_path;
///
/// assert_eq!(join_path("/", "a"), "/a");
/// assert_eq!(join_path("/a", "b"), "/a/b");
/// ```
#[must_use]
pub fn join_path(parent: &str, name: &str) -> String {
    if parent == "/" {
        format!("/{name}")
    } else {
        format!("{parent}/{name}")
    }
}
