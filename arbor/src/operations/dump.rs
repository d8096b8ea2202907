//! Read-only tree listing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::{absolutize_path, node_name};
use crate::session::Session;

/// Options for [`dump_tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    /// Where to start. Relative paths resolve against `/`.
    pub path: String,
    /// Deepest level to include, relative to the start node (0 is the start node only).
    pub max_depth: Option<usize>,
    /// Whether to read node properties.
    pub include_properties: bool,
}

impl DumpOptions {
    /// Dump the whole subtree at `path`, without properties.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            max_depth: None,
            include_properties: false,
        }
    }

    /// Limit the walk depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Include properties in each entry.
    #[must_use]
    pub const fn with_properties(mut self, include_properties: bool) -> Self {
        self.include_properties = include_properties;
        self
    }
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self::new("/")
    }
}

/// One node in a dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DumpEntry {
    /// Absolute node path.
    pub path: String,
    /// Depth below the start node.
    pub depth: usize,
    /// Node name, `""` for the root.
    pub name: String,
    /// Properties by name; empty unless requested.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

/// Walk the tree below a node in document order.
///
/// Each node comes before its children, and siblings come in the order the
/// session returns them.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] for a malformed start path and
/// [`Error::ItemNotFound`] if there is no node there.
pub fn dump_tree<S>(session: &S, options: &DumpOptions) -> Result<Vec<DumpEntry>>
where
    S: Session + ?Sized,
{
    let start = absolutize_path(&options.path, "/")?;
    if !session.node_exists(&start)? {
        return Err(Error::ItemNotFound { path: start });
    }

    let mut entries = Vec::new();
    let mut stack = vec![(start, 0usize)];

    while let Some((path, depth)) = stack.pop() {
        let properties = if options.include_properties {
            session.properties(&path)?.into_iter().collect()
        } else {
            BTreeMap::new()
        };

        if options.max_depth.map_or(true, |max| depth < max) {
            let children = session.child_nodes(&path)?;
            stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
        }

        entries.push(DumpEntry {
            name: node_name(&path).to_string(),
            path,
            depth,
            properties,
        });
    }

    Ok(entries)
}
