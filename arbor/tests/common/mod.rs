//! Common test utilities for integration tests.

use arbor::{Repository, RepositoryConfig, Session, SqliteSession};

/// Creates a repository in a temporary location that outlives the test.
#[allow(dead_code)]
pub fn create_test_repository() -> Repository {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let repo = Repository::open(RepositoryConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    repo
}

/// Builds a tree from an outline and saves it.
///
/// Each entry is a node path, or `path@name=value` for a property. Parents
/// must come before their children.
#[allow(dead_code)]
pub fn build_tree(session: &mut SqliteSession<'_>, outline: &[&str]) {
    for entry in outline {
        match entry.split_once('@') {
            Some((node, property)) => {
                let (name, value) = property.split_once('=').unwrap();
                session.set_property(node, name, value).unwrap();
            }
            None => session.add_node(entry).unwrap(),
        }
    }
    session.save().unwrap();
}

/// A small site with system items at the root.
#[allow(dead_code)]
pub const SITE: &[&str] = &[
    "/jcr:system",
    "/jcr:system/nodeTypes",
    "/rep:security",
    "/cms",
    "/cms/content",
    "/cms/content/blog",
    "/cms/content/blog@title=Blog",
    "/cms/content/news",
    "/cms/drafts",
    "/assets",
    "/@jcr:primaryType=rep:root",
    "/@site=example",
];

/// Every node path in the workspace below the root, in document order.
#[allow(dead_code)]
pub fn all_nodes(session: &SqliteSession<'_>) -> Vec<String> {
    let mut out = Vec::new();
    let mut stack = vec!["/".to_string()];
    while let Some(path) = stack.pop() {
        let children = session.child_nodes(&path).unwrap();
        stack.extend(children.iter().rev().cloned());
        if path != "/" {
            out.push(path);
        }
    }
    out
}
