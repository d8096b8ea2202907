//! Shared helpers for repository unit tests.

use tempfile::tempdir;

use crate::repository::{Repository, RepositoryConfig};
use crate::session::Session;

/// Creates a repository in a temporary directory that outlives the test.
///
/// # Panics
///
/// Panics if the directory or repository cannot be created.
#[must_use]
pub fn create_test_repository() -> Repository {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let repo = Repository::open(RepositoryConfig::new(path)).unwrap();

    // Keep the directory alive for the repository's lifetime
    std::mem::forget(dir);

    repo
}

/// Adds the given nodes in order. Parents must come before children.
///
/// # Panics
///
/// Panics if any node cannot be added.
pub fn seed(session: &mut impl Session, paths: &[&str]) {
    for path in paths {
        session.add_node(path).unwrap();
    }
}
