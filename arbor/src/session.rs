//! The repository session port.
//!
//! Tree operations are written against this trait rather than a concrete
//! store. [`SqliteSession`](crate::repository::SqliteSession) is the
//! production implementation.
//!
//! Mutations are not visible to other sessions until [`Session::save`]
//! succeeds. An item path is either a node path or a property path, the
//! latter being the owning node's path joined with the property name.

use crate::error::Result;

/// A view of one workspace, with buffered mutations.
#[cfg_attr(test, mockall::automock)]
pub trait Session {
    /// The name of the workspace this session is bound to.
    fn workspace_name(&self) -> String;

    /// Whether a node exists at `path`. The root always exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn node_exists(&self, path: &str) -> Result<bool>;

    /// Paths of the immediate child nodes of `path`, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ItemNotFound`](crate::Error::ItemNotFound) if there is
    /// no node at `path`.
    fn child_nodes(&self, path: &str) -> Result<Vec<String>>;

    /// Name/value pairs of the properties of the node at `path`, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ItemNotFound`](crate::Error::ItemNotFound) if there is
    /// no node at `path`.
    fn properties(&self, path: &str) -> Result<Vec<(String, String)>>;

    /// Create a node at `path`. The parent must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid destination, the node
    /// exists, or the parent is missing.
    fn add_node(&mut self, path: &str) -> Result<()>;

    /// Set a property on the node at `path`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is missing or the name is invalid.
    fn set_property(&mut self, path: &str, name: &str, value: &str) -> Result<()>;

    /// Remove the node (with its whole subtree) or property at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ItemNotFound`](crate::Error::ItemNotFound) if nothing
    /// exists at `path` and [`Error::RootRemoval`](crate::Error::RootRemoval)
    /// for `/`.
    fn remove_item(&mut self, path: &str) -> Result<()>;

    /// Remove the property `name` of the node at `path`, never a node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ItemNotFound`](crate::Error::ItemNotFound) if the node
    /// has no such property.
    fn remove_property(&mut self, path: &str, name: &str) -> Result<()>;

    /// Persist all pending mutations.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot commit.
    fn save(&mut self) -> Result<()>;
}
