//! Subtree removal.
//!
//! Removes a node (or property) with everything beneath it, or only the
//! immediate children of a node. The root can never be removed here; a
//! whole-workspace wipe goes through [`purge_workspace`](super::purge_workspace).

use crate::error::{Error, Result};
use crate::operations::confirm::Confirm;
use crate::path::absolutize_path;
use crate::session::Session;

/// Options for a remove operation.
///
/// # Examples
///
/// ```
/// use arbor::operations::RemoveOptions;
///
/// let options = RemoveOptions::new("/cms/content/blog")
///     .with_only_children(true)
///     .with_force(true);
/// assert!(options.only_children);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Path of the item to remove, relative paths resolve against `/`.
    pub path: String,
    /// Remove the children of the node instead of the node itself.
    pub only_children: bool,
    /// Skip the confirmation question.
    pub force: bool,
}

impl RemoveOptions {
    /// Creates options that remove `path` itself after confirmation.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            only_children: false,
            force: false,
        }
    }

    /// Sets whether only the children are removed.
    #[must_use]
    pub fn with_only_children(mut self, only_children: bool) -> Self {
        self.only_children = only_children;
        self
    }

    /// Sets whether confirmation is skipped.
    #[must_use]
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// What a remove operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The user declined; nothing was touched.
    Aborted,
    /// These item paths were removed and the session saved.
    Removed(Vec<String>),
}

/// Remove a subtree, or the children of a node.
///
/// The path is normalized first. `/` is rejected before any question is
/// asked. Unless `force` is set, `confirm` must agree before anything is
/// removed. The session is saved once after all removals; the first
/// failing removal aborts the operation unsaved.
///
/// # Errors
///
/// Returns [`Error::RootRemoval`] for `/`, [`Error::InvalidPath`] for a
/// malformed path, and any session error unchanged.
pub fn remove_node<S, C>(
    session: &mut S,
    confirm: &mut C,
    options: &RemoveOptions,
) -> Result<RemoveOutcome>
where
    S: Session + ?Sized,
    C: Confirm + ?Sized,
{
    if options.path == "/" {
        return Err(Error::RootRemoval);
    }
    let path = absolutize_path(&options.path, "/")?;
    if path == "/" {
        return Err(Error::RootRemoval);
    }

    if !options.force {
        let workspace = session.workspace_name();
        let question = if options.only_children {
            format!(
                "Are you sure you want to recursively delete the children of path \"{path}\" from workspace \"{workspace}\"?"
            )
        } else {
            format!(
                "Are you sure you want to recursively delete the path \"{path}\" from workspace \"{workspace}\"?"
            )
        };
        if !confirm.confirm(&question)? {
            return Ok(RemoveOutcome::Aborted);
        }
    }

    let removed = if options.only_children {
        let children = session.child_nodes(&path)?;
        for child in &children {
            log::debug!("removing {child}");
            session.remove_item(child)?;
        }
        children
    } else {
        log::debug!("removing {path}");
        session.remove_item(&path)?;
        vec![path]
    };

    session.save()?;
    Ok(RemoveOutcome::Removed(removed))
}
