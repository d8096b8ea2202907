//! Node creation and property assignment.

use crate::error::{Error, Result};
use crate::path::grammar::validate_property_name;
use crate::path::{normalize_path, parent_path, PathRole};
use crate::session::Session;

/// Whether [`touch_node`] created the node or found it in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// The node did not exist and was added.
    Created,
    /// The node already existed; only properties changed.
    Updated,
}

/// Ensure a node exists at `path` and set `properties` on it.
///
/// The path is normalized as a destination, so it may contain `.` and `..`
/// but no index. The parent must already exist. Property names must be
/// valid destination segments. The session is saved once at the end.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] for a bad path or property name, and
/// [`Error::ItemNotFound`] if the parent node is missing.
pub fn touch_node<S>(
    session: &mut S,
    path: &str,
    properties: &[(String, String)],
) -> Result<TouchOutcome>
where
    S: Session + ?Sized,
{
    let path = normalize_path(path, PathRole::Destination)?;

    for (name, _) in properties {
        validate_property_name(name)?;
    }

    let outcome = if session.node_exists(&path)? {
        TouchOutcome::Updated
    } else {
        let parent = parent_path(&path);
        if !session.node_exists(parent)? {
            return Err(Error::ItemNotFound {
                path: parent.to_string(),
            });
        }
        session.add_node(&path)?;
        TouchOutcome::Created
    };

    for (name, value) in properties {
        session.set_property(&path, name, value)?;
    }

    session.save()?;
    log::debug!("touched {path} ({outcome:?})");
    Ok(outcome)
}
