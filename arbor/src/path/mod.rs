//! Node path grammar and canonicalization.
//!
//! Node paths address items in a repository workspace. This module is pure:
//! every function maps strings to strings (or a failure) with no I/O and no
//! shared state.
//!
//! # Key Concepts
//!
//! ## Validation
//!
//! [`validate_absolute_path`] checks the strict grammar: `/`, or `/`-joined
//! segments with no empty, `.` or `..` segments and no trailing slash. A
//! segment is a local name (optionally `prefix:name`) with an optional
//! positive index, e.g. `child[2]`. [`PathRole::Destination`] forbids
//! indices. [`validate_local_name`] checks a single name.
//!
//! ## Normalization
//!
//! [`normalize_path`] resolves `.` and `..`; a `..` at the root is a no-op.
//! [`absolutize_path`] resolves a relative path against a context path.
//!
//! ## Decomposition
//!
//! [`parent_path`], [`node_name`] and [`path_depth`] read structure out of
//! already-valid paths without re-validating them.
//!
//! # Examples
//!
//! ```
//! use arbor::path::{absolutize_path, node_name, parent_path, PathRole};
//!
//! let path = absolutize_path("../blog/./post", "/cms/content").unwrap();
//! assert_eq!(path, "/cms/blog/post");
//! assert_eq!(parent_path(&path), "/cms/blog");
//! assert_eq!(node_name(&path), "post");
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use arbor::path::PathRelationship;
//!
//! let rel = PathRelationship::between("/cms", "/cms/content");
//! assert_eq!(rel, PathRelationship::Ancestor);
//! ```

pub mod decompose;
pub mod grammar;
pub mod normalize;
pub mod relationship;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use decompose::{join_path, local_node_name, node_name, parent_path, path_depth};
pub use grammar::{
    is_valid_absolute_path, validate_absolute_path, validate_local_name, PathRole, Segment,
};
pub use normalize::{absolutize_path, normalize_path};
pub use relationship::{relativize_path, PathRelationship};
