#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # arbor
//!
//! Node paths and tree maintenance for hierarchical content repositories.
//!
//! Nodes live in a tree per workspace and are addressed by absolute paths
//! such as `/cms/jcr:content/item[2]`. This library validates, normalizes,
//! absolutizes and decomposes such paths, and runs the destructive tree
//! operations (subtree removal and workspace purge) over a [`Session`].
//!
//! ## Core Types
//!
//! - [`path`]: the path grammar, free functions and [`PathRole`]
//! - [`Session`] and [`Confirm`]: the ports tree operations run against
//! - [`Repository`] and [`SqliteSession`]: `SQLite` storage
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use arbor::path::{absolutize_path, normalize_path, parent_path, PathRole};
//!
//! assert_eq!(normalize_path("/foo/../bar", PathRole::Lookup).unwrap(), "/bar");
//! assert_eq!(absolutize_path("../foo/bar", "/baz").unwrap(), "/foo/bar");
//! assert_eq!(parent_path("/foo/bar"), "/foo");
//! assert!(normalize_path("/foo[2]", PathRole::Destination).is_err());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod path;
pub mod repository;
pub mod session;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, InvalidPathReason, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    dump_tree, purge_workspace, remove_node, touch_node, Confirm, DumpEntry, DumpOptions,
    FixedAnswer, PurgeOutcome, RemoveOptions, RemoveOutcome, SystemItemPolicy, TouchOutcome,
};
pub use path::{PathRelationship, PathRole};
pub use repository::{Repository, RepositoryConfig, SqliteSession};
pub use session::Session;
