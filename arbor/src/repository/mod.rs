//! `SQLite` storage for node trees.
//!
//! A [`Repository`] is one database file holding any number of workspaces.
//! A [`SqliteSession`] works on one workspace and implements
//! [`Session`](crate::session::Session), so the tree operations run
//! against it directly.
//!
//! # Examples
//!
//! ```no_run
//! use arbor::repository::{Repository, RepositoryConfig};
//! use arbor::Session;
//!
//! let mut repo = Repository::open(RepositoryConfig::new("/tmp/arbor.db")).unwrap();
//! let mut session = repo.session("default").unwrap();
//! session.add_node("/cms").unwrap();
//! session.set_property("/cms", "title", "Content").unwrap();
//! session.save().unwrap();
//!
//! for child in session.child_nodes("/").unwrap() {
//!     println!("{child}");
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod schema;
mod session;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_repository_path, RepositoryConfig, DATA_DIR_ENV,
    REPOSITORY_FILE_NAME,
};
pub use connection::{validate_workspace_name, Repository};
pub use session::SqliteSession;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
