//! Tree operations over a [`Session`](crate::session::Session).
//!
//! The destructive operations ([`remove_node`] and [`purge_workspace`]) ask
//! a [`Confirm`] port before mutating anything unless forced, and finish
//! with a single [`Session::save`](crate::session::Session::save).
//!
//! # Examples
//!
//! ```no_run
//! use arbor::operations::{remove_node, FixedAnswer, RemoveOptions, RemoveOutcome};
//! use arbor::{Repository, RepositoryConfig};
//!
//! let mut repo = Repository::open(RepositoryConfig::new("/tmp/arbor.db"))?;
//! let mut session = repo.session("default")?;
//! let options = RemoveOptions::new("/cms/drafts");
//! match remove_node(&mut session, &mut FixedAnswer(true), &options)? {
//!     RemoveOutcome::Removed(paths) => println!("removed {}", paths.len()),
//!     RemoveOutcome::Aborted => println!("aborted"),
//! }
//! # Ok::<(), arbor::Error>(())
//! ```

pub mod confirm;
pub mod dump;
pub mod purge;
pub mod remove;
pub mod touch;

pub use confirm::{Confirm, FixedAnswer};
pub use dump::{dump_tree, DumpEntry, DumpOptions};
pub use purge::{purge_workspace, PurgeOutcome, SystemItemPolicy, DEFAULT_SYSTEM_PREFIXES};
pub use remove::{remove_node, RemoveOptions, RemoveOutcome};
pub use touch::{touch_node, TouchOutcome};
