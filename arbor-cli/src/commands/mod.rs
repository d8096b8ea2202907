//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `remove`: Remove a node subtree, a property, or a node's children
//! - `purge`: Remove all non-system content from a workspace
//! - `touch`: Create a node or set its properties
//! - `dump`: Print a subtree as an indented tree or JSON
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod dump;
pub mod purge;
pub mod remove;
pub mod touch;

pub use completions::CompletionsCommand;
pub use dump::DumpCommand;
pub use purge::PurgeCommand;
pub use remove::RemoveCommand;
pub use touch::TouchCommand;
