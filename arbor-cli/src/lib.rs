//! Library exports for arbor-cli.
//!
//! Exposes the CLI structure so tests and tooling can inspect the command
//! definitions without spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
