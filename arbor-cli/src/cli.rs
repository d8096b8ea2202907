//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, DumpCommand, PurgeCommand, RemoveCommand, TouchCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for maintaining hierarchical content repositories.
#[derive(Parser)]
#[command(name = "arbor")]
#[command(version, about = "Inspect and prune content repository trees", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "ARBOR_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Workspace to operate on
    #[arg(long, value_name = "NAME", global = true, env = "ARBOR_WORKSPACE")]
    pub workspace: Option<String>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "ARBOR_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Fail instead of creating a missing repository
    #[arg(long, global = true, env = "ARBOR_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Remove a node subtree or a property
    #[command(alias = "rm")]
    Remove(RemoveCommand),

    /// Remove all non-system content from the workspace
    Purge(PurgeCommand),

    /// Create a node, or set properties on an existing one
    Touch(TouchCommand),

    /// Print a subtree
    Dump(DumpCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
