//! Remove command implementation.
//!
//! This module implements the `remove` command, which deletes a node with
//! its whole subtree, a single property, or only the children of a node.

use crate::error::CliError;
use crate::utils::{load_configuration, open_repository, GlobalOptions, StdinConfirm};
use arbor::operations::{remove_node, RemoveOptions, RemoveOutcome};
use arbor::path::absolutize_path;
use clap::Args;

/// Remove a node subtree or a property.
#[derive(Args)]
pub struct RemoveCommand {
    /// Path of the node or property (relative paths resolve against `/`)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Remove the children of the node but keep the node itself
    #[arg(long)]
    pub only_children: bool,

    /// Do not ask for confirmation
    #[arg(long, short = 'f')]
    pub force: bool,
}

impl RemoveCommand {
    /// Execute the remove command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Reject the root before touching configuration or the repository
        if absolutize_path(&self.path, "/")? == "/" {
            return Err(CliError::from(arbor::Error::RootRemoval));
        }

        // 2. Load configuration
        let config = load_configuration(global)?;

        // 3. Open repository and workspace session
        let mut repo = open_repository(global, &config)?;
        let mut session = repo.session(config.workspace_or_default())?;

        // 4. Remove, asking first unless forced
        let options = RemoveOptions::new(self.path)
            .with_only_children(self.only_children)
            .with_force(self.force);
        let outcome = remove_node(&mut session, &mut StdinConfirm::stdin(), &options)?;

        match outcome {
            RemoveOutcome::Aborted => Err(CliError::Aborted),
            RemoveOutcome::Removed(paths) => {
                if !global.quiet {
                    if paths.is_empty() {
                        eprintln!("Nothing to remove");
                    }
                    for path in &paths {
                        eprintln!("Removed {path}");
                    }
                }
                Ok(())
            }
        }
    }
}
