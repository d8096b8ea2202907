//! Purge command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_repository, GlobalOptions, StdinConfirm};
use arbor::operations::{purge_workspace, PurgeOutcome};
use clap::Args;

/// Remove all non-system content from the workspace.
#[derive(Args)]
pub struct PurgeCommand {
    /// Do not ask for confirmation
    #[arg(long, short = 'f')]
    pub force: bool,
}

impl PurgeCommand {
    /// Execute the purge command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let policy = config.system_item_policy();

        let mut repo = open_repository(global, &config)?;
        let mut session = repo.session(config.workspace_or_default())?;

        let outcome =
            purge_workspace(&mut session, &mut StdinConfirm::stdin(), self.force, &policy)?;

        match outcome {
            PurgeOutcome::Aborted => Err(CliError::Aborted),
            PurgeOutcome::Purged { nodes, properties } => {
                if global.verbose {
                    for path in nodes.iter().chain(&properties) {
                        eprintln!("Removed {path}");
                    }
                }
                if !global.quiet {
                    eprintln!(
                        "Purged {} node(s) and {} propert{} from workspace \"{}\"",
                        nodes.len(),
                        properties.len(),
                        if properties.len() == 1 { "y" } else { "ies" },
                        config.workspace_or_default()
                    );
                }
                Ok(())
            }
        }
    }
}
