//! Touch command implementation.
//!
//! Creates a node below an existing parent, or sets properties on a node
//! that is already there.

use crate::error::CliError;
use crate::utils::{load_configuration, open_repository, parse_property, GlobalOptions};
use arbor::operations::{touch_node, TouchOutcome};
use arbor::path::{normalize_path, PathRole};
use clap::Args;

/// Create a node, or set properties on an existing one.
#[derive(Args)]
pub struct TouchCommand {
    /// Node path (relative paths resolve against `/`)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Property to set, may be repeated
    #[arg(long = "set-prop", value_name = "NAME=VALUE", value_parser = parse_property)]
    pub properties: Vec<(String, String)>,
}

impl TouchCommand {
    /// Execute the touch command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut repo = open_repository(global, &config)?;
        let mut session = repo.session(config.workspace_or_default())?;

        let path = if self.path.starts_with('/') {
            self.path
        } else {
            format!("/{}", self.path)
        };
        let outcome = touch_node(&mut session, &path, &self.properties)?;

        if !global.quiet {
            let path = normalize_path(&path, PathRole::Destination)?;
            match outcome {
                TouchOutcome::Created => eprintln!("Created {path}"),
                TouchOutcome::Updated => eprintln!("Updated {path}"),
            }
        }

        Ok(())
    }
}
