//! Dump command implementation.
//!
//! Prints a subtree either as an indented tree or as a JSON array of
//! entries.

use crate::error::CliError;
use crate::utils::{load_configuration, open_repository, GlobalOptions};
use arbor::config::OutputFormat as ConfiguredFormat;
use arbor::operations::{dump_tree, DumpEntry, DumpOptions};
use clap::{Args, ValueEnum};
use std::io::{self, Write};

/// Print a subtree.
#[derive(Args)]
pub struct DumpCommand {
    /// Start node (default: the root)
    #[arg(value_name = "PATH", default_value = "/")]
    pub path: String,

    /// Maximum depth below the start node
    #[arg(long, value_name = "N")]
    pub depth: Option<usize>,

    /// Include node properties
    #[arg(long)]
    pub props: bool,

    /// Output format (default: from configuration, else human)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

/// Output format for the dump command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented tree
    Human,
    /// JSON array of entries
    Json,
}

impl From<ConfiguredFormat> for OutputFormat {
    fn from(format: ConfiguredFormat) -> Self {
        match format {
            ConfiguredFormat::Human => OutputFormat::Human,
            ConfiguredFormat::Json => OutputFormat::Json,
        }
    }
}

impl DumpCommand {
    /// Execute the dump command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let format = self
            .format
            .or_else(|| config.output_format.map(OutputFormat::from))
            .unwrap_or(OutputFormat::Human);

        let mut repo = open_repository(global, &config)?;
        let session = repo.session(config.workspace_or_default())?;

        let options = DumpOptions::new(self.path)
            .with_max_depth(self.depth)
            .with_properties(self.props);
        let entries = dump_tree(&session, &options)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match format {
            OutputFormat::Human => write_tree(&mut out, &entries)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, &entries).map_err(io::Error::from)?;
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

/// The start node prints as its full path, descendants as names indented
/// two spaces per level. Properties follow their node as `@name = value`.
fn write_tree(out: &mut impl Write, entries: &[DumpEntry]) -> io::Result<()> {
    for entry in entries {
        let indent = "  ".repeat(entry.depth);
        if entry.depth == 0 {
            writeln!(out, "{}", entry.path)?;
        } else {
            writeln!(out, "{indent}{}", entry.name)?;
        }
        for (name, value) in &entry.properties {
            writeln!(out, "{indent}  @{name} = {value}")?;
        }
    }
    Ok(())
}
