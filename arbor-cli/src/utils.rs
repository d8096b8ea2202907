//! Utility functions for CLI operations.
//!
//! Configuration loading, repository access and the interactive
//! confirmation prompt shared by the commands.

use crate::error::CliError;
use arbor::config::Config;
use arbor::operations::Confirm;
use arbor::repository::{default_data_dir, validate_workspace_name, REPOSITORY_FILE_NAME};
use arbor::{ConfigBuilder, Repository, RepositoryConfig};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Workspace to operate on.
    pub workspace: Option<String>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic repository creation.
    pub disable_autoinit: bool,
}

/// Resolve the data directory: `--data-dir` if given, otherwise `~/.arbor`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => default_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    if let Some(ref workspace) = global.workspace {
        validate_workspace_name(workspace)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
    }

    let overrides = Config {
        workspace: global.workspace.clone(),
        maximum_lock_wait_seconds: global.busy_timeout.map(u64::from),
        disable_autoinit: global.disable_autoinit.then_some(true),
        ..Config::default()
    };

    let data_dir = resolve_data_dir(global)?;
    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the repository described by the global options and configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the repository doesn't exist and auto-init
/// is disabled.
pub fn open_repository(global: &GlobalOptions, config: &Config) -> Result<Repository, CliError> {
    let path = resolve_data_dir(global)?.join(REPOSITORY_FILE_NAME);
    let autoinit_disabled = config.disable_autoinit.unwrap_or(false);

    if !path.exists() && autoinit_disabled {
        return Err(CliError::NoDataDirectory);
    }

    if global.verbose {
        eprintln!("Using repository {}", shorten_path(&path));
    }

    let repo_config = RepositoryConfig::new(path).with_busy_timeout(config.lock_wait());
    Repository::open(repo_config).map_err(CliError::from)
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

/// Parse a `NAME=VALUE` argument.
pub fn parse_property(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{arg}'")),
    }
}

/// Asks on stderr and reads the answer from stdin.
///
/// Only `y` or `yes` (any case) agree. End of input counts as no.
pub struct StdinConfirm<R> {
    input: R,
}

impl StdinConfirm<io::StdinLock<'static>> {
    /// Prompt against the process's stdin.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> StdinConfirm<R> {
    /// Prompt against any line source.
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Confirm for StdinConfirm<R> {
    fn confirm(&mut self, question: &str) -> arbor::Result<bool> {
        let mut stderr = io::stderr();
        write!(stderr, "{question} [y/N] ")?;
        stderr.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            writeln!(stderr)?;
            return Ok(false);
        }

        let answer = answer.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}
