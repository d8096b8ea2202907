//! Repository configuration and file location.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ARBOR_DATA_DIR";

/// File name of the repository database inside the data directory.
pub const REPOSITORY_FILE_NAME: &str = "arbor.db";

/// Configuration for opening a [`Repository`](super::Repository).
///
/// # Examples
///
/// ```
/// use arbor::RepositoryConfig;
/// use std::time::Duration;
///
/// let config = RepositoryConfig::new("/tmp/arbor.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert!(config.auto_create);
/// ```
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// How long to wait on a locked database before giving up.
    pub busy_timeout: Duration,
    /// Create the file (and its directory) if missing.
    pub auto_create: bool,
    /// Open without write access.
    pub read_only: bool,
}

impl RepositoryConfig {
    /// Creates a configuration with a 5 second busy timeout, auto-create on.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_secs(5),
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets whether a missing repository is created.
    #[must_use]
    pub fn with_auto_create(mut self, auto_create: bool) -> Self {
        self.auto_create = auto_create;
        self
    }

    /// Opens read-only. Disables auto-create.
    ///
    /// ```
    /// use arbor::RepositoryConfig;
    ///
    /// let config = RepositoryConfig::new("/tmp/arbor.db").read_only();
    /// assert!(config.read_only);
    /// assert!(!config.auto_create);
    /// ```
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// The default data directory, `~/.arbor`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".arbor"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// The repository file location.
///
/// `$ARBOR_DATA_DIR/arbor.db` if the variable is set, otherwise
/// `~/.arbor/arbor.db`.
///
/// # Errors
///
/// Returns an error if the variable is unset and the home directory cannot
/// be determined.
pub fn resolve_repository_path() -> Result<PathBuf> {
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir).join(REPOSITORY_FILE_NAME)),
        _ => Ok(default_data_dir()?.join(REPOSITORY_FILE_NAME)),
    }
}
