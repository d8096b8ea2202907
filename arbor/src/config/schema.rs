//! Configuration schema definitions.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::operations::{SystemItemPolicy, DEFAULT_SYSTEM_PREFIXES};

/// Workspace used when none is configured.
pub const DEFAULT_WORKSPACE: &str = "default";

/// Lock wait used when none is configured.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; see
/// [`ConfigMerger`](crate::config::ConfigMerger).
///
/// # Examples
///
/// ```
/// use arbor::config::Config;
///
/// let config: Config = serde_yaml::from_str("workspace: live\n").unwrap();
/// assert_eq!(config.workspace_or_default(), "live");
/// assert_eq!(Config::default().workspace_or_default(), "default");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Workspace that commands operate on.
    pub workspace: Option<String>,

    /// Maximum time to wait for the repository write lock (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Refuse to create a missing repository.
    pub disable_autoinit: Option<bool>,

    /// Namespace prefixes that a purge never removes.
    pub system_prefixes: Option<Vec<String>>,

    /// Output format for the dump command.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The built-in defaults, the lowest layer of every merged configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            workspace: Some(DEFAULT_WORKSPACE.to_string()),
            maximum_lock_wait_seconds: Some(DEFAULT_LOCK_WAIT_SECONDS),
            disable_autoinit: Some(false),
            system_prefixes: Some(
                DEFAULT_SYSTEM_PREFIXES
                    .iter()
                    .map(|p| (*p).to_string())
                    .collect(),
            ),
            output_format: Some(OutputFormat::Human),
        }
    }

    /// The configured workspace, or `default`.
    #[must_use]
    pub fn workspace_or_default(&self) -> &str {
        self.workspace.as_deref().unwrap_or(DEFAULT_WORKSPACE)
    }

    /// The configured lock wait.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// The purge policy built from `system_prefixes`.
    ///
    /// ```
    /// use arbor::config::Config;
    ///
    /// let config = Config {
    ///     system_prefixes: Some(vec!["sys".to_string()]),
    ///     ..Default::default()
    /// };
    /// assert!(config.system_item_policy().is_system_item("sys:cfg"));
    /// assert!(Config::default().system_item_policy().is_system_item("jcr:system"));
    /// ```
    #[must_use]
    pub fn system_item_policy(&self) -> SystemItemPolicy {
        self.system_prefixes
            .as_ref()
            .map_or_else(SystemItemPolicy::default, |prefixes| {
                SystemItemPolicy::new(prefixes.iter().cloned())
            })
    }
}

/// Output format for listings.
///
/// ```
/// use arbor::config::OutputFormat;
///
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// assert_eq!("human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented tree for people.
    #[default]
    Human,
    /// One JSON array of entries.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s} (expected human or json)")),
        }
    }
}
