//! `ARBOR_*` environment variable overrides.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Environment variable naming the workspace.
pub const WORKSPACE_ENV: &str = "ARBOR_WORKSPACE";
/// Environment variable disabling repository creation.
pub const DISABLE_AUTOINIT_ENV: &str = "ARBOR_DISABLE_AUTOINIT";
/// Environment variable setting the lock wait in seconds.
pub const LOCK_WAIT_ENV: &str = "ARBOR_MAXIMUM_LOCK_WAIT_SECONDS";
/// Environment variable adding comma-separated system prefixes.
pub const SYSTEM_PREFIXES_ENV: &str = "ARBOR_SYSTEM_PREFIXES";
/// Environment variable choosing the output format.
pub const OUTPUT_FORMAT_ENV: &str = "ARBOR_OUTPUT_FORMAT";

/// Applies environment overrides on top of file configuration.
///
/// # Examples
///
/// ```no_run
/// use arbor::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply every set `ARBOR_*` variable to `config`.
    ///
    /// System prefixes accumulate onto those already configured; every other
    /// value replaces.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable if a value cannot
    /// be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(workspace) = env::var(WORKSPACE_ENV) {
            config.workspace = Some(workspace);
        }

        if let Ok(val) = env::var(DISABLE_AUTOINIT_ENV) {
            config.disable_autoinit = Some(Self::parse_bool(DISABLE_AUTOINIT_ENV, &val)?);
        }

        if let Ok(seconds) = env::var(LOCK_WAIT_ENV) {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: LOCK_WAIT_ENV.into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(prefixes) = env::var(SYSTEM_PREFIXES_ENV) {
            let parsed = Self::parse_list(&prefixes);
            match &mut config.system_prefixes {
                Some(existing) => {
                    for prefix in parsed {
                        if !existing.contains(&prefix) {
                            existing.push(prefix);
                        }
                    }
                }
                None => config.system_prefixes = Some(parsed),
            }
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format =
                Some(format.parse::<OutputFormat>().map_err(|message| {
                    Error::Validation {
                        field: OUTPUT_FORMAT_ENV.into(),
                        message,
                    }
                })?);
        }

        Ok(())
    }

    /// Accepts true/1/yes/on and false/0/no/off, case-insensitively.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    fn parse_list(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}
