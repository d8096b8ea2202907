//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::repository::validate_workspace_name;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use arbor::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::with_defaults()).unwrap();
///
/// let bad = Config { workspace: Some("a/b".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate every set field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref workspace) = config.workspace {
            validate_workspace_name(workspace)?;
        }

        if config.maximum_lock_wait_seconds == Some(0) {
            return Err(Error::Validation {
                field: "maximum_lock_wait_seconds".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        if let Some(ref prefixes) = config.system_prefixes {
            for prefix in prefixes {
                Self::validate_prefix(prefix)?;
            }
        }

        Ok(())
    }

    /// A prefix is a non-empty run of characters that may precede `:` in a
    /// node name.
    fn validate_prefix(prefix: &str) -> Result<()> {
        let invalid = |message: &str| Error::Validation {
            field: "system_prefixes".into(),
            message: format!("\"{prefix}\": {message}"),
        };

        if prefix.is_empty() {
            return Err(invalid("Cannot be empty"));
        }
        if let Some(c) = prefix
            .chars()
            .find(|c| matches!(c, ':' | '/' | '[' | ']') || c.is_whitespace())
        {
            return Err(invalid(&format!("Cannot contain {c:?}")));
        }
        Ok(())
    }
}
