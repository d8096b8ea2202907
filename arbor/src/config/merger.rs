//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration layers.
///
/// # Examples
///
/// ```
/// use arbor::config::{Config, ConfigMerger};
///
/// let low = Config { workspace: Some("low".to_string()), ..Default::default() };
/// let high = Config { workspace: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.workspace, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given lowest precedence first.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` over `target`.
    ///
    /// Scalar fields in `source` replace those in `target` when set.
    /// System prefixes accumulate, keeping first-seen order without
    /// duplicates, so no layer can unprotect a prefix a lower layer protects.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.workspace.is_some() {
            target.workspace.clone_from(&source.workspace);
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_prefixes) = source.system_prefixes {
            match &mut target.system_prefixes {
                Some(target_prefixes) => {
                    for prefix in source_prefixes {
                        if !target_prefixes.contains(prefix) {
                            target_prefixes.push(prefix.clone());
                        }
                    }
                }
                None => target.system_prefixes.clone_from(&source.system_prefixes),
            }
        }
    }
}
