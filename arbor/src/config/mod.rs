//! Configuration system for arbor.
//!
//! Configuration is merged from several sources, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ARBOR_*`)
//! 3. Private project config (`arbor.local.yaml`)
//! 4. Project config (`arbor.yaml`, nearest directory at or above the
//!    working directory)
//! 5. User config (`~/.arbor/config.yaml`, or under `ARBOR_DATA_DIR`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use arbor::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! println!("workspace: {}", config.workspace_or_default());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, DEFAULT_LOCK_WAIT_SECONDS, DEFAULT_WORKSPACE};
pub use validator::ConfigValidator;
