//! Error types for the arbor library.
//!
//! This module provides the error hierarchy for all operations in the arbor
//! library, using `thiserror` for ergonomic error handling.

use std::fmt;

use thiserror::Error;

/// Result type alias for operations that may fail with an arbor error.
///
/// # Examples
///
/// ```
/// use arbor::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the arbor library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path or local name violates the path grammar.
    #[error("invalid path \"{path}\": {reason}")]
    InvalidPath {
        /// The offending path or name, verbatim.
        path: String,
        /// The grammar rule that was violated.
        reason: InvalidPathReason,
    },

    /// A path was expected to lie within a context path but does not.
    #[error("path \"{path}\" is not within \"{context}\"")]
    UnrelatedPath {
        /// The path that was checked.
        path: String,
        /// The context it was expected to be under.
        context: String,
    },

    /// Attempted to remove the root node.
    #[error(
        "cannot delete root node (path \"/\"), use the purge command to purge the whole workspace"
    )]
    RootRemoval,

    /// No node or property exists at the given path.
    #[error("item not found: {path}")]
    ItemNotFound {
        /// The path that was looked up.
        path: String,
    },

    /// A node already exists at the given path.
    #[error("item already exists: {path}")]
    ItemExists {
        /// The path of the existing node.
        path: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

/// The grammar rule a path violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidPathReason {
    /// The path is the empty string.
    Empty,
    /// The path does not start with `/`.
    NotAbsolute,
    /// The path contains `//`.
    EmptySegment,
    /// A non-root path ends with `/`.
    TrailingSlash,
    /// A `.` or `..` segment where navigation is not allowed.
    ReservedSegment,
    /// An index suffix on a path that denotes a write target.
    IndexNotAllowed,
    /// A `[...]` suffix that is not a positive integer.
    MalformedIndex,
    /// An index larger than `u32::MAX`.
    IndexOutOfRange,
    /// A segment name that is empty or contains `[` or `]`.
    InvalidName,
    /// A local name containing `/`.
    SlashInName,
}

impl fmt::Display for InvalidPathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "path is empty"),
            Self::NotAbsolute => write!(f, "not an absolute path"),
            Self::EmptySegment => write!(f, "empty segment (\"//\")"),
            Self::TrailingSlash => write!(f, "trailing slash"),
            Self::ReservedSegment => write!(f, "reserved segment \".\" or \"..\""),
            Self::IndexNotAllowed => write!(f, "index not allowed on a destination path"),
            Self::MalformedIndex => write!(f, "index must be a positive integer"),
            Self::IndexOutOfRange => write!(f, "index exceeds {}", u32::MAX),
            Self::InvalidName => write!(f, "invalid segment name"),
            Self::SlashInName => write!(f, "local name contains \"/\""),
        }
    }
}

impl Error {
    /// Shorthand for building an [`Error::InvalidPath`].
    pub(crate) fn invalid_path(path: &str, reason: InvalidPathReason) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
            reason,
        }
    }

    /// Returns the grammar rule if this is an [`Error::InvalidPath`].
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::path::{validate_absolute_path, PathRole};
    /// use arbor::InvalidPathReason;
    ///
    /// let err = validate_absolute_path("parent", PathRole::Lookup).unwrap_err();
    /// assert_eq!(err.invalid_path_reason(), Some(InvalidPathReason::NotAbsolute));
    /// ```
    #[must_use]
    pub fn invalid_path_reason(&self) -> Option<InvalidPathReason> {
        match self {
            Self::InvalidPath { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// Check if error indicates an item does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::Error;
    ///
    /// let err = Error::ItemNotFound { path: "/missing".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound { .. })
    }
}
