//! Repository connection management.

use std::time::Duration;

use rusqlite::{Connection, ErrorCode, OpenFlags};

use crate::error::{Error, Result};
use crate::path::{join_path, validate_absolute_path, PathRole};

use super::config::RepositoryConfig;
use super::session::SqliteSession;

/// A content repository stored in one `SQLite` file.
///
/// The file holds any number of workspaces. Work on a workspace goes
/// through a [`SqliteSession`] obtained from [`Repository::session`].
///
/// # Examples
///
/// ```no_run
/// use arbor::{Repository, RepositoryConfig, Session};
///
/// let mut repo = Repository::open(RepositoryConfig::new("/tmp/arbor.db"))?;
/// let mut session = repo.session("default")?;
/// session.add_node("/cms")?;
/// session.save()?;
/// # Ok::<(), arbor::Error>(())
/// ```
#[derive(Debug)]
pub struct Repository {
    conn: Connection,
    config: RepositoryConfig,
}

impl Repository {
    /// Opens (and if needed creates) a repository.
    ///
    /// Sets WAL journaling and the busy timeout, then initializes or checks
    /// the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or created, the
    /// database is locked past the busy timeout, or the schema version is
    /// not supported.
    pub fn open(config: RepositoryConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;
        conn.busy_timeout(config.busy_timeout)?;

        // PRAGMA journal_mode returns a row
        let journal_mode: String = conn
            .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
            .map_err(|e| map_busy(e, config.busy_timeout))?;
        log::debug!(
            "opened repository {} (journal_mode={journal_mode})",
            config.path.display()
        );
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;

        super::migrations::check_schema_compatibility(&conn)
            .map_err(|e| match e {
                Error::Database(inner) => map_busy(inner, config.busy_timeout),
                other => other,
            })?;

        Ok(Self { conn, config })
    }

    /// The configuration this repository was opened with.
    #[must_use]
    pub const fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// The underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Starts a session on `workspace`.
    ///
    /// Workspaces need no creation; an unused name is an empty workspace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the name is not a plain node name
    /// (non-empty, no `/`, no index).
    pub fn session(&mut self, workspace: &str) -> Result<SqliteSession<'_>> {
        validate_workspace_name(workspace)?;
        Ok(SqliteSession::new(
            &self.conn,
            workspace,
            self.config.busy_timeout,
        ))
    }

    /// Names of workspaces holding at least one node or property.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn workspaces(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT workspace FROM nodes UNION SELECT workspace FROM properties ORDER BY 1",
        )?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }
}

/// Checks that `name` can name a workspace.
///
/// # Errors
///
/// Returns [`Error::Validation`] describing the problem.
pub fn validate_workspace_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('/') {
        return Err(Error::Validation {
            field: "workspace".into(),
            message: format!("\"{name}\" is not a valid workspace name"),
        });
    }
    validate_absolute_path(&join_path("/", name), PathRole::Destination).map_err(|e| {
        Error::Validation {
            field: "workspace".into(),
            message: e.to_string(),
        }
    })
}

/// Turns `SQLITE_BUSY` into [`Error::LockTimeout`].
pub(crate) fn map_busy(err: rusqlite::Error, timeout: Duration) -> Error {
    match err.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) => Error::LockTimeout {
            seconds: timeout.as_secs(),
        },
        _ => Error::Database(err),
    }
}
