//! The `SQLite`-backed [`Session`].

use std::time::Duration;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::path::grammar::{strip_root, validate_property_name};
use crate::path::{join_path, node_name, parent_path, validate_absolute_path, PathRole, Segment};
use crate::session::Session;

use super::connection::map_busy;
use super::schema::{
    DELETE_NODE_SUBTREE, DELETE_PROPERTY, DELETE_PROPERTY_SUBTREE, INSERT_NODE,
    SELECT_CHILD_NODES, SELECT_NODE_EXISTS, SELECT_PROPERTIES, SELECT_PROPERTY_EXISTS,
    UPSERT_PROPERTY,
};

/// A session on one workspace of a [`Repository`](super::Repository).
///
/// The first mutation opens an immediate (write-locking) transaction.
/// [`Session::save`] commits it. Dropping the session without saving rolls
/// the mutations back.
///
/// When a path names both a node and a property, it refers to the node.
/// Lookup paths may carry indices: `[1]` addresses the only node of that
/// name, any higher index addresses nothing.
#[derive(Debug)]
pub struct SqliteSession<'a> {
    conn: &'a Connection,
    workspace: String,
    busy_timeout: Duration,
    in_transaction: bool,
}

impl<'a> SqliteSession<'a> {
    pub(super) fn new(conn: &'a Connection, workspace: &str, busy_timeout: Duration) -> Self {
        Self {
            conn,
            workspace: workspace.to_string(),
            busy_timeout,
            in_transaction: false,
        }
    }

    /// Whether there are unsaved mutations.
    #[must_use]
    pub const fn has_pending_changes(&self) -> bool {
        self.in_transaction
    }

    fn db_error(&self, err: rusqlite::Error) -> Error {
        map_busy(err, self.busy_timeout)
    }

    fn begin_write(&mut self) -> Result<()> {
        if !self.in_transaction {
            self.conn
                .execute_batch("BEGIN IMMEDIATE")
                .map_err(|e| self.db_error(e))?;
            self.in_transaction = true;
            log::debug!("began write transaction on workspace {}", self.workspace);
        }
        Ok(())
    }

    /// Map a lookup path to the path it is stored under, or `None` if an
    /// index rules out every stored item.
    fn stored_path(path: &str) -> Result<Option<String>> {
        validate_absolute_path(path, PathRole::Lookup)?;
        let mut stored = String::with_capacity(path.len());
        for raw in strip_root(path)?.split('/').filter(|s| !s.is_empty()) {
            let segment = Segment::parse(raw).map_err(|reason| Error::invalid_path(path, reason))?;
            if segment.index.is_some_and(|index| index > 1) {
                return Ok(None);
            }
            stored.push('/');
            stored.push_str(segment.name);
        }
        if stored.is_empty() {
            stored.push('/');
        }
        Ok(Some(stored))
    }

    fn stored_node_exists(&self, stored: &str) -> Result<bool> {
        if stored == "/" {
            return Ok(true);
        }
        let found = self
            .conn
            .query_row(SELECT_NODE_EXISTS, params![self.workspace, stored], |_| Ok(()))
            .optional()
            .map_err(|e| self.db_error(e))?;
        Ok(found.is_some())
    }

    /// Resolve `path` to an existing node's stored path.
    fn require_node(&self, path: &str) -> Result<String> {
        match Self::stored_path(path)? {
            Some(stored) if self.stored_node_exists(&stored)? => Ok(stored),
            _ => Err(Error::ItemNotFound {
                path: path.to_string(),
            }),
        }
    }

    fn property_exists(&self, node: &str, name: &str) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                SELECT_PROPERTY_EXISTS,
                params![self.workspace, node, name],
                |_| Ok(()),
            )
            .optional()
            .map_err(|e| self.db_error(e))?;
        Ok(found.is_some())
    }
}

impl Session for SqliteSession<'_> {
    fn workspace_name(&self) -> String {
        self.workspace.clone()
    }

    fn node_exists(&self, path: &str) -> Result<bool> {
        match Self::stored_path(path)? {
            Some(stored) => self.stored_node_exists(&stored),
            None => Ok(false),
        }
    }

    fn child_nodes(&self, path: &str) -> Result<Vec<String>> {
        let node = self.require_node(path)?;
        let mut stmt = self.conn.prepare_cached(SELECT_CHILD_NODES)?;
        let children = stmt
            .query_map(params![self.workspace, node], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()
            .map_err(|e| self.db_error(e))?;
        Ok(children)
    }

    fn properties(&self, path: &str) -> Result<Vec<(String, String)>> {
        let node = self.require_node(path)?;
        let mut stmt = self.conn.prepare_cached(SELECT_PROPERTIES)?;
        let properties = stmt
            .query_map(params![self.workspace, node], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?
            .collect::<rusqlite::Result<Vec<(String, String)>>>()
            .map_err(|e| self.db_error(e))?;
        Ok(properties)
    }

    fn add_node(&mut self, path: &str) -> Result<()> {
        validate_absolute_path(path, PathRole::Destination)?;
        if self.node_exists(path)? {
            return Err(Error::ItemExists {
                path: path.to_string(),
            });
        }
        let parent = parent_path(path);
        self.require_node(parent)?;

        self.begin_write()?;
        log::debug!("add node {path} in {}", self.workspace);
        self.conn
            .execute(
                INSERT_NODE,
                params![self.workspace, path, parent, node_name(path)],
            )
            .map_err(|e| self.db_error(e))?;
        Ok(())
    }

    fn set_property(&mut self, path: &str, name: &str, value: &str) -> Result<()> {
        validate_property_name(name)?;
        let node = self.require_node(path)?;

        self.begin_write()?;
        log::debug!("set property {name} on {node} in {}", self.workspace);
        self.conn
            .execute(UPSERT_PROPERTY, params![self.workspace, node, name, value])
            .map_err(|e| self.db_error(e))?;
        Ok(())
    }

    fn remove_item(&mut self, path: &str) -> Result<()> {
        let stored = Self::stored_path(path)?;
        if stored.as_deref() == Some("/") {
            return Err(Error::RootRemoval);
        }
        let Some(stored) = stored else {
            return Err(Error::ItemNotFound {
                path: path.to_string(),
            });
        };

        if self.stored_node_exists(&stored)? {
            self.begin_write()?;
            log::debug!("remove subtree {stored} in {}", self.workspace);
            self.conn
                .execute(DELETE_PROPERTY_SUBTREE, params![self.workspace, stored])
                .map_err(|e| self.db_error(e))?;
            self.conn
                .execute(DELETE_NODE_SUBTREE, params![self.workspace, stored])
                .map_err(|e| self.db_error(e))?;
            return Ok(());
        }

        let (node, name) = (parent_path(&stored), node_name(&stored));
        if self.property_exists(node, name)? {
            self.begin_write()?;
            log::debug!("remove property {stored} in {}", self.workspace);
            self.conn
                .execute(DELETE_PROPERTY, params![self.workspace, node, name])
                .map_err(|e| self.db_error(e))?;
            return Ok(());
        }

        Err(Error::ItemNotFound {
            path: path.to_string(),
        })
    }

    fn remove_property(&mut self, path: &str, name: &str) -> Result<()> {
        validate_property_name(name)?;
        let node = self.require_node(path)?;
        if !self.property_exists(&node, name)? {
            return Err(Error::ItemNotFound {
                path: join_path(path, name),
            });
        }

        self.begin_write()?;
        log::debug!("remove property {name} of {node} in {}", self.workspace);
        self.conn
            .execute(DELETE_PROPERTY, params![self.workspace, node, name])
            .map_err(|e| self.db_error(e))?;
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        if self.in_transaction {
            self.conn
                .execute_batch("COMMIT")
                .map_err(|e| self.db_error(e))?;
            self.in_transaction = false;
            log::debug!("committed workspace {}", self.workspace);
        }
        Ok(())
    }
}

impl Drop for SqliteSession<'_> {
    fn drop(&mut self) {
        if self.in_transaction {
            log::debug!("rolling back unsaved changes in {}", self.workspace);
            if let Err(e) = self.conn.execute_batch("ROLLBACK") {
                log::warn!("rollback failed for workspace {}: {e}", self.workspace);
            }
        }
    }
}
