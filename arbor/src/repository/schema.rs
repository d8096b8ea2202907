//! SQL table definitions and statements.
//!
//! The root node is never stored; every workspace has one implicitly.
//! Node paths are canonical absolute paths without index suffixes.

/// Current schema version, kept in the metadata table.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// One row per non-root node. `parent` is the parent's path, `/` for
/// children of the root.
pub const CREATE_NODES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS nodes (
        workspace TEXT NOT NULL,
        path TEXT NOT NULL,
        parent TEXT NOT NULL,
        name TEXT NOT NULL,
        PRIMARY KEY (workspace, path)
    )";

pub const CREATE_PROPERTIES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS properties (
        workspace TEXT NOT NULL,
        node_path TEXT NOT NULL,
        name TEXT NOT NULL,
        value TEXT NOT NULL,
        PRIMARY KEY (workspace, node_path, name)
    )";

pub const CREATE_PARENT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_nodes_parent ON nodes(workspace, parent)";

pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

pub const SELECT_NODE_EXISTS: &str =
    "SELECT 1 FROM nodes WHERE workspace = ?1 AND path = ?2";

pub const SELECT_CHILD_NODES: &str =
    "SELECT path FROM nodes WHERE workspace = ?1 AND parent = ?2 ORDER BY name";

pub const SELECT_PROPERTIES: &str =
    "SELECT name, value FROM properties WHERE workspace = ?1 AND node_path = ?2 ORDER BY name";

pub const SELECT_PROPERTY_EXISTS: &str =
    "SELECT 1 FROM properties WHERE workspace = ?1 AND node_path = ?2 AND name = ?3";

pub const INSERT_NODE: &str =
    "INSERT INTO nodes (workspace, path, parent, name) VALUES (?1, ?2, ?3, ?4)";

pub const UPSERT_PROPERTY: &str = r"
    INSERT OR REPLACE INTO properties (workspace, node_path, name, value)
    VALUES (?1, ?2, ?3, ?4)
";

pub const DELETE_PROPERTY: &str =
    "DELETE FROM properties WHERE workspace = ?1 AND node_path = ?2 AND name = ?3";

/// Deletes the node at `?2` and every node below it.
pub const DELETE_NODE_SUBTREE: &str = r"
    DELETE FROM nodes
    WHERE workspace = ?1
      AND (path = ?2 OR substr(path, 1, length(?2) + 1) = ?2 || '/')
";

/// Deletes the properties of the node at `?2` and of every node below it.
pub const DELETE_PROPERTY_SUBTREE: &str = r"
    DELETE FROM properties
    WHERE workspace = ?1
      AND (node_path = ?2 OR substr(node_path, 1, length(?2) + 1) = ?2 || '/')
";
