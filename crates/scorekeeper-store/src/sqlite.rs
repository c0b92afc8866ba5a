//! SQLite store.
//!
//! Each score type lives in its own table:
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS <score_type> (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     name TEXT NOT NULL,
//!     value REAL NOT NULL
//! )
//! ```
//!
//! Score type names are spliced into SQL as table names, so only plain
//! identifiers are accepted.

use std::path::Path;

use rusqlite::{Connection, params, types::Value as SqlValue};
use scorekeeper_errors::StoreError;
use scorekeeper_score::{Score, ScoreFactory, ScoreValue};
use tracing::{debug, trace};

use crate::{ScoreGroups, ScoreStore, rebuild};

/// Stores scores in a SQLite database, one table per score type.
///
/// Every [`ScoreStore::store`] call runs in its own transaction. Tables are
/// not created implicitly; call [`SqliteStore::create_table`] for each score
/// type first.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Option<Connection>,
}

impl SqliteStore {
    /// Open (or create) a database file.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| StoreError::backend("open database", e))?;
        debug!(path = %path.display(), "opened sqlite store");
        Ok(Self::from_connection(conn))
    }

    /// Open a private in-memory database.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] if SQLite cannot allocate the database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::backend("open database", e))?;
        Ok(Self::from_connection(conn))
    }

    /// Wrap an existing connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn: Some(conn) }
    }

    /// Check if the store still has a connection.
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Create the table for `score_type` if it does not exist.
    ///
    /// # Errors
    ///
    /// [`StoreError::Uninitialized`] after [`SqliteStore::close`],
    /// [`StoreError::TableMissing`] or [`StoreError::InvalidTypeName`] for an
    /// unusable type name, [`StoreError::Backend`] if SQLite fails.
    pub fn create_table(&self, score_type: &str) -> Result<(), StoreError> {
        let conn = self.connection()?;
        let table = table_name(score_type)?;
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS \"{table}\" (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    value REAL NOT NULL
                )"
            ),
            [],
        )
        .map_err(|e| StoreError::backend("create table", e))?;
        debug!(score_type = table, "score table ready");
        Ok(())
    }

    /// Close the connection. Later operations fail with
    /// [`StoreError::Uninitialized`].
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] if SQLite refuses to close; the store keeps
    /// its connection in that case.
    pub fn close(&mut self) -> Result<(), StoreError> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };
        conn.close().map_err(|(conn, e)| {
            self.conn = Some(conn);
            StoreError::backend("close database", e)
        })
    }

    fn connection(&self) -> Result<&Connection, StoreError> {
        self.conn.as_ref().ok_or(StoreError::Uninitialized)
    }
}

fn table_name(score_type: &str) -> Result<&str, StoreError> {
    let mut chars = score_type.chars();
    let Some(first) = chars.next() else {
        return Err(StoreError::TableMissing);
    };
    let valid = (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(StoreError::invalid_type_name(score_type));
    }
    Ok(score_type)
}

fn to_sql(value: ScoreValue) -> SqlValue {
    match value {
        ScoreValue::Float(v) => SqlValue::Real(v),
        ScoreValue::Integer(v) => SqlValue::Integer(v),
    }
}

fn from_sql(value: SqlValue) -> Result<ScoreValue, StoreError> {
    match value {
        SqlValue::Real(v) => Ok(ScoreValue::Float(v)),
        SqlValue::Integer(v) => Ok(ScoreValue::Integer(v)),
        other => Err(StoreError::backend(
            "read score",
            format!("unexpected column type {:?}", other.data_type()),
        )),
    }
}

impl ScoreStore for SqliteStore {
    fn store(&mut self, score: Box<dyn Score>) -> Result<(), StoreError> {
        let conn = self.conn.as_mut().ok_or(StoreError::Uninitialized)?;
        let table = table_name(score.score_type())?;

        let tx = conn
            .transaction()
            .map_err(|e| StoreError::backend("begin transaction", e))?;
        tx.execute(
            &format!("INSERT INTO \"{table}\" (name, value) VALUES (?1, ?2)"),
            params![score.name(), to_sql(score.value())],
        )
        .map_err(|e| StoreError::backend("insert score", e))?;
        tx.commit()
            .map_err(|e| StoreError::backend("commit transaction", e))?;

        trace!(score_type = table, label = score.name(), "stored score");
        Ok(())
    }

    fn retrieve(&self, factory: &ScoreFactory, score_type: &str) -> Result<ScoreGroups, StoreError> {
        let conn = self.connection()?;
        let table = table_name(score_type)?;

        let mut stmt = conn
            .prepare(&format!("SELECT name, value FROM \"{table}\" ORDER BY id"))
            .map_err(|e| StoreError::backend("query scores", e))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, SqlValue>(1)?)))
            .map_err(|e| StoreError::backend("query scores", e))?;

        let mut groups = ScoreGroups::new();
        for row in rows {
            let (name, value) = row.map_err(|e| StoreError::backend("scan score", e))?;
            let score = rebuild(factory, score_type, &name, from_sql(value)?)?;
            groups.entry(name).or_default().push(score);
        }
        Ok(groups)
    }
}
