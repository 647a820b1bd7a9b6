//! Database handles and validated identifier-column reads.
//!
//! [`Database`] wraps a rusqlite [`Connection`]. The one non-obvious piece is
//! [`Database::read_ids`]: table and column names cannot be bound as SQL
//! parameters, so they are validated against a strict identifier pattern and
//! then quoted before interpolation. Values are checked row by row so a
//! mistyped column (TEXT affinity, NULLs) fails fast with a precise error
//! instead of producing a garbage scan.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use rusqlite::types::ValueRef;
use rusqlite::Connection;

use crate::error::{GapscanError, Result};

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Check that a name is usable as a SQL identifier.
///
/// gapscan only ever interpolates identifiers that pass this gate; everything
/// else is bound as a parameter.
pub fn validate_identifier(name: &str) -> Result<()> {
    if IDENTIFIER.is_match(name) {
        Ok(())
    } else {
        Err(GapscanError::InvalidIdentifier {
            name: name.to_string(),
            message: "identifiers must start with a letter or underscore and may contain \
                      only letters, digits, and underscores"
                .to_string(),
        })
    }
}

/// An open SQLite database.
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open (or create) a database file.
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!("opening database at {}", path.display());
        let conn = Connection::open(path)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a transient in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn, path: None })
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The underlying connection, for the sibling db modules.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Read the full contents of an integer identifier column.
    ///
    /// Fails fast when the table or column does not exist, when a value is
    /// NULL, or when a value is not representable as a 64-bit integer.
    /// Duplicate values are returned as stored; the gap scan treats the
    /// result as a set.
    pub fn read_ids(&self, table: &str, column: &str) -> Result<Vec<i64>> {
        validate_identifier(table)?;
        validate_identifier(column)?;

        if !super::introspect::column_exists(self, table, column)? {
            return Err(GapscanError::MissingColumn {
                table: table.to_string(),
                column: column.to_string(),
            });
        }

        let sql = format!("SELECT \"{column}\" FROM \"{table}\"");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;

        let mut ids = Vec::new();
        let mut row_number: u64 = 0;
        while let Some(row) = rows.next()? {
            row_number += 1;
            match row.get_ref(0)? {
                ValueRef::Integer(id) => ids.push(id),
                ValueRef::Null => {
                    return Err(GapscanError::NonIntegerValue {
                        table: table.to_string(),
                        column: column.to_string(),
                        detail: format!("row {row_number} is NULL"),
                    });
                }
                other => {
                    return Err(GapscanError::NonIntegerValue {
                        table: table.to_string(),
                        column: column.to_string(),
                        detail: format!("row {row_number} has {} value", type_name(&other)),
                    });
                }
            }
        }

        tracing::debug!("read {} ids from {table}.{column}", ids.len());
        Ok(ids)
    }
}

fn type_name(value: &ValueRef) -> &'static str {
    match value {
        ValueRef::Null => "NULL",
        ValueRef::Integer(_) => "INTEGER",
        ValueRef::Real(_) => "REAL",
        ValueRef::Text(_) => "TEXT",
        ValueRef::Blob(_) => "BLOB",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.connection()
            .execute_batch(
                r#"
                CREATE TABLE orders (id INTEGER PRIMARY KEY, item TEXT NOT NULL);
                INSERT INTO orders (id, item) VALUES
                    (1, 'tea'), (2, 'coffee'), (4, 'juice'), (5, 'water'), (7, 'milk');
                "#,
            )
            .unwrap();
        db
    }

    #[test]
    fn validate_identifier_accepts_plain_names() {
        assert!(validate_identifier("users").is_ok());
        assert!(validate_identifier("order_items").is_ok());
        assert!(validate_identifier("_internal").is_ok());
        assert!(validate_identifier("t2").is_ok());
    }

    #[test]
    fn validate_identifier_rejects_injection_attempts() {
        assert!(validate_identifier("users; DROP TABLE users").is_err());
        assert!(validate_identifier("users\"").is_err());
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("2fast").is_err());
        assert!(validate_identifier("na me").is_err());
    }

    #[test]
    fn read_ids_returns_column_values() {
        let db = demo_db();
        let ids = db.read_ids("orders", "id").unwrap();
        assert_eq!(ids, vec![1, 2, 4, 5, 7]);
    }

    #[test]
    fn read_ids_missing_table_fails_fast() {
        let db = demo_db();
        let err = db.read_ids("shipments", "id").unwrap_err();
        assert!(matches!(err, GapscanError::MissingColumn { .. }));
    }

    #[test]
    fn read_ids_missing_column_fails_fast() {
        let db = demo_db();
        let err = db.read_ids("orders", "order_id").unwrap_err();
        assert!(matches!(err, GapscanError::MissingColumn { .. }));
    }

    #[test]
    fn read_ids_rejects_null_values() {
        let db = demo_db();
        db.connection()
            .execute_batch(
                "CREATE TABLE sparse (id INTEGER);
                 INSERT INTO sparse (id) VALUES (1), (NULL), (3);",
            )
            .unwrap();
        let err = db.read_ids("sparse", "id").unwrap_err();
        match err {
            GapscanError::NonIntegerValue { detail, .. } => {
                assert!(detail.contains("row 2"));
                assert!(detail.contains("NULL"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn read_ids_rejects_text_values() {
        let db = demo_db();
        // No type declaration, so SQLite happily stores TEXT.
        db.connection()
            .execute_batch(
                "CREATE TABLE messy (id);
                 INSERT INTO messy (id) VALUES (1), ('two');",
            )
            .unwrap();
        let err = db.read_ids("messy", "id").unwrap_err();
        match err {
            GapscanError::NonIntegerValue { detail, .. } => {
                assert!(detail.contains("TEXT"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn read_ids_empty_table_yields_empty_vec() {
        let db = demo_db();
        db.connection()
            .execute_batch("CREATE TABLE empty (id INTEGER PRIMARY KEY);")
            .unwrap();
        assert!(db.read_ids("empty", "id").unwrap().is_empty());
    }

    #[test]
    fn read_ids_rejects_bad_identifiers_before_touching_db() {
        let db = demo_db();
        assert!(matches!(
            db.read_ids("orders; --", "id").unwrap_err(),
            GapscanError::InvalidIdentifier { .. }
        ));
        assert!(matches!(
            db.read_ids("orders", "id\"").unwrap_err(),
            GapscanError::InvalidIdentifier { .. }
        ));
    }

    #[test]
    fn open_creates_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lab.db");
        let db = Database::open(&path).unwrap();
        assert_eq!(db.path(), Some(path.as_path()));
        db.connection()
            .execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY);")
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn in_memory_database_has_no_path() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.path().is_none());
    }
}
