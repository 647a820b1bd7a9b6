//! Schema introspection: tables and candidate identifier columns.
//!
//! Backed by `sqlite_master` and `PRAGMA table_info`. A "candidate" column is
//! one worth offering to `gapscan check`: declared INTEGER and either the
//! table's primary key or NOT NULL.

use rusqlite::OptionalExtension;
use serde::Serialize;

use crate::error::Result;

use super::source::{validate_identifier, Database};

/// One column as reported by `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    /// Declared type, as written in the DDL (may be empty).
    pub decl_type: String,
    pub not_null: bool,
    /// Position in the primary key (0 when not part of it).
    pub pk: u32,
}

impl ColumnInfo {
    /// True when the declared type has INTEGER affinity by name.
    pub fn is_integer(&self) -> bool {
        self.decl_type.to_ascii_uppercase().contains("INT")
    }
}

/// A (table, column) pair suitable as a `check` target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateColumn {
    pub table: String,
    pub column: String,
    pub primary_key: bool,
}

/// List user tables in name order, skipping SQLite's internal tables.
pub fn list_tables(db: &Database) -> Result<Vec<String>> {
    let mut stmt = db.connection().prepare(
        "SELECT name FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
         ORDER BY name",
    )?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names)
}

/// Columns of one table, in declaration order.
pub fn table_columns(db: &Database, table: &str) -> Result<Vec<ColumnInfo>> {
    validate_identifier(table)?;
    let sql = format!("PRAGMA table_info(\"{table}\")");
    let mut stmt = db.connection().prepare(&sql)?;
    let columns = stmt
        .query_map([], |row| {
            Ok(ColumnInfo {
                name: row.get(1)?,
                decl_type: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                not_null: row.get::<_, i64>(3)? != 0,
                pk: row.get::<_, i64>(5)? as u32,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}

/// Whether `table.column` exists.
pub fn column_exists(db: &Database, table: &str, column: &str) -> Result<bool> {
    validate_identifier(table)?;
    validate_identifier(column)?;

    let table_exists: Option<String> = db
        .connection()
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )
        .optional()?;
    if table_exists.is_none() {
        return Ok(false);
    }

    Ok(table_columns(db, table)?.iter().any(|c| c.name == column))
}

/// Integer identifier columns worth scanning, across every user table.
///
/// Primary-key candidates come first within each table so `tables` output
/// leads with the conventional target.
pub fn candidate_columns(db: &Database) -> Result<Vec<CandidateColumn>> {
    let mut candidates = Vec::new();
    for table in list_tables(db)? {
        let columns = table_columns(db, &table)?;
        let mut table_candidates: Vec<CandidateColumn> = columns
            .iter()
            .filter(|c| c.is_integer() && (c.pk > 0 || c.not_null))
            .map(|c| CandidateColumn {
                table: table.clone(),
                column: c.name.clone(),
                primary_key: c.pk > 0,
            })
            .collect();
        table_candidates.sort_by_key(|c| !c.primary_key);
        candidates.extend(table_candidates);
    }
    Ok(candidates)
}
