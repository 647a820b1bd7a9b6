//! Configuration data structures.
//!
//! The YAML surface is deliberately small:
//!
//! ```yaml
//! database: lab.db
//! max_range: 1000000
//! checks:
//!   orders:
//!     table: orders
//!     column: id
//!     label: Order IDs
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Widest id range `check` will walk without refusing (10 million).
pub const DEFAULT_MAX_RANGE: u64 = 10_000_000;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default database path, relative to the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// Override for the range-width ceiling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_range: Option<u64>,

    /// Named checks, keyed by check name. BTreeMap keeps listing order
    /// stable across runs.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub checks: BTreeMap<String, CheckSpec>,
}

/// One named (table, column) pair to audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckSpec {
    /// Table to read.
    pub table: String,

    /// Integer identifier column to read.
    #[serde(default = "default_column")]
    pub column: String,

    /// Human-readable label for reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn default_column() -> String {
    "id".to_string()
}

impl Config {
    /// Effective range ceiling.
    pub fn max_range(&self) -> u64 {
        self.max_range.unwrap_or(DEFAULT_MAX_RANGE)
    }
}

impl CheckSpec {
    /// Label to show in reports, falling back to `table.column`.
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("{}.{}", self.table, self.column))
    }
}
