//! SQLite access for gapscan.
//!
//! Everything that touches a database lives here:
//!
//! - [`source`] - opening databases and reading identifier columns
//! - [`introspect`] - discovering tables and candidate identifier columns
//! - [`script`] - executing `.sql` files against a database
//! - [`seed`] - building the demonstration schema
//!
//! The gap computation itself never sees a connection; [`Database::read_ids`]
//! hands it a plain `Vec<i64>` after validating the column at the boundary.

pub mod introspect;
pub mod script;
pub mod seed;
pub mod source;

pub use introspect::{candidate_columns, list_tables, table_columns, CandidateColumn, ColumnInfo};
pub use script::{run_sql_dir, run_sql_file, sql_files_in_dir};
pub use seed::{seed, SeedSummary};
pub use source::{validate_identifier, Database};
