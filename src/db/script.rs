//! Ordered execution of `.sql` script files.
//!
//! Reproduces the classic lab workflow of piping numbered SQL files into the
//! `sqlite3` shell: files run in lexical order, each as one batch, and the
//! first failure stops the run with the offending file named.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GapscanError, Result};

use super::source::Database;

/// Collect the `.sql` files directly inside `dir`, in lexical order.
pub fn sql_files_in_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Execute one `.sql` file as a single batch.
pub fn run_sql_file(db: &Database, path: &Path) -> Result<()> {
    let sql = fs::read_to_string(path)?;
    tracing::info!("executing {}", path.display());
    db.connection()
        .execute_batch(&sql)
        .map_err(|e| GapscanError::ScriptFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Execute every `.sql` file in `dir` in lexical order.
///
/// Returns the files applied so far when all succeed; stops at the first
/// failure. Files already applied stay applied, matching the shell-pipeline
/// behavior this replaces.
pub fn run_sql_dir(db: &Database, dir: &Path) -> Result<Vec<PathBuf>> {
    let files = sql_files_in_dir(dir)?;
    for file in &files {
        run_sql_file(db, file)?;
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_script(dir: &TempDir, name: &str, sql: &str) {
        fs::write(dir.path().join(name), sql).unwrap();
    }

    #[test]
    fn sql_files_sorted_lexically() {
        let dir = TempDir::new().unwrap();
        write_script(&dir, "02_data.sql", "");
        write_script(&dir, "01_schema.sql", "");
        write_script(&dir, "10_views.sql", "");
        write_script(&dir, "README.md", "not sql");

        let files = sql_files_in_dir(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["01_schema.sql", "02_data.sql", "10_views.sql"]);
    }

    #[test]
    fn run_sql_file_applies_batch() {
        let dir = TempDir::new().unwrap();
        write_script(
            &dir,
            "schema.sql",
            "CREATE TABLE t (id INTEGER PRIMARY KEY);
             INSERT INTO t (id) VALUES (1), (2);",
        );

        let db = Database::open_in_memory().unwrap();
        run_sql_file(&db, &dir.path().join("schema.sql")).unwrap();

        let count: i64 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM t", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn run_sql_file_failure_names_the_file() {
        let dir = TempDir::new().unwrap();
        write_script(&dir, "broken.sql", "INSERT INTO missing VALUES (1);");

        let db = Database::open_in_memory().unwrap();
        let err = run_sql_file(&db, &dir.path().join("broken.sql")).unwrap_err();
        match err {
            GapscanError::ScriptFailed { path, message } => {
                assert!(path.ends_with("broken.sql"));
                assert!(message.contains("missing"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn run_sql_dir_applies_in_order_and_stops_on_failure() {
        let dir = TempDir::new().unwrap();
        write_script(&dir, "01_schema.sql", "CREATE TABLE t (id INTEGER);");
        write_script(&dir, "02_data.sql", "INSERT INTO t VALUES (1);");
        write_script(&dir, "03_broken.sql", "INSERT INTO absent VALUES (1);");
        write_script(&dir, "04_more.sql", "INSERT INTO t VALUES (2);");

        let db = Database::open_in_memory().unwrap();
        let err = run_sql_dir(&db, dir.path()).unwrap_err();
        assert!(matches!(err, GapscanError::ScriptFailed { ref path, .. }
            if path.ends_with("03_broken.sql")));

        // Earlier files stay applied; the file after the failure never ran.
        let count: i64 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM t", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn run_sql_dir_empty_directory_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let db = Database::open_in_memory().unwrap();
        assert!(run_sql_dir(&db, dir.path()).unwrap().is_empty());
    }

    #[test]
    fn run_sql_dir_missing_directory_is_io_error() {
        let db = Database::open_in_memory().unwrap();
        let err = run_sql_dir(&db, Path::new("/nonexistent/labs")).unwrap_err();
        assert!(matches!(err, GapscanError::Io(_)));
    }
}
