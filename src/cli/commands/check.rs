//! Check command implementation.
//!
//! The `gapscan check` command scans identifier columns for missing
//! sequential ids. Exit code 0 means every scanned column was dense,
//! 1 means at least one gap was found, 2 means the command could not run.

use crate::cli::args::CheckArgs;
use crate::config::Config;
use crate::db::Database;
use crate::error::{GapscanError, Result};
use crate::gaps::{range_width, GapReport};
use crate::report::{
    render_json, render_json_all, render_table, render_text, CheckReport, ReportFormat,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// One (table, column) pair queued for scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Target {
    table: String,
    column: String,
    label: String,
}

/// The check command implementation.
pub struct CheckCommand {
    context: CommandContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: CommandContext, args: CheckArgs) -> Self {
        Self { context, args }
    }

    /// Resolve what to scan from flags and config.
    fn targets(&self, config: &Config) -> Result<Vec<Target>> {
        if self.args.all {
            if config.checks.is_empty() {
                return Err(GapscanError::ConfigValidationError {
                    message: "--all given but no checks are configured".to_string(),
                });
            }
            return Ok(config
                .checks
                .values()
                .map(|check| Target {
                    table: check.table.clone(),
                    column: check.column.clone(),
                    label: check.display_label(),
                })
                .collect());
        }

        if let Some(table) = &self.args.table {
            let column = self.args.column.clone().unwrap_or_else(|| "id".to_string());
            return Ok(vec![Target {
                label: format!("{}.{}", table, column),
                table: table.clone(),
                column,
            }]);
        }

        if let Some(name) = &self.args.name {
            let check = config
                .checks
                .get(name)
                .ok_or_else(|| GapscanError::UnknownCheck { name: name.clone() })?;
            let column = self
                .args
                .column
                .clone()
                .unwrap_or_else(|| check.column.clone());
            return Ok(vec![Target {
                table: check.table.clone(),
                label: check.display_label(),
                column,
            }]);
        }

        Err(GapscanError::ConfigValidationError {
            message: "nothing to check (give a table with --table, a configured check name, \
                      or --all)"
                .to_string(),
        })
    }

    /// Read one column and scan it, refusing ranges wider than `limit`.
    fn scan(&self, db: &Database, target: &Target, limit: u64) -> Result<CheckReport> {
        let ids = db.read_ids(&target.table, &target.column)?;

        if let (Some(&lo), Some(&hi)) = (ids.iter().min(), ids.iter().max()) {
            let width = range_width(lo, hi);
            if width > limit {
                return Err(GapscanError::RangeTooWide {
                    table: target.table.clone(),
                    column: target.column.clone(),
                    width,
                    limit,
                });
            }
        }

        Ok(CheckReport::new(
            &target.table,
            &target.column,
            &target.label,
            GapReport::scan(&ids),
        ))
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let format: ReportFormat = match self.args.format.parse() {
            Ok(format) => format,
            Err(message) => {
                ui.error(&message);
                return Ok(CommandResult::failure(2));
            }
        };

        let (config, config_source) = self.context.load_config()?;
        let targets = self.targets(&config)?;
        let db_path = self.context.database_path(&config, config_source.as_deref())?;
        if !db_path.exists() {
            ui.error(&format!("database not found: {}", db_path.display()));
            return Ok(CommandResult::failure(2));
        }
        let db = Database::open(&db_path)?;

        let limit = self.args.max_range.unwrap_or_else(|| config.max_range());
        let mut reports = Vec::with_capacity(targets.len());
        for target in &targets {
            reports.push(self.scan(&db, target, limit)?);
        }

        match format {
            ReportFormat::Text => {
                for check in &reports {
                    ui.message(&check.summary());
                    if !check.report.is_dense() {
                        ui.result(&render_text(check));
                    }
                }
            }
            ReportFormat::Table => {
                ui.result(&render_table(&reports));
            }
            ReportFormat::Json => {
                let json = if self.args.all {
                    render_json_all(&reports)?
                } else {
                    render_json(&reports[0])?
                };
                ui.result(&json);
            }
        }

        let gaps_found = reports.iter().any(|check| !check.report.is_dense());
        if gaps_found {
            Ok(CommandResult::failure(1))
        } else {
            ui.success("no gaps found");
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;
    use crate::ui::MockUI;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn seeded_database(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("lab.db");
        let db = Database::open(&path).unwrap();
        seed(&db).unwrap();
        path
    }

    fn context_for(db_path: &std::path::Path) -> CommandContext {
        CommandContext {
            working_dir: db_path.parent().unwrap().to_path_buf(),
            config_override: None,
            database_override: Some(db_path.to_path_buf()),
        }
    }

    #[test]
    fn check_finds_the_demo_gaps() {
        let temp = TempDir::new().unwrap();
        let db_path = seeded_database(&temp);

        let args = CheckArgs {
            table: Some("orders".to_string()),
            ..CheckArgs::default()
        };
        let cmd = CheckCommand::new(context_for(&db_path), args);

        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.result_text(), "3\n6");
    }

    #[test]
    fn check_dense_column_exits_zero() {
        let temp = TempDir::new().unwrap();
        let db_path = seeded_database(&temp);

        let args = CheckArgs {
            table: Some("users".to_string()),
            ..CheckArgs::default()
        };
        let cmd = CheckCommand::new(context_for(&db_path), args);

        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(ui.result_text().is_empty());
        assert_eq!(ui.successes(), ["no gaps found"]);
    }

    #[test]
    fn check_json_output_parses() {
        let temp = TempDir::new().unwrap();
        let db_path = seeded_database(&temp);

        let args = CheckArgs {
            table: Some("orders".to_string()),
            format: "json".to_string(),
            ..CheckArgs::default()
        };
        let cmd = CheckCommand::new(context_for(&db_path), args);

        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.result_text()).unwrap();
        assert_eq!(value["table"], "orders");
        assert_eq!(value["missing"], serde_json::json!([3, 6]));
    }

    #[test]
    fn check_table_format_renders_rows() {
        let temp = TempDir::new().unwrap();
        let db_path = seeded_database(&temp);

        let args = CheckArgs {
            table: Some("orders".to_string()),
            format: "table".to_string(),
            ..CheckArgs::default()
        };
        let cmd = CheckCommand::new(context_for(&db_path), args);

        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        let text = ui.result_text();
        assert!(text.contains("orders"));
        assert!(text.contains("3, 6"));
    }

    #[test]
    fn check_unknown_format_is_usage_error() {
        let temp = TempDir::new().unwrap();
        let db_path = seeded_database(&temp);

        let args = CheckArgs {
            table: Some("orders".to_string()),
            format: "yaml".to_string(),
            ..CheckArgs::default()
        };
        let cmd = CheckCommand::new(context_for(&db_path), args);

        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 2);
        assert!(!ui.errors().is_empty());
    }

    #[test]
    fn check_missing_database_is_usage_error() {
        let temp = TempDir::new().unwrap();
        let context = CommandContext {
            working_dir: temp.path().to_path_buf(),
            config_override: None,
            database_override: Some(temp.path().join("absent.db")),
        };
        let args = CheckArgs {
            table: Some("orders".to_string()),
            ..CheckArgs::default()
        };
        let cmd = CheckCommand::new(context, args);

        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn check_without_target_reports_usage_error() {
        let temp = TempDir::new().unwrap();
        let db_path = seeded_database(&temp);
        let cmd = CheckCommand::new(context_for(&db_path), CheckArgs::default());

        let mut ui = MockUI::new();
        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, GapscanError::ConfigValidationError { .. }));
    }

    #[test]
    fn check_named_check_reads_config() {
        let temp = TempDir::new().unwrap();
        let db_path = seeded_database(&temp);
        std::fs::write(
            temp.path().join("gapscan.yml"),
            "checks:\n  orders:\n    table: orders\n    label: Order IDs\n",
        )
        .unwrap();

        let args = CheckArgs {
            name: Some("orders".to_string()),
            ..CheckArgs::default()
        };
        let cmd = CheckCommand::new(context_for(&db_path), args);

        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.messages().iter().any(|m| m.contains("Order IDs")));
    }

    #[test]
    fn check_unknown_name_errors() {
        let temp = TempDir::new().unwrap();
        let db_path = seeded_database(&temp);

        let args = CheckArgs {
            name: Some("shipments".to_string()),
            ..CheckArgs::default()
        };
        let cmd = CheckCommand::new(context_for(&db_path), args);

        let mut ui = MockUI::new();
        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, GapscanError::UnknownCheck { .. }));
    }

    #[test]
    fn check_all_scans_every_configured_check() {
        let temp = TempDir::new().unwrap();
        let db_path = seeded_database(&temp);
        std::fs::write(
            temp.path().join("gapscan.yml"),
            "checks:\n  orders:\n    table: orders\n  users:\n    table: users\n",
        )
        .unwrap();

        let args = CheckArgs {
            all: true,
            format: "json".to_string(),
            ..CheckArgs::default()
        };
        let cmd = CheckCommand::new(context_for(&db_path), args);

        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        let value: serde_json::Value = serde_json::from_str(&ui.result_text()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn check_range_ceiling_is_enforced() {
        let temp = TempDir::new().unwrap();
        let db_path = seeded_database(&temp);

        let args = CheckArgs {
            table: Some("orders".to_string()),
            max_range: Some(3),
            ..CheckArgs::default()
        };
        let cmd = CheckCommand::new(context_for(&db_path), args);

        let mut ui = MockUI::new();
        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(
            err,
            GapscanError::RangeTooWide {
                width: 7,
                limit: 3,
                ..
            }
        ));
    }
}
