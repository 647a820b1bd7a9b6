//! Exec command implementation.
//!
//! The `gapscan exec` command runs `.sql` files against the database,
//! replacing the shell habit of piping numbered lab files into `sqlite3`.

use std::path::PathBuf;

use crate::cli::args::ExecArgs;
use crate::db::{run_sql_file, sql_files_in_dir, Database};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The exec command implementation.
pub struct ExecCommand {
    context: CommandContext,
    args: ExecArgs,
}

impl ExecCommand {
    /// Create a new exec command.
    pub fn new(context: CommandContext, args: ExecArgs) -> Self {
        Self { context, args }
    }

    /// The files that would run, in execution order.
    fn files_to_run(&self) -> Result<Vec<PathBuf>> {
        if self.args.path.is_dir() {
            sql_files_in_dir(&self.args.path)
        } else {
            Ok(vec![self.args.path.clone()])
        }
    }
}

impl Command for ExecCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.args.path.exists() {
            ui.error(&format!("no such path: {}", self.args.path.display()));
            return Ok(CommandResult::failure(2));
        }

        let files = self.files_to_run()?;
        if files.is_empty() {
            ui.warning(&format!(
                "no .sql files in {}",
                self.args.path.display()
            ));
            return Ok(CommandResult::success());
        }

        if self.args.dry_run {
            for file in &files {
                ui.result(&file.display().to_string());
            }
            return Ok(CommandResult::success());
        }

        let (config, config_source) = self.context.load_config()?;
        let db_path = self.context.database_path(&config, config_source.as_deref())?;
        let db = Database::open(&db_path)?;

        for file in &files {
            run_sql_file(&db, file)?;
            ui.detail(&format!("applied {}", file.display()));
        }

        ui.success(&format!(
            "applied {} file{} to {}",
            files.len(),
            if files.len() == 1 { "" } else { "s" },
            db_path.display()
        ));

        Ok(CommandResult::success())
    }
}
