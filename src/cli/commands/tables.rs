//! Tables command implementation.
//!
//! The `gapscan tables` command lists candidate integer identifier columns
//! so users can discover what `check` can target.

use crate::cli::args::TablesArgs;
use crate::db::{candidate_columns, Database};
use crate::error::{GapscanError, Result};
use crate::ui::{Align, Table, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The tables command implementation.
pub struct TablesCommand {
    context: CommandContext,
    args: TablesArgs,
}

impl TablesCommand {
    /// Create a new tables command.
    pub fn new(context: CommandContext, args: TablesArgs) -> Self {
        Self { context, args }
    }
}

impl Command for TablesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (config, config_source) = self.context.load_config()?;
        let db_path = self.context.database_path(&config, config_source.as_deref())?;
        if !db_path.exists() {
            ui.error(&format!("database not found: {}", db_path.display()));
            return Ok(CommandResult::failure(2));
        }
        let db = Database::open(&db_path)?;

        let candidates = candidate_columns(&db)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&candidates)
                .map_err(|e| GapscanError::Other(e.into()))?;
            ui.result(&json);
            return Ok(CommandResult::success());
        }

        if candidates.is_empty() {
            ui.message("no candidate identifier columns found");
            return Ok(CommandResult::success());
        }

        let mut table = Table::with_aligns(
            vec!["Table", "Column", "Key"],
            vec![Align::Left, Align::Left, Align::Left],
        );
        for candidate in &candidates {
            let key = if candidate.primary_key { "pk" } else { "" };
            table.add_row(vec![&candidate.table, &candidate.column, key]);
        }
        ui.result(&table.render());

        Ok(CommandResult::success())
    }
}
