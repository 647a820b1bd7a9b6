//! Seed command implementation.
//!
//! The `gapscan seed` command builds the demonstration schema, giving a
//! fresh database something for `check` to find.

use std::fs;

use crate::cli::args::SeedArgs;
use crate::db::{seed, Database};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The seed command implementation.
pub struct SeedCommand {
    context: CommandContext,
    args: SeedArgs,
}

impl SeedCommand {
    /// Create a new seed command.
    pub fn new(context: CommandContext, args: SeedArgs) -> Self {
        Self { context, args }
    }
}

impl Command for SeedCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (config, config_source) = self.context.load_config()?;
        let db_path = self.context.database_path(&config, config_source.as_deref())?;

        let existing_size = fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);
        if existing_size > 0 && !self.args.force {
            ui.error(&format!(
                "refusing to overwrite non-empty {} (use --force)",
                db_path.display()
            ));
            return Ok(CommandResult::failure(2));
        }

        let db = Database::open(&db_path)?;
        let summary = seed(&db)?;

        ui.success(&format!(
            "seeded {}: {} users, {} orders",
            db_path.display(),
            summary.users,
            summary.orders
        ));
        ui.detail("orders.id was left with deliberate gaps; try `gapscan check --table orders`");

        Ok(CommandResult::success())
    }
}
