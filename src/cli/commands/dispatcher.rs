//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] carrying the global flags every command needs
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, Config};
use crate::error::{GapscanError, Result};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Global flags resolved once and shared by every command.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Directory config discovery starts from.
    pub working_dir: PathBuf,

    /// Explicit `--config` path, if given.
    pub config_override: Option<PathBuf>,

    /// Explicit `--database` path, if given.
    pub database_override: Option<PathBuf>,
}

impl CommandContext {
    /// Build the context from parsed CLI arguments.
    pub fn from_cli(working_dir: PathBuf, cli: &Cli) -> Self {
        Self {
            working_dir,
            config_override: cli.config.clone(),
            database_override: cli.database.clone(),
        }
    }

    /// Load configuration, honoring the `--config` override.
    ///
    /// Returns the config and the path it came from (None when running
    /// purely on defaults).
    pub fn load_config(&self) -> Result<(Config, Option<PathBuf>)> {
        load_config(&self.working_dir, self.config_override.as_deref())
    }

    /// Resolve the database path: `--database` beats config, and a
    /// relative config path is taken relative to the config file's
    /// directory.
    pub fn database_path(&self, config: &Config, config_source: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = &self.database_override {
            return Ok(path.clone());
        }

        if let Some(db) = &config.database {
            if db.is_absolute() {
                return Ok(db.clone());
            }
            let base = config_source
                .and_then(|p| p.parent())
                .unwrap_or(&self.working_dir);
            return Ok(base.join(db));
        }

        Err(GapscanError::ConfigValidationError {
            message: "no database given (use --database or set `database` in gapscan.yml)"
                .to_string(),
        })
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher that resolves paths from `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. `check` is the default when no subcommand is given.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let context = CommandContext::from_cli(self.working_dir.clone(), cli);

        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(context, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Tables(args)) => {
                let cmd = super::tables::TablesCommand::new(context, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Seed(args)) => {
                let cmd = super::seed::SeedCommand::new(context, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Exec(args)) => {
                let cmd = super::exec::ExecCommand::new(context, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::check::CheckCommand::new(
                    context,
                    crate::cli::args::CheckArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}
