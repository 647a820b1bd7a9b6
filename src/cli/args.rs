//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Gapscan - find missing sequential ids in SQLite identifier columns.
#[derive(Debug, Parser)]
#[command(name = "gapscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides gapscan.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite database (overrides config)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan identifier columns for missing ids (default if no command specified)
    Check(CheckArgs),

    /// List candidate integer identifier columns in the database
    Tables(TablesArgs),

    /// Create the demonstration schema with sample data
    Seed(SeedArgs),

    /// Run .sql script files against the database
    Exec(ExecArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Configured check to run (from gapscan.yml)
    pub name: Option<String>,

    /// Table to scan (bypasses config)
    #[arg(short, long)]
    pub table: Option<String>,

    /// Identifier column to scan
    #[arg(long)]
    pub column: Option<String>,

    /// Scan every configured check
    #[arg(long)]
    pub all: bool,

    /// Output format: text, table, json
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Widest id range to scan (overrides config)
    #[arg(long)]
    pub max_range: Option<u64>,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            name: None,
            table: None,
            column: None,
            all: false,
            format: "text".to_string(),
            max_range: None,
        }
    }
}

/// Arguments for the `tables` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TablesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `seed` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SeedArgs {
    /// Overwrite an existing non-empty database file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `exec` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExecArgs {
    /// A .sql file, or a directory of .sql files run in lexical order
    pub path: PathBuf,

    /// List the files in execution order without running them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
