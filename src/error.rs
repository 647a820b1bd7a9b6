//! Error types for gapscan operations.
//!
//! This module defines [`GapscanError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GapscanError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GapscanError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gapscan operations.
#[derive(Debug, Error)]
pub enum GapscanError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Referenced named check does not exist in the configuration.
    #[error("Unknown check: {name}")]
    UnknownCheck { name: String },

    /// Table or column name is not a valid SQL identifier.
    #[error("Invalid identifier '{name}': {message}")]
    InvalidIdentifier { name: String, message: String },

    /// Referenced table or column is missing from the database.
    #[error("No such column: {table}.{column}")]
    MissingColumn { table: String, column: String },

    /// Identifier column contained a value that is not a 64-bit integer.
    #[error("Non-integer value in {table}.{column}: {detail}")]
    NonIntegerValue {
        table: String,
        column: String,
        detail: String,
    },

    /// Observed id range is too wide to scan safely.
    #[error("Range of {table}.{column} spans {width} values, above the limit of {limit}")]
    RangeTooWide {
        table: String,
        column: String,
        width: u64,
        limit: u64,
    },

    /// A SQL script file failed to execute.
    #[error("Script '{path}' failed: {message}")]
    ScriptFailed { path: PathBuf, message: String },

    /// Database error wrapper.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gapscan operations.
pub type Result<T> = std::result::Result<T, GapscanError>;
