//! Configuration file discovery and loading.
//!
//! A `gapscan.yml` is looked up by walking from the starting directory
//! toward the filesystem root, so running from a subdirectory of a
//! project still picks up the project's config. An explicit `--config`
//! path skips discovery entirely.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::Config;
use crate::db::validate_identifier;
use crate::error::{GapscanError, Result};

/// File name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "gapscan.yml";

/// Find the nearest `gapscan.yml` by walking up from `start`.
///
/// Returns `None` when no config file exists anywhere on the path to
/// the root. Missing configuration is not an error; every command can
/// run from flags alone.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load, parse, and validate the config file at `path`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if the parsed config is unusable.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GapscanError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GapscanError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;
    validate_config(&config)?;

    debug!(path = %path.display(), checks = config.checks.len(), "loaded config");
    Ok(config)
}

/// Load config with optional path override.
///
/// With an override path the file must exist. Without one, discovery
/// starts at `start` and a missing config yields the defaults.
pub fn load_config(start: &Path, config_override: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    match config_override {
        Some(path) => {
            let config = load_config_from(path)?;
            Ok((config, Some(path.to_path_buf())))
        }
        None => match find_config_file(start) {
            Some(path) => {
                let config = load_config_from(&path)?;
                Ok((config, Some(path)))
            }
            None => {
                debug!("no config file found, using defaults");
                Ok((Config::default(), None))
            }
        },
    }
}

/// Parse YAML content into a [`Config`].
///
/// An empty file is treated as an empty mapping rather than a parse
/// error, matching how hand-created config files tend to start out.
pub fn parse_config(content: &str, source_path: &Path) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(content).map_err(|e| GapscanError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Reject configs that parse but cannot work.
fn validate_config(config: &Config) -> Result<()> {
    if config.max_range == Some(0) {
        return Err(GapscanError::ConfigValidationError {
            message: "max_range must be greater than zero".to_string(),
        });
    }

    for (name, check) in &config.checks {
        validate_identifier(&check.table).map_err(|e| GapscanError::ConfigValidationError {
            message: format!("check '{}': {}", name, e),
        })?;
        validate_identifier(&check.column).map_err(|e| GapscanError::ConfigValidationError {
            message: format!("check '{}': {}", name, e),
        })?;
    }

    Ok(())
}
