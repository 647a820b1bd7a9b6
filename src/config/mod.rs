//! Configuration loading, parsing, and validation.
//!
//! gapscan runs happily with no configuration at all (everything can be
//! given as flags); a `gapscan.yml` becomes useful once a project has
//! several identifier columns worth auditing regularly.
//!
//! - [`schema`] - Configuration data structures
//! - [`loader`] - File discovery, parsing, and validation

pub mod loader;
pub mod schema;

pub use loader::{find_config_file, load_config, load_config_from};
pub use schema::{CheckSpec, Config, DEFAULT_MAX_RANGE};
