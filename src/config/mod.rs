//! Configuration module for Lumin
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (LUMIN_*)
//! 3. Project config (lumin.toml, or --config)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{ConfigWarning, CONFIG_FILE_NAME};
pub use types::{ColorMode, Config, NamingConfig, NormalizeConfig, OutputConfig, PathsConfig};
