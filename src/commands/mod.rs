//! Command handlers
//!
//! Each handler loads `lumin.toml`, builds its options once, runs the
//! library operation and renders the outcome (console or NDJSON).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lumin::Config;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

mod add;
mod publish;
mod verify;

pub use add::{cmd_add, AddArgs};
pub use publish::cmd_publish;
pub use verify::cmd_verify;

/// Flags shared by every subcommand
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Project root: the working directory
    pub fn root(&self) -> Result<PathBuf> {
        std::env::current_dir().context("cannot determine the current directory")
    }

    /// Load the config and report unknown keys
    pub fn load_config(&self, root: &Path) -> Result<Config> {
        let (config, warnings) = Config::discover(root, self.config.as_deref())?;

        for warning in &warnings {
            if self.json {
                let _ = crate::ui::json::emit(serde_json::json!({
                    "event": "warning",
                    "message": warning.message(),
                }));
            } else {
                let ui = self.ui(&config);
                eprintln!(
                    "{} {}",
                    Icon::Warning.colored(ui.color, ui.unicode),
                    warning.message()
                );
            }
        }

        Ok(config)
    }

    pub fn ui(&self, config: &Config) -> UiContext {
        UiContext::new(self.json, self.verbose, self.color, config)
    }
}
