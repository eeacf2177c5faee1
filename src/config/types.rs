//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LuminResult;
use crate::naming::DEFAULT_PREFIX;
use crate::normalize::Preset;

use super::loader::{self, ConfigWarning};

/// Library layout, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// User-contributed SVG assets (`<dir>/<weight>/*.svg`)
    pub custom_assets: String,
    /// Primary SVG corpus, same layout
    pub core_assets: String,
    pub defs: String,
    pub csr: String,
    pub ssr: String,
    /// Root barrel file
    pub index: String,
    /// Server-render barrel file
    pub ssr_index: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            custom_assets: "src/assets".to_string(),
            core_assets: "core/assets".to_string(),
            defs: "src/defs".to_string(),
            csr: "src/csr".to_string(),
            ssr: "src/ssr".to_string(),
            index: "src/index.ts".to_string(),
            ssr_index: "src/ssr/index.ts".to_string(),
        }
    }
}

/// Name canonicalization settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Prefixes removed from raw names; the first match wins
    #[serde(default = "default_prefixes")]
    pub strip_prefixes: Vec<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            strip_prefixes: default_prefixes(),
        }
    }
}

fn default_prefixes() -> Vec<String> {
    vec![DEFAULT_PREFIX.to_string()]
}

/// Normalizer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NormalizeConfig {
    #[serde(default)]
    pub preset: Preset,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Contents of `lumin.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub normalize: NormalizeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LuminResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LuminResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit file, else `<root>/lumin.toml`, else defaults
    ///
    /// Environment overrides are applied last.
    pub fn discover(
        root: &Path,
        explicit: Option<&Path>,
    ) -> LuminResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(root, explicit)
    }

    /// Apply environment variable overrides (LUMIN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
