//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LuminError, LuminResult};
use crate::normalize::Preset;

use super::types::{ColorMode, Config};

/// File name looked up in the project root
pub const CONFIG_FILE_NAME: &str = "lumin.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl ConfigWarning {
    pub fn message(&self) -> String {
        let mut msg = format!("Unknown config key '{}'", self.key);
        match self.line {
            Some(line) => msg.push_str(&format!(" in {}:{}", self.file.display(), line)),
            None => msg.push_str(&format!(" in {}", self.file.display())),
        }
        if let Some(suggestion) = &self.suggestion {
            msg.push_str(&format!(" (did you mean '{}'?)", suggestion));
        }
        msg
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LuminResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LuminError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config for a project
///
/// An explicit path must exist. Without one, `<root>/lumin.toml` is used
/// when present and built-in defaults otherwise.
pub fn discover(root: &Path, explicit: Option<&Path>) -> LuminResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) if !path.is_file() => {
            return Err(LuminError::FileNotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => load_with_warnings(path)?,
        None => {
            let candidate = root.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                load_with_warnings(&candidate)?
            } else {
                (Config::default(), Vec::new())
            }
        }
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (LUMIN_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(super) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // LUMIN_PRESET
    if let Some(preset) = lookup("LUMIN_PRESET") {
        match preset.trim().to_lowercase().as_str() {
            "custom" => config.normalize.preset = Preset::Custom,
            "legacy" => config.normalize.preset = Preset::Legacy,
            _ => {}
        }
    }

    // LUMIN_NO_COLOR
    if let Some(val) = lookup("LUMIN_NO_COLOR") {
        if !val.is_empty() && val != "0" && val.to_lowercase() != "false" {
            config.output.color = ColorMode::Never;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "custom_assets",
        "core_assets",
        "defs",
        "csr",
        "ssr",
        "index",
        "ssr_index",
        "naming",
        "strip_prefixes",
        "normalize",
        "preset",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
