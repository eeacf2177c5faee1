//! Core data models for Lumin
//!
//! - `Weight`: the six stylistic variants of a glyph
//! - `IconAsset`: one SVG source file as read from disk
//! - `CanonicalName`, `NormalizedFragment`: pipeline products
//! - `ProcessedIcon`: an asset after naming and normalization

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Stylistic variant of an icon glyph
///
/// Declaration order is the emission order used in generated sources.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Default,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    #[default]
    Regular,
    Thin,
    Light,
    Bold,
    Fill,
    Duotone,
}

impl Weight {
    /// Every weight, in emission order
    pub const ALL: [Weight; 6] = [
        Weight::Regular,
        Weight::Thin,
        Weight::Light,
        Weight::Bold,
        Weight::Fill,
        Weight::Duotone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weight::Regular => "regular",
            Weight::Thin => "thin",
            Weight::Light => "light",
            Weight::Bold => "bold",
            Weight::Fill => "fill",
            Weight::Duotone => "duotone",
        }
    }

    /// Parse an exact lowercase weight name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.as_str() == name)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown weight '{}'", s))
    }
}

/// One SVG source file as read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAsset {
    /// Raw kebab-case name (file stem without weight suffix, or `--name`)
    pub raw_name: String,
    pub weight: Weight,
    pub raw_markup: String,
    pub source_path: PathBuf,
}

impl IconAsset {
    pub fn new(
        raw_name: impl Into<String>,
        weight: Weight,
        raw_markup: impl Into<String>,
        source_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            raw_name: raw_name.into(),
            weight,
            raw_markup: raw_markup.into(),
            source_path: source_path.into(),
        }
    }
}

/// PascalCase identifier used for generated file and symbol names
///
/// Only produced by [`crate::naming::canonicalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalName(String);

impl CanonicalName {
    pub(crate) fn new(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Inner SVG markup with the root wrapper removed and color parameterized
///
/// Only produced by [`crate::normalize::to_fragment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedFragment(String);

impl NormalizedFragment {
    pub(crate) fn new(markup: String) -> Self {
        Self(markup)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An asset after naming and normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedIcon {
    /// Raw kebab-case name, used for asset file names
    pub name: String,
    pub canonical: CanonicalName,
    pub weight: Weight,
    /// Normalized full SVG source (viewBox and fill fixed up)
    pub svg: String,
    pub fragment: NormalizedFragment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_order_matches_emission_order() {
        let names: Vec<&str> = Weight::ALL.iter().map(|w| w.as_str()).collect();
        assert_eq!(
            names,
            vec!["regular", "thin", "light", "bold", "fill", "duotone"]
        );
        let mut sorted = Weight::ALL;
        sorted.sort();
        assert_eq!(sorted, Weight::ALL);
    }

    #[test]
    fn test_weight_from_name() {
        assert_eq!(Weight::from_name("duotone"), Some(Weight::Duotone));
        assert_eq!(Weight::from_name("Bold"), None);
        assert_eq!(Weight::from_name("heavy"), None);
        assert!("heavy".parse::<Weight>().is_err());
    }

    #[test]
    fn test_weight_serde_lowercase() {
        let json = serde_json::to_string(&Weight::Fill).unwrap();
        assert_eq!(json, "\"fill\"");
        let w: Weight = serde_json::from_str("\"thin\"").unwrap();
        assert_eq!(w, Weight::Thin);
    }

    #[test]
    fn test_weight_default_is_regular() {
        assert_eq!(Weight::default(), Weight::Regular);
    }
}
