//! Add Options
//!
//! Built once from CLI flags and config, then passed by reference.

use std::path::{Path, PathBuf};

use crate::config::{Config, PathsConfig};
use crate::models::{CanonicalName, Weight};
use crate::naming::{asset_file_name, DEFAULT_PREFIX};
use crate::normalize::NormalizeOptions;

/// Where the icons to add come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddInput {
    /// Every `.svg` in a folder; weight taken from the file name
    Folder(PathBuf),
    /// One file added as the regular weight of `name`
    File { path: PathBuf, name: String },
}

impl AddInput {
    pub fn path(&self) -> &Path {
        match self {
            AddInput::Folder(path) => path,
            AddInput::File { path, .. } => path,
        }
    }
}

/// Absolute locations of everything `add` reads or writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryLayout {
    pub root: PathBuf,
    pub custom_assets: PathBuf,
    pub core_assets: PathBuf,
    pub defs: PathBuf,
    pub csr: PathBuf,
    pub ssr: PathBuf,
    pub index: PathBuf,
    pub ssr_index: PathBuf,
}

impl LibraryLayout {
    pub fn new(root: impl Into<PathBuf>, paths: &PathsConfig) -> Self {
        let root: PathBuf = root.into();
        Self {
            custom_assets: root.join(&paths.custom_assets),
            core_assets: root.join(&paths.core_assets),
            defs: root.join(&paths.defs),
            csr: root.join(&paths.csr),
            ssr: root.join(&paths.ssr),
            index: root.join(&paths.index),
            ssr_index: root.join(&paths.ssr_index),
            root,
        }
    }

    /// `<custom_assets>/<weight>/<name>[-<weight>].svg`
    pub fn asset_path(&self, raw_name: &str, weight: Weight) -> PathBuf {
        self.custom_assets
            .join(weight.as_str())
            .join(asset_file_name(raw_name, weight))
    }

    pub fn defs_file(&self, name: &CanonicalName) -> PathBuf {
        self.defs.join(tsx(name))
    }

    pub fn csr_file(&self, name: &CanonicalName) -> PathBuf {
        self.csr.join(tsx(name))
    }

    pub fn ssr_file(&self, name: &CanonicalName) -> PathBuf {
        self.ssr.join(tsx(name))
    }

    /// Path relative to the library root, for display
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

fn tsx(name: &CanonicalName) -> String {
    format!("{}.tsx", name)
}

/// Options for [`super::run_add`]
#[derive(Debug, Clone)]
pub struct AddOptions {
    pub input: AddInput,
    /// Report what would happen without touching the file system
    pub dry_run: bool,
    /// Replace icons that already exist in the library
    pub overwrite: bool,
    pub layout: LibraryLayout,
    pub normalize: NormalizeOptions,
    /// Raw-name prefixes stripped during canonicalization
    pub prefixes: Vec<String>,
}

impl AddOptions {
    pub fn new(input: AddInput, layout: LibraryLayout) -> Self {
        Self {
            input,
            dry_run: false,
            overwrite: false,
            layout,
            normalize: NormalizeOptions::default(),
            prefixes: vec![DEFAULT_PREFIX.to_string()],
        }
    }

    /// Layout, preset and prefixes from a loaded config
    pub fn from_config(input: AddInput, root: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            normalize: config.normalize.preset.options(),
            prefixes: config.naming.strip_prefixes.clone(),
            ..Self::new(input, LibraryLayout::new(root, &config.paths))
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_normalize(mut self, normalize: NormalizeOptions) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.prefixes = prefixes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::canonicalize;
    use crate::normalize::Preset;

    #[test]
    fn layout_joins_config_paths() {
        let layout = LibraryLayout::new("/lib", &PathsConfig::default());
        assert_eq!(layout.index, PathBuf::from("/lib/src/index.ts"));
        assert_eq!(layout.ssr_index, PathBuf::from("/lib/src/ssr/index.ts"));
        assert_eq!(
            layout.asset_path("lm-star", Weight::Bold),
            PathBuf::from("/lib/src/assets/bold/lm-star-bold.svg")
        );
        assert_eq!(
            layout.asset_path("lm-star", Weight::Regular),
            PathBuf::from("/lib/src/assets/regular/lm-star.svg")
        );
        assert_eq!(
            layout.csr_file(&canonicalize("lm-star")),
            PathBuf::from("/lib/src/csr/Star.tsx")
        );
    }

    #[test]
    fn relative_strips_root() {
        let layout = LibraryLayout::new("/lib", &PathsConfig::default());
        assert_eq!(
            layout.relative(Path::new("/lib/src/defs/Star.tsx")),
            Path::new("src/defs/Star.tsx")
        );
        assert_eq!(layout.relative(Path::new("/elsewhere")), Path::new("/elsewhere"));
    }

    #[test]
    fn options_from_config() {
        let mut config = Config::default();
        config.normalize.preset = Preset::Legacy;
        config.naming.strip_prefixes = vec!["ph-".to_string()];

        let options = AddOptions::from_config(AddInput::Folder("icons".into()), "/lib", &config)
            .with_dry_run(true);

        assert!(options.dry_run);
        assert!(!options.overwrite);
        assert_eq!(options.normalize, NormalizeOptions::legacy());
        assert_eq!(options.prefixes, vec!["ph-".to_string()]);
        assert_eq!(options.layout.root, PathBuf::from("/lib"));
    }
}
