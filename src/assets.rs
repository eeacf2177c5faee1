//! Asset corpus on disk
//!
//! A corpus is a directory with one subdirectory per weight:
//! `<root>/<weight>/<name>[-<weight>].svg`.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::error::{LuminError, LuminResult};
use crate::fs::FileSystem;
use crate::models::{CanonicalName, NormalizedFragment, Weight};
use crate::naming::{canonicalize_with, DELIMITER, SVG_EXTENSION};
use crate::normalize::{to_fragment, NormalizeOptions};

/// Raw name → weight → fragment
pub type CorpusMap = BTreeMap<String, BTreeMap<Weight, NormalizedFragment>>;

/// An icon lacking one or more weights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingWeights {
    pub name: String,
    pub missing: Vec<Weight>,
}

/// Read and transform every asset under `root`
///
/// Files directly under `root` are ignored. A subdirectory that is not a
/// weight name is an error.
pub fn read_corpus(
    root: &Path,
    fs: &dyn FileSystem,
    options: &NormalizeOptions,
) -> LuminResult<CorpusMap> {
    if !fs.is_dir(root) {
        return Err(LuminError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut corpus = CorpusMap::new();

    for dir in fs.list_dir(root)? {
        if !fs.is_dir(&dir) {
            continue;
        }
        let folder = file_name(&dir);
        let weight = Weight::from_name(&folder).ok_or_else(|| LuminError::BadWeightFolder {
            name: folder.clone(),
            root: root.to_path_buf(),
        })?;

        for file in fs.list_dir(&dir)? {
            let file_name = file_name(&file);
            let Some(stem) = file_name.strip_suffix(SVG_EXTENSION) else {
                continue;
            };
            let name = strip_weight_suffix(stem, weight);
            let markup = fs.read_to_string(&file)?;
            corpus
                .entry(name.to_string())
                .or_default()
                .insert(weight, to_fragment(&markup, options));
        }
    }

    Ok(corpus)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `star-bold` in the `bold` folder is `star`; in any other folder it stays
fn strip_weight_suffix(stem: &str, weight: Weight) -> &str {
    match stem.rsplit_once(DELIMITER) {
        Some((name, suffix)) if suffix == weight.as_str() && !name.is_empty() => name,
        _ => stem,
    }
}

/// Icons that lack any of the six weights, in name order
pub fn verify_corpus(corpus: &CorpusMap) -> Vec<MissingWeights> {
    corpus
        .iter()
        .filter_map(|(name, weights)| {
            let missing: Vec<Weight> = Weight::ALL
                .into_iter()
                .filter(|w| !weights.contains_key(w))
                .collect();
            (!missing.is_empty()).then(|| MissingWeights {
                name: name.clone(),
                missing,
            })
        })
        .collect()
}

/// Canonical names present in a corpus
pub fn existing_names<S: AsRef<str>>(corpus: &CorpusMap, prefixes: &[S]) -> HashSet<CanonicalName> {
    corpus
        .keys()
        .map(|raw| canonicalize_with(raw, prefixes))
        .collect()
}
