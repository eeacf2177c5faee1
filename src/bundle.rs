//! Bundle assembly
//!
//! Groups processed icons by canonical name, skips collisions with the
//! existing library, and back-fills missing weights.

use std::collections::{BTreeMap, HashSet};

use crate::error::LuminError;
use crate::models::{CanonicalName, NormalizedFragment, ProcessedIcon, Weight};

/// Where a bundle entry's markup came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource {
    /// A source file was supplied for this weight
    Supplied,
    /// Copied from another supplied weight as a placeholder
    Fallback(Weight),
}

/// Markup for one weight of one icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    pub svg: String,
    pub fragment: NormalizedFragment,
    pub source: EntrySource,
}

/// All weights of one icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconGroup {
    pub canonical: CanonicalName,
    /// Raw name of the first file seen for this icon
    pub raw_name: String,
    pub entries: BTreeMap<Weight, BundleEntry>,
}

impl IconGroup {
    pub fn get(&self, weight: Weight) -> Option<&BundleEntry> {
        self.entries.get(&weight)
    }

    pub fn supplied_weights(&self) -> Vec<Weight> {
        self.weights_where(|source| source == EntrySource::Supplied)
    }

    pub fn fallback_weights(&self) -> Vec<Weight> {
        self.weights_where(|source| matches!(source, EntrySource::Fallback(_)))
    }

    fn weights_where(&self, pred: impl Fn(EntrySource) -> bool) -> Vec<Weight> {
        self.entries
            .iter()
            .filter(|(_, entry)| pred(entry.source))
            .map(|(weight, _)| *weight)
            .collect()
    }
}

/// Canonical name → weight → markup, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconBundle {
    groups: Vec<IconGroup>,
}

impl IconBundle {
    pub fn groups(&self) -> &[IconGroup] {
        &self.groups
    }

    pub fn get(&self, name: &CanonicalName) -> Option<&IconGroup> {
        self.groups.iter().find(|g| &g.canonical == name)
    }

    pub fn names(&self) -> Vec<&CanonicalName> {
        self.groups.iter().map(|g| &g.canonical).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }
}

/// Non-fatal assembly findings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyWarning {
    /// Some weights were not supplied and were back-filled
    MissingWeights {
        name: CanonicalName,
        missing: Vec<Weight>,
        fallback: Weight,
        /// Only one weight was supplied, so gaps are expected
        partial: bool,
    },
    /// The same weight was supplied more than once; the first one wins
    DuplicateWeight {
        name: CanonicalName,
        weight: Weight,
    },
}

impl AssemblyWarning {
    pub fn message(&self) -> String {
        match self {
            AssemblyWarning::MissingWeights {
                name,
                missing,
                fallback,
                partial,
            } => {
                let list = missing
                    .iter()
                    .map(|w| w.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                if *partial {
                    format!(
                        "{}: single-weight icon, filling {} from {}",
                        name, list, fallback
                    )
                } else {
                    format!(
                        "{}: missing weights: {} (using {} as fallback)",
                        name, list, fallback
                    )
                }
            }
            AssemblyWarning::DuplicateWeight { name, weight } => {
                format!("{}: {} supplied more than once, keeping the first", name, weight)
            }
        }
    }
}

/// Result of [`assemble`]
#[derive(Debug, Default)]
pub struct AssemblyReport {
    pub bundle: IconBundle,
    pub warnings: Vec<AssemblyWarning>,
    /// Whole icons skipped because they already exist
    pub skipped: Vec<LuminError>,
}

/// Group processed icons into a bundle
///
/// An icon whose canonical name is in `existing` is skipped entirely unless
/// `overwrite` is set. Every missing weight is back-filled from the first
/// supplied weight.
pub fn assemble(
    icons: Vec<ProcessedIcon>,
    existing: &HashSet<CanonicalName>,
    overwrite: bool,
) -> AssemblyReport {
    let mut report = AssemblyReport::default();
    let mut order: Vec<CanonicalName> = Vec::new();
    let mut grouped: BTreeMap<CanonicalName, Vec<ProcessedIcon>> = BTreeMap::new();

    for icon in icons {
        if !grouped.contains_key(&icon.canonical) {
            order.push(icon.canonical.clone());
        }
        grouped.entry(icon.canonical.clone()).or_default().push(icon);
    }

    for name in order {
        let Some(icons) = grouped.remove(&name) else {
            continue;
        };

        if existing.contains(&name) && !overwrite {
            report.skipped.push(LuminError::IconExists {
                name: name.to_string(),
            });
            continue;
        }

        let group = build_group(name, icons, &mut report.warnings);
        report.bundle.groups.push(group);
    }

    report
}

fn build_group(
    canonical: CanonicalName,
    icons: Vec<ProcessedIcon>,
    warnings: &mut Vec<AssemblyWarning>,
) -> IconGroup {
    let raw_name = icons
        .first()
        .map(|i| i.name.clone())
        .unwrap_or_else(|| canonical.to_string());
    let fallback_weight = icons.first().map(|i| i.weight).unwrap_or_default();

    let mut entries: BTreeMap<Weight, BundleEntry> = BTreeMap::new();
    for icon in icons {
        if entries.contains_key(&icon.weight) {
            warnings.push(AssemblyWarning::DuplicateWeight {
                name: canonical.clone(),
                weight: icon.weight,
            });
            continue;
        }
        entries.insert(
            icon.weight,
            BundleEntry {
                svg: icon.svg,
                fragment: icon.fragment,
                source: EntrySource::Supplied,
            },
        );
    }

    let supplied = entries.len();
    let missing: Vec<Weight> = Weight::ALL
        .into_iter()
        .filter(|w| !entries.contains_key(w))
        .collect();

    if let Some(template) = entries.get(&fallback_weight).cloned() {
        for weight in &missing {
            entries.insert(
                *weight,
                BundleEntry {
                    source: EntrySource::Fallback(fallback_weight),
                    ..template.clone()
                },
            );
        }
    }

    if !missing.is_empty() {
        warnings.push(AssemblyWarning::MissingWeights {
            name: canonical.clone(),
            missing,
            fallback: fallback_weight,
            partial: supplied == 1,
        });
    }

    IconGroup {
        canonical,
        raw_name,
        entries,
    }
}
