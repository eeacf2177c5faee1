//! Add Result

use std::path::PathBuf;

use crate::bundle::{AssemblyWarning, IconBundle};

/// Something that was left out of the run, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// File path or icon name
    pub subject: String,
    pub reason: String,
}

/// Result of an add operation
#[derive(Debug, Clone, Default)]
pub struct AddResult {
    /// Icons that were (or, in a dry run, would be) added
    pub bundle: IconBundle,
    /// Files that were written
    pub written: Vec<PathBuf>,
    /// Files that would be written (dry run only)
    pub planned: Vec<PathBuf>,
    /// Files and icons left out
    pub skipped: Vec<Skipped>,
    pub warnings: Vec<AssemblyWarning>,
    /// Export lines appended (or, in a dry run, pending) across both manifests
    pub exports_appended: usize,
    pub dry_run: bool,
}

impl AddResult {
    pub fn icon_count(&self) -> usize {
        self.bundle.len()
    }

    pub fn has_changes(&self) -> bool {
        !self.written.is_empty()
    }
}
