//! Add Event Port
//!
//! Progress of an `add` run, observed by the console view, the NDJSON
//! stream, or nothing at all.

use std::path::PathBuf;

use crate::models::{CanonicalName, Weight};

/// Event emitted during an `add` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddEvent {
    /// Inputs were found
    Started { input: PathBuf, file_count: usize },

    /// A source file was read and normalized
    FileProcessed {
        path: PathBuf,
        name: String,
        weight: Weight,
    },

    /// The normalizer adjusted a source file
    Adjusted {
        name: String,
        weight: Weight,
        message: String,
    },

    /// A source file was rejected; the run continues
    FileSkipped { path: PathBuf, reason: String },

    /// A whole icon was left out (usually because it already exists)
    IconSkipped { name: String, reason: String },

    /// Non-fatal finding from bundle assembly
    Warning { message: String },

    /// Dry run: one icon that would be added
    Planned {
        name: CanonicalName,
        weights: Vec<Weight>,
        files: Vec<PathBuf>,
    },

    /// An SVG asset was written; `fallback` names the weight it was copied from
    AssetWritten {
        path: PathBuf,
        fallback: Option<Weight>,
    },

    /// defs/csr/ssr sources were written for an icon
    ComponentsGenerated { name: CanonicalName },

    /// Export manifests were updated
    ExportsUpdated { icon_count: usize, appended: usize },

    /// Run finished
    Completed {
        icon_count: usize,
        written_count: usize,
        skipped_count: usize,
        dry_run: bool,
    },
}

/// Trait for receiving add events
pub trait AddEventSink: Send + Sync {
    /// Handle an add event
    fn on_event(&self, event: AddEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl AddEventSink for NoopEventSink {
    fn on_event(&self, _event: AddEvent) {}
}
