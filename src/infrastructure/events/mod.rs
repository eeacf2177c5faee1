//! Event Sink Implementations
//!
//! Provides concrete implementations of `AddEventSink` and
//! `PublishEventSink`:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The human-readable console sinks live with the CLI views.

mod json;

pub use json::JsonEventSink;
