//! Infrastructure Layer
//!
//! Concrete implementations of the event ports.
//!
//! ## Structure
//!
//! - `events/` - Event sinks (NDJSON)

pub mod events;

pub use events::JsonEventSink;
