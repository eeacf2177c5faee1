//! Terminal output for the CLI
//!
//! - `theme` / `primitives` - colors, icons, styled text
//! - `blocks` - headers and result summaries
//! - `views` - per-command rendering and console event sinks
//! - `json` / `error` / `ci` - NDJSON, error reporting, CI annotations

pub mod blocks;
pub mod ci;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
