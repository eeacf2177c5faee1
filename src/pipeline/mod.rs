//! Add Module
//!
//! Orchestrates adding custom icons to the library.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`AddOptions`, `AddInput`, `LibraryLayout`)
//! - `events` - Progress port (`AddEvent`, `AddEventSink`)
//! - `result` - Result types (`AddResult`)
//! - `use_case` - Core flow (`run_add`)
//!
//! ## Usage
//!
//! ```ignore
//! use lumin::pipeline::{run_add, AddInput, AddOptions, NoopEventSink};
//!
//! let options = AddOptions::from_config(AddInput::Folder("icons".into()), ".", &config);
//! let result = run_add(&options, &LocalFs, &NoopEventSink)?;
//! ```

mod events;
mod options;
mod result;
mod use_case;

pub use events::{AddEvent, AddEventSink, NoopEventSink};
pub use options::{AddInput, AddOptions, LibraryLayout};
pub use result::{AddResult, Skipped};
pub use use_case::run_add;
