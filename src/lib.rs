//! Lumin - SVG icon library compiler
//!
//! Lumin turns loose SVG files into a consistent icon library: canonical
//! PascalCase names, normalized `currentColor` fragments for six weights,
//! generated React components, and barrel files that export them.

pub mod assets;
pub mod bundle;
pub mod codegen;
pub mod config;
pub mod error;
pub mod fs;
pub mod infrastructure;
pub mod manifest;
pub mod models;
pub mod naming;
pub mod normalize;
pub mod pipeline;
pub mod publish;
pub mod render;

// Re-exports for convenience
pub use bundle::{assemble, AssemblyReport, IconBundle, IconGroup};
pub use config::Config;
pub use error::{LuminError, LuminResult};
pub use fs::{FileSystem, LocalFs};
pub use infrastructure::JsonEventSink;
pub use models::{CanonicalName, IconAsset, NormalizedFragment, ProcessedIcon, Weight};
pub use naming::{canonicalize, canonicalize_with};
pub use normalize::{normalize, NormalizeOptions, Preset};
pub use pipeline::{run_add, AddEvent, AddEventSink, AddInput, AddOptions, AddResult};
pub use publish::{PublishOptions, Publisher, SystemRunner};
pub use render::{render_svg, IconContext, IconProps};
