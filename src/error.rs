//! Error types for Lumin
//!
//! Library code returns `LuminError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Lumin operations
pub type LuminResult<T> = Result<T, LuminError>;

/// Main error type for Lumin operations
#[derive(Error, Debug)]
pub enum LuminError {
    /// Neither a folder nor a single icon was given
    #[error("please specify either --folder or --icon")]
    MissingInput,

    /// `--icon` used without `--name`
    #[error("--name is required when using --icon")]
    MissingName,

    /// Icon name cannot be used as a file or component name
    #[error("invalid icon name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Markup is not an SVG document (missing root tags)
    #[error("invalid SVG in {file}: {reason}")]
    InvalidSvg { file: PathBuf, reason: String },

    /// Icon already exists in the library and overwrite is off
    #[error("icon '{name}' already exists (use --overwrite to replace)")]
    IconExists { name: String },

    /// Directory not found
    #[error("folder not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// File not found
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input folder has no `.svg` files
    #[error("no SVG files found in {path}")]
    NoSvgFiles { path: PathBuf },

    /// Single input file is not an SVG
    #[error("file must be an SVG: {path}")]
    NotSvg { path: PathBuf },

    /// Asset corpus contains a folder that is not a weight name
    #[error("bad folder name '{name}' in {root} (expected one of regular, thin, light, bold, fill, duotone)")]
    BadWeightFolder { name: String, root: PathBuf },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// package.json missing from the publish root
    #[error("package.json not found in {root}")]
    PackageJsonNotFound { root: PathBuf },

    /// Refusing to publish a private package
    #[error("cannot publish private package {name}; set \"private\": false in package.json")]
    PrivatePackage { name: String },

    /// dist/ missing before publish
    #[error("dist folder not found at {path}; run 'npm run build' first")]
    DistMissing { path: PathBuf },

    /// `npm whoami` failed
    #[error("not authenticated with npm; run 'npm login' first")]
    NpmAuth,

    /// A publish step exited non-zero
    #[error("{step} failed ({})", exit_label(.code))]
    CommandFailed { step: String, code: Option<i32> },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl LuminError {
    /// Errors that skip one file or icon group instead of aborting the run
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidSvg { .. } | Self::IconExists { .. })
    }
}
