use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lumin::Preset;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Exit code for a failed parse: 0 for help and version output, 1 otherwise
pub fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

/// Lumin - SVG icon library compiler
#[derive(Parser, Debug)]
#[command(name = "lumin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to lumin.toml (default: ./lumin.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add custom icons to the library
    Add {
        /// Folder of SVG files (name[-weight].svg)
        #[arg(short, long, conflicts_with = "icon")]
        folder: Option<PathBuf>,

        /// A single SVG file
        #[arg(short, long, requires = "name")]
        icon: Option<PathBuf>,

        /// Icon name for --icon (e.g. lm-3-squares)
        #[arg(short, long)]
        name: Option<String>,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,

        /// Print the rendered SVG of each planned icon (with --dry-run)
        #[arg(long, requires = "dry_run")]
        render: bool,

        /// Replace icons that already exist
        #[arg(long)]
        overwrite: bool,

        /// Normalization target (overrides config and LUMIN_PRESET)
        #[arg(long, value_enum)]
        preset: Option<Preset>,
    },

    /// Test, build and publish the package to npm
    Publish {
        /// Run `npm publish --dry-run` instead of publishing
        #[arg(long, alias = "dry")]
        dry_run: bool,

        /// npm dist-tag
        #[arg(long, default_value = "latest")]
        tag: String,

        /// Skip `npm run test`
        #[arg(long)]
        skip_tests: bool,

        /// Skip `npm run build`
        #[arg(long)]
        skip_build: bool,
    },

    /// Check that every icon in the asset tree has all six weights
    Verify {
        /// Asset tree to check (default: [paths] core_assets)
        #[arg(long, value_name = "PATH")]
        assets: Option<PathBuf>,
    },
}
