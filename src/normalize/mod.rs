//! SVG normalization
//!
//! Two stages, both plain text rewriting:
//!
//! 1. [`validate_svg`] checks for the root tags, enforces the target
//!    `viewBox`, and makes sure the icon inherits its color.
//! 2. [`to_fragment`] strips the root wrapper and parameterizes color,
//!    running [`rules::FRAGMENT_RULES`] in order.

pub mod rules;

use std::path::Path;
use std::sync::LazyLock;

use base64::Engine;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

use crate::error::{LuminError, LuminResult};
use crate::models::{NormalizedFragment, Weight};

pub use rules::{Rule, ATTRIBUTE_RENAMES, FRAGMENT_RULES};

/// Canvas of the primary icon corpus
pub const LEGACY_VIEW_BOX: &str = "0 0 256 256";
/// Canvas of user-contributed icons
pub const CUSTOM_VIEW_BOX: &str = "0 0 24 24";

static VIEW_BOX_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"viewBox="([^"]*)""#).expect("valid viewBox regex"));
static ROOT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg\b([^>]*)>").expect("valid root regex"));

/// Named normalization targets
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// 24×24 canvas for user-contributed icons
    #[default]
    Custom,
    /// 256×256 canvas of the primary corpus
    Legacy,
}

impl Preset {
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Custom => "custom",
            Preset::Legacy => "legacy",
        }
    }

    pub fn options(self) -> NormalizeOptions {
        match self {
            Preset::Custom => NormalizeOptions::custom(),
            Preset::Legacy => NormalizeOptions::legacy(),
        }
    }
}

/// Normalization target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Required root `viewBox` value
    pub view_box: String,
    /// Keyword meaning "use the foreground color"
    pub inherit_color: String,
    /// Literal color treated as the foreground color
    pub placeholder_color: String,
    /// The single free variable left in fragments
    pub color_token: String,
    /// Corner radius of the preview thumbnail background
    pub preview_radius: u32,
}

impl NormalizeOptions {
    pub fn custom() -> Self {
        Self {
            view_box: CUSTOM_VIEW_BOX.to_string(),
            preview_radius: 4,
            ..Self::legacy()
        }
    }

    pub fn legacy() -> Self {
        Self {
            view_box: LEGACY_VIEW_BOX.to_string(),
            inherit_color: "currentColor".to_string(),
            placeholder_color: "#000".to_string(),
            color_token: "{color}".to_string(),
            preview_radius: 40,
        }
    }

    /// Width and height from the last two `viewBox` numbers
    pub fn canvas_size(&self) -> (&str, &str) {
        let parts: Vec<&str> = self.view_box.split_whitespace().collect();
        match parts.as_slice() {
            [.., w, h] => (*w, *h),
            _ => ("0", "0"),
        }
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::custom()
    }
}

/// Where the markup came from, for messages and errors
#[derive(Debug, Clone, Copy)]
pub struct SourceContext<'a> {
    pub name: &'a str,
    pub weight: Weight,
    pub file: &'a Path,
}

/// Adjustment made while validating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeNote {
    ViewBoxReplaced { from: String, to: String },
    ViewBoxInjected { value: String },
    FillInjected { color: String },
}

impl NormalizeNote {
    pub fn message(&self) -> String {
        match self {
            NormalizeNote::ViewBoxReplaced { from, to } => {
                format!("adjusting viewBox from \"{}\" to \"{}\"", from, to)
            }
            NormalizeNote::ViewBoxInjected { value } => {
                format!("adding viewBox=\"{}\"", value)
            }
            NormalizeNote::FillInjected { color } => format!("adding fill=\"{}\"", color),
        }
    }
}

/// SVG source after validation, with the adjustments that were made
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSvg {
    pub svg: String,
    pub notes: Vec<NormalizeNote>,
}

/// Full normalization result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub svg: String,
    pub fragment: NormalizedFragment,
    pub notes: Vec<NormalizeNote>,
}

/// Validate markup and apply root-level fixups
///
/// Fails when either the `<svg` open tag or `</svg>` close tag is missing.
pub fn validate_svg(
    markup: &str,
    ctx: SourceContext<'_>,
    options: &NormalizeOptions,
) -> LuminResult<ValidatedSvg> {
    if !markup.contains("<svg") || !markup.contains("</svg>") {
        return Err(LuminError::InvalidSvg {
            file: ctx.file.to_path_buf(),
            reason: "not a valid SVG file (missing <svg> root)".to_string(),
        });
    }

    let mut notes = Vec::new();
    let mut svg = enforce_view_box(markup, options, &mut notes);

    if !svg.contains(&options.inherit_color) && !svg.contains(&options.placeholder_color) {
        let attr = format!(r#" fill="{}""#, options.inherit_color);
        svg = append_to_root(&svg, &attr);
        notes.push(NormalizeNote::FillInjected {
            color: options.inherit_color.clone(),
        });
    }

    Ok(ValidatedSvg { svg, notes })
}

fn enforce_view_box(
    markup: &str,
    options: &NormalizeOptions,
    notes: &mut Vec<NormalizeNote>,
) -> String {
    let current = VIEW_BOX_ATTR
        .captures(markup)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    match current {
        Some(value) if value == options.view_box => markup.to_string(),
        Some(value) => {
            let replacement = format!(r#"viewBox="{}""#, options.view_box);
            notes.push(NormalizeNote::ViewBoxReplaced {
                from: value,
                to: options.view_box.clone(),
            });
            VIEW_BOX_ATTR
                .replace(markup, NoExpand(&replacement))
                .into_owned()
        }
        None => {
            notes.push(NormalizeNote::ViewBoxInjected {
                value: options.view_box.clone(),
            });
            append_to_root(markup, &format!(r#" viewBox="{}""#, options.view_box))
        }
    }
}

/// Append attribute text at the end of the first `<svg ...>` tag
fn append_to_root(markup: &str, attr: &str) -> String {
    ROOT_OPEN
        .replace(markup, |caps: &regex::Captures<'_>| {
            format!("<svg{}{}>", &caps[1], attr)
        })
        .into_owned()
}

/// Strip the root wrapper and parameterize color
pub fn to_fragment(svg: &str, options: &NormalizeOptions) -> NormalizedFragment {
    let markup = FRAGMENT_RULES
        .iter()
        .fold(svg.to_string(), |acc, (_, rule)| rule(&acc, options));
    NormalizedFragment::new(markup)
}

/// Validate, fix up, and transform raw markup
pub fn normalize(
    markup: &str,
    ctx: SourceContext<'_>,
    options: &NormalizeOptions,
) -> LuminResult<Normalized> {
    let ValidatedSvg { svg, notes } = validate_svg(markup, ctx, options)?;
    let fragment = to_fragment(&svg, options);
    Ok(Normalized {
        svg,
        fragment,
        notes,
    })
}

/// Base64 preview thumbnail for doc comments
///
/// Swaps the root tag for a 20×20 root with a white rounded background.
pub fn preview_base64(svg: &str, options: &NormalizeOptions) -> String {
    let (width, height) = options.canvas_size();
    let root = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="{vb}" fill="#000"><rect width="{w}" height="{h}" fill="#FFF" rx="{r}" ry="{r}"/>"##,
        vb = options.view_box,
        w = width,
        h = height,
        r = options.preview_radius,
    );
    let preview = ROOT_OPEN.replace_all(svg, NoExpand(&root));
    base64::engine::general_purpose::STANDARD.encode(preview.as_bytes())
}
