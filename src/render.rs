//! Static rendering of a bundled icon
//!
//! Mirrors what the generated components do at runtime: each property is
//! taken from the explicit props, then the ambient [`IconContext`], then a
//! hardcoded fallback.

use crate::bundle::IconGroup;
use crate::models::Weight;
use crate::normalize::LEGACY_VIEW_BOX;

const FALLBACK_COLOR: &str = "currentColor";
const FALLBACK_SIZE: &str = "1em";
const MIRROR_TRANSFORM: &str = "scale(-1, 1)";

/// Per-use icon properties; `None` defers to the context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconProps {
    pub alt: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub weight: Option<Weight>,
    pub mirrored: Option<bool>,
    pub view_box: Option<String>,
    /// Additional attributes passed through to the root element
    pub extra: Vec<(String, String)>,
}

/// Ambient defaults shared by every icon in a subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconContext {
    pub color: Option<String>,
    pub size: Option<String>,
    pub weight: Option<Weight>,
    pub mirrored: Option<bool>,
    pub view_box: Option<String>,
    pub extra: Vec<(String, String)>,
}

impl Default for IconContext {
    fn default() -> Self {
        Self {
            color: Some(FALLBACK_COLOR.to_string()),
            size: Some(FALLBACK_SIZE.to_string()),
            weight: Some(Weight::Regular),
            mirrored: Some(false),
            view_box: Some(LEGACY_VIEW_BOX.to_string()),
            extra: Vec::new(),
        }
    }
}

impl IconContext {
    /// A context that sets nothing
    pub fn empty() -> Self {
        Self {
            color: None,
            size: None,
            weight: None,
            mirrored: None,
            view_box: None,
            extra: Vec::new(),
        }
    }
}

/// Fully resolved root attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProps {
    pub color: String,
    pub size: String,
    pub weight: Weight,
    pub mirrored: bool,
    pub view_box: String,
    pub extra: Vec<(String, String)>,
}

/// Merge props over context over fallbacks
///
/// `mirrored` is set when either the props or the context ask for it.
/// Context attributes come first in `extra`; a prop with the same name
/// replaces the context value.
pub fn resolve(props: &IconProps, context: Option<&IconContext>) -> ResolvedProps {
    let empty = IconContext::empty();
    let ctx = context.unwrap_or(&empty);

    let pick = |prop: &Option<String>, ambient: &Option<String>, fallback: &str| {
        prop.clone()
            .or_else(|| ambient.clone())
            .unwrap_or_else(|| fallback.to_string())
    };

    let mut extra = ctx.extra.clone();
    for (key, value) in &props.extra {
        match extra.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value.clone(),
            None => extra.push((key.clone(), value.clone())),
        }
    }

    ResolvedProps {
        color: pick(&props.color, &ctx.color, FALLBACK_COLOR),
        size: pick(&props.size, &ctx.size, FALLBACK_SIZE),
        weight: props.weight.or(ctx.weight).unwrap_or_default(),
        mirrored: props.mirrored.unwrap_or(false) || ctx.mirrored.unwrap_or(false),
        view_box: pick(&props.view_box, &ctx.view_box, LEGACY_VIEW_BOX),
        extra,
    }
}

/// Render one icon to a standalone `<svg>` document
///
/// A weight missing from the group renders an empty root.
pub fn render_svg(group: &IconGroup, props: &IconProps, context: Option<&IconContext>) -> String {
    let resolved = resolve(props, context);

    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" fill="{color}" viewBox="{vb}""#,
        size = escape(&resolved.size),
        color = escape(&resolved.color),
        vb = escape(&resolved.view_box),
    );
    if resolved.mirrored {
        out.push_str(&format!(r#" transform="{}""#, MIRROR_TRANSFORM));
    }
    for (key, value) in &resolved.extra {
        out.push_str(&format!(r#" {}="{}""#, key, escape(value)));
    }
    out.push('>');

    if let Some(alt) = props.alt.as_deref().filter(|a| !a.is_empty()) {
        out.push_str(&format!("<title>{}</title>", escape(alt)));
    }

    if let Some(entry) = group.get(resolved.weight) {
        out.push_str(&substitute_color(entry.fragment.as_str(), &resolved.color));
    }

    out.push_str("</svg>");
    out
}

/// Replace the color token with a concrete color
///
/// `attr={color}` becomes a quoted attribute; other occurrences (inside
/// `style`) get the bare value.
fn substitute_color(fragment: &str, color: &str) -> String {
    let color = escape(color);
    fragment
        .replace("={color}", &format!("=\"{}\"", color))
        .replace("{color}", &color)
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
