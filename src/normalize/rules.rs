//! Fragment rewrite rules
//!
//! Each rule is a pure text substitution. [`FRAGMENT_RULES`] fixes the order
//! in which they run: structure is stripped first, colors are parameterized
//! next, and attribute names are renamed last.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use super::NormalizeOptions;

/// Signature shared by every rewrite rule
pub type Rule = fn(&str, &NormalizeOptions) -> String;

/// Rewrite rules in application order
pub const FRAGMENT_RULES: &[(&str, Rule)] = &[
    ("strip-xml-prolog", strip_xml_prolog),
    ("strip-svg-open", strip_svg_open),
    ("strip-svg-close", strip_svg_close),
    ("strip-backing-rect", strip_backing_rect),
    ("strip-title", strip_title),
    ("replace-zero-hex", replace_zero_hex),
    ("replace-inherit-color", replace_inherit_color),
    ("rename-attributes", rename_attributes),
];

/// Hyphenated presentation attributes and their JSX spelling
pub const ATTRIBUTE_RENAMES: &[(&str, &str)] = &[
    ("fill-rule", "fillRule"),
    ("stroke-linecap", "strokeLinecap"),
    ("stroke-linejoin", "strokeLinejoin"),
    ("stroke-width", "strokeWidth"),
    ("stroke-miterlimit", "strokeMiterlimit"),
];

static XML_PROLOG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*<\?xml.*?\?>").expect("valid prolog regex"));
static SVG_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg\b[^>]*>").expect("valid svg open regex"));
static LEGACY_BACKING_RECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<rect width="25[\d,.]+" height="25[\d,.]+" fill="none"[^>]*/>"#)
        .expect("valid backing rect regex")
});
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<title\b[^>]*/>").expect("valid title regex"));
static ZERO_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##""#0+""##).expect("valid zero hex regex"));

fn owned(cow: Cow<'_, str>) -> String {
    cow.into_owned()
}

/// Remove the XML prolog and anything before it on the first line
pub fn strip_xml_prolog(input: &str, _options: &NormalizeOptions) -> String {
    owned(XML_PROLOG.replace(input, ""))
}

/// Remove every `<svg ...>` open tag
pub fn strip_svg_open(input: &str, _options: &NormalizeOptions) -> String {
    owned(SVG_OPEN.replace_all(input, ""))
}

/// Remove every `</svg>` close tag
pub fn strip_svg_close(input: &str, _options: &NormalizeOptions) -> String {
    input.replace("</svg>", "")
}

/// Remove transparent full-canvas rectangles used for thumbnail framing
///
/// Matches the 256 legacy canvas and the configured canvas.
pub fn strip_backing_rect(input: &str, options: &NormalizeOptions) -> String {
    let stripped = LEGACY_BACKING_RECT.replace_all(input, "");
    let (width, height) = options.canvas_size();
    let canvas = format!(
        r#"<rect width="{}" height="{}" fill="none"[^>]*/>"#,
        regex::escape(width),
        regex::escape(height)
    );
    match Regex::new(&canvas) {
        Ok(re) => owned(re.replace_all(&stripped, "")),
        Err(_) => stripped.into_owned(),
    }
}

/// Remove self-closing `<title/>` elements
pub fn strip_title(input: &str, _options: &NormalizeOptions) -> String {
    owned(TITLE.replace_all(input, ""))
}

/// Replace quoted all-zero hex colors (`"#000"`, `"#000000"`) with the token
pub fn replace_zero_hex(input: &str, options: &NormalizeOptions) -> String {
    owned(ZERO_HEX.replace_all(input, NoExpand(&options.color_token)))
}

/// Replace the inherit-color sentinel with the token
///
/// A quoted attribute value loses its quotes so the token becomes an
/// expression; bare occurrences (inside `style`) are swapped in place.
pub fn replace_inherit_color(input: &str, options: &NormalizeOptions) -> String {
    let quoted = format!("\"{}\"", options.inherit_color);
    input
        .replace(&quoted, &options.color_token)
        .replace(&options.inherit_color, &options.color_token)
}

/// Rename hyphenated presentation attributes to camelCase
pub fn rename_attributes(input: &str, _options: &NormalizeOptions) -> String {
    ATTRIBUTE_RENAMES
        .iter()
        .fold(input.to_string(), |acc, (from, to)| acc.replace(from, to))
}
