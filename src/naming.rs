//! Icon name canonicalization
//!
//! Turns raw file stems such as `lm-3-squares` into PascalCase identifiers
//! (`ThreeSquares`) used for generated file and symbol names.

use crate::error::{LuminError, LuminResult};
use crate::models::{CanonicalName, Weight};

/// Delimiter between raw name segments
pub const DELIMITER: char = '-';

/// Source prefix stripped by default
pub const DEFAULT_PREFIX: &str = "lm-";

/// File extension of source assets
pub const SVG_EXTENSION: &str = ".svg";

const NUMBER_WORDS: &[(u32, &str)] = &[
    (0, "Zero"),
    (1, "One"),
    (2, "Two"),
    (3, "Three"),
    (4, "Four"),
    (5, "Five"),
    (6, "Six"),
    (7, "Seven"),
    (8, "Eight"),
    (9, "Nine"),
    (10, "Ten"),
    (11, "Eleven"),
    (12, "Twelve"),
    (13, "Thirteen"),
    (14, "Fourteen"),
    (15, "Fifteen"),
    (16, "Sixteen"),
    (17, "Seventeen"),
    (18, "Eighteen"),
    (19, "Nineteen"),
    (20, "Twenty"),
    (21, "TwentyOne"),
    (22, "TwentyTwo"),
    (23, "TwentyThree"),
    (24, "TwentyFour"),
    (25, "TwentyFive"),
    (30, "Thirty"),
    (50, "Fifty"),
    (100, "OneHundred"),
];

/// English word for a number in the lookup table
pub fn number_word(n: u32) -> Option<&'static str> {
    NUMBER_WORDS
        .iter()
        .find(|(value, _)| *value == n)
        .map(|(_, word)| *word)
}

/// Word form of a digit string; the digits themselves when not in the table.
///
/// Matches on the exact text, so `"07"` stays `"07"`.
fn digits_to_word(digits: &str) -> &str {
    match digits.parse::<u32>() {
        Ok(n) if n.to_string() == digits => number_word(n).unwrap_or(digits),
        _ => digits,
    }
}

/// Canonicalize a raw icon name using the default `lm-` prefix
pub fn canonicalize(raw: &str) -> CanonicalName {
    canonicalize_with(raw, &[DEFAULT_PREFIX])
}

/// Canonicalize a raw icon name, stripping the first matching prefix
///
/// Never fails: numbers outside the lookup table pass through as digits.
pub fn canonicalize_with<S: AsRef<str>>(raw: &str, prefixes: &[S]) -> CanonicalName {
    let stripped = strip_prefix(raw, prefixes);
    let converted: Vec<String> = stripped.split(DELIMITER).map(convert_token).collect();
    CanonicalName::new(pascalize(&converted.join(&DELIMITER.to_string())))
}

fn strip_prefix<'a, S: AsRef<str>>(raw: &'a str, prefixes: &[S]) -> &'a str {
    prefixes
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| !p.is_empty())
        .find_map(|p| raw.strip_prefix(p))
        .unwrap_or(raw)
}

/// Convert one delimiter-separated token
///
/// - `"3"` → `"Three"`
/// - `"3d"` → `"ThreeD"`
/// - anything else is returned unchanged
pub fn convert_token(token: &str) -> String {
    if token.is_empty() {
        return String::new();
    }

    if token.bytes().all(|b| b.is_ascii_digit()) {
        return digits_to_word(token).to_string();
    }

    let split = token
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(token.len());
    let (digits, letters) = token.split_at(split);
    if !digits.is_empty() && letters.bytes().all(|b| b.is_ascii_alphabetic()) {
        return format!("{}{}", digits_to_word(digits), capitalize(letters));
    }

    token.to_string()
}

/// Upper-case the first character of every segment and drop the delimiters
pub fn pascalize(name: &str) -> String {
    name.split(DELIMITER).map(capitalize).collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check that a raw name and its canonical form can name generated files
///
/// Both end up in output paths, so neither may be empty or carry path
/// syntax.
pub fn check_name(raw: &str, canonical: &CanonicalName) -> LuminResult<()> {
    let invalid = |reason: &str| LuminError::InvalidName {
        name: raw.to_string(),
        reason: reason.to_string(),
    };

    if raw.contains(['/', '\\']) {
        return Err(invalid("path separators are not allowed"));
    }
    let name = canonical.as_str();
    if name.is_empty() {
        return Err(invalid("nothing left after removing the prefix"));
    }
    if name.contains(['/', '\\', '.']) {
        return Err(invalid("component names cannot contain '/', '\\' or '.'"));
    }
    Ok(())
}

/// Split an SVG file name into raw name and weight
///
/// `star-bold.svg` → (`star`, Bold); `star.svg` → (`star`, Regular).
pub fn parse_file_name(file_name: &str) -> (String, Weight) {
    let stem = file_name.replacen(SVG_EXTENSION, "", 1);

    if let Some((name, suffix)) = stem.rsplit_once(DELIMITER) {
        if let Some(weight) = Weight::from_name(suffix) {
            if !name.is_empty() {
                return (name.to_string(), weight);
            }
        }
    }

    (stem, Weight::Regular)
}

/// On-disk file name for one weight of a custom asset
pub fn asset_file_name(raw_name: &str, weight: Weight) -> String {
    match weight {
        Weight::Regular => format!("{}{}", raw_name, SVG_EXTENSION),
        other => format!("{}{}{}{}", raw_name, DELIMITER, other, SVG_EXTENSION),
    }
}
