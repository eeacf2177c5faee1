//! Property tests for name canonicalization.

use proptest::prelude::*;

use lumin::naming::{canonicalize, canonicalize_with, number_word};

/// `ThreeDCube` → `Three-D-Cube`
fn split_capitalized(name: &str) -> String {
    let mut out = String::with_capacity(name.len() * 2);
    for (i, c) in name.char_indices() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(c);
    }
    out
}

fn raw_name() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z0-9]{1,6}", 1..=5).prop_map(|tokens| tokens.join("-"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: canonicalizing a canonical name changes nothing.
    #[test]
    fn property_canonicalize_is_idempotent(raw in raw_name()) {
        let once = canonicalize(&raw);
        let twice = canonicalize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: re-delimiting the capitalized segments of a canonical name
    /// and canonicalizing again gives the same name.
    #[test]
    fn property_canonicalize_is_idempotent_after_resplitting(raw in raw_name()) {
        let once = canonicalize(&raw);
        let delimited = split_capitalized(once.as_str());
        prop_assert_eq!(canonicalize(&delimited), once);
    }

    /// PROPERTY: canonical names are delimiter-free ASCII identifiers.
    #[test]
    fn property_canonical_names_are_pascal_identifiers(raw in raw_name()) {
        let name = canonicalize(&raw);
        prop_assert!(!name.as_str().contains('-'));
        prop_assert!(name.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        let first = name.as_str().chars().next().unwrap();
        prop_assert!(!first.is_ascii_lowercase());
    }

    /// PROPERTY: the default prefix is stripped exactly once.
    #[test]
    fn property_prefix_is_transparent(
        raw in raw_name().prop_filter("no nested prefix", |r| !r.starts_with("lm-"))
    ) {
        prop_assert_eq!(canonicalize(&format!("lm-{}", raw)), canonicalize(&raw));
        prop_assert_eq!(
            canonicalize_with(&raw, &[] as &[&str]),
            canonicalize(&raw)
        );
    }

    /// PROPERTY: numbers outside the table pass through as digits.
    #[test]
    fn property_unknown_numbers_pass_through(n in 0u32..100_000) {
        let name = canonicalize(&n.to_string());
        match number_word(n) {
            Some(word) => prop_assert_eq!(name.as_str(), word),
            None => prop_assert_eq!(name.as_str(), n.to_string()),
        }
    }

    /// PROPERTY: canonicalization never panics on arbitrary input.
    #[test]
    fn property_canonicalize_never_panics(raw in "(?s).{0,64}") {
        let _ = canonicalize(&raw);
    }
}

#[test]
fn resplit_examples() {
    for (raw, delimited) in [("3d-cube", "Three-D-Cube"), ("lm-42-dots", "42-Dots")] {
        let once = canonicalize(raw);
        assert_eq!(split_capitalized(once.as_str()), delimited);
        assert_eq!(canonicalize(delimited), once);
    }
}
