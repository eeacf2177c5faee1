//! Property tests for SVG normalization.

use std::path::Path;

use proptest::prelude::*;

use lumin::models::Weight;
use lumin::normalize::{normalize, validate_svg, NormalizeOptions, SourceContext};

fn ctx() -> SourceContext<'static> {
    SourceContext {
        name: "prop",
        weight: Weight::Regular,
        file: Path::new("prop.svg"),
    }
}

fn options() -> impl Strategy<Value = NormalizeOptions> {
    prop_oneof![
        Just(NormalizeOptions::custom()),
        Just(NormalizeOptions::legacy())
    ]
}

fn body() -> impl Strategy<Value = String> {
    let element = prop_oneof![
        "[MLHVZ0-9 .]{0,24}".prop_map(|d| format!(r#"<path d="{}"/>"#, d)),
        "[MLZ0-9 ]{0,16}".prop_map(|d| format!(r#"<path fill="currentColor" d="{}"/>"#, d)),
        "[0-9]{1,3}".prop_map(|r| format!(r##"<circle r="{}" fill="#000"/>"##, r)),
        "[0-9]{1,3}".prop_map(|w| format!(r#"<line stroke-width="{}" stroke-linecap="round"/>"#, w)),
        Just(r#"<rect width="256" height="256" fill="none"/>"#.to_string()),
        Just("<title/>".to_string()),
    ];
    proptest::collection::vec(element, 0..=6).prop_map(|parts| parts.concat())
}

fn document() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop_oneof![
            Just(String::new()),
            Just(r#" viewBox="0 0 24 24""#.to_string()),
            Just(r#" viewBox="0 0 256 256""#.to_string()),
            "[0-9]{1,3}".prop_map(|n| format!(r#" viewBox="0 0 {} {}""#, n, n)),
        ],
        body(),
    )
        .prop_map(|(prolog, view_box, body)| {
            let prolog = if prolog {
                r#"<?xml version="1.0" encoding="UTF-8"?>"#
            } else {
                ""
            };
            format!(
                r#"{}<svg xmlns="http://www.w3.org/2000/svg"{}>{}</svg>"#,
                prolog, view_box, body
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 192,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: fragments never contain the root wrapper or an XML prolog.
    #[test]
    fn property_fragment_has_no_wrapper(doc in document(), options in options()) {
        let normalized = normalize(&doc, ctx(), &options).unwrap();
        let fragment = normalized.fragment.as_str();
        prop_assert!(!fragment.contains("<svg"));
        prop_assert!(!fragment.contains("</svg>"));
        prop_assert!(!fragment.contains("<?xml"));
        prop_assert!(!fragment.contains("currentColor"));
        prop_assert!(!fragment.contains("stroke-width"));
    }

    /// PROPERTY: the normalized root carries exactly the target viewBox.
    #[test]
    fn property_root_has_target_view_box(doc in document(), options in options()) {
        let validated = validate_svg(&doc, ctx(), &options).unwrap();
        let expected = format!(r#"viewBox="{}""#, options.view_box);
        prop_assert_eq!(validated.svg.matches("viewBox=").count(), 1);
        prop_assert!(validated.svg.contains(&expected));
    }

    /// PROPERTY: validating twice is the same as validating once.
    #[test]
    fn property_validation_is_idempotent(doc in document(), options in options()) {
        let once = validate_svg(&doc, ctx(), &options).unwrap();
        let twice = validate_svg(&once.svg, ctx(), &options).unwrap();
        prop_assert_eq!(&twice.svg, &once.svg);
        prop_assert!(twice.notes.is_empty());
    }

    /// PROPERTY: markup without an svg root is rejected, never panics.
    #[test]
    fn property_non_svg_is_rejected(text in "[^<]{0,64}", options in options()) {
        prop_assert!(normalize(&text, ctx(), &options).is_err());
    }
}
