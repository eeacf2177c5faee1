#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use lumin::models::Weight;
use lumin::normalize::{normalize, NormalizeOptions, SourceContext};

fuzz_target!(|data: &[u8]| {
    if let Ok(markup) = std::str::from_utf8(data) {
        let ctx = SourceContext {
            name: "fuzz",
            weight: Weight::Regular,
            file: Path::new("fuzz.svg"),
        };
        for options in [NormalizeOptions::custom(), NormalizeOptions::legacy()] {
            // must never panic; invalid markup is an error
            let _ = normalize(markup, ctx, &options);
        }
    }
});
