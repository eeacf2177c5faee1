//! React component source generation
//!
//! Three files per icon:
//! - `defs/<Name>.tsx`: weight → fragment map
//! - `csr/<Name>.tsx`: client component over `IconBase`
//! - `ssr/<Name>.tsx`: server component over `SSRBase`

use std::fmt::Write as _;

use crate::bundle::IconGroup;
use crate::models::Weight;
use crate::normalize::{preview_base64, NormalizeOptions};

/// First line of every generated file
pub const GENERATED_HEADER: &str = "/* GENERATED FILE */";

/// Base component a wrapper renders through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentBase {
    /// Context-aware client component
    Client,
    /// Context-free server component
    Server,
}

impl ComponentBase {
    fn import_name(self) -> &'static str {
        match self {
            ComponentBase::Client => "IconBase",
            ComponentBase::Server => "SSRBase",
        }
    }
}

/// The three sources generated for one icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSources {
    pub defs: String,
    pub csr: String,
    pub ssr: String,
}

/// Generate all sources for one icon
pub fn generate(group: &IconGroup, options: &NormalizeOptions) -> GeneratedSources {
    let doc = doc_comment(group, options);
    GeneratedSources {
        defs: defs_source(group),
        csr: component_source(group, ComponentBase::Client, &doc, options),
        ssr: component_source(group, ComponentBase::Server, &doc, options),
    }
}

/// Weight map module
///
/// Entries follow emission order; weights without markup are left out.
pub fn defs_source(group: &IconGroup) -> String {
    let entries: Vec<String> = Weight::ALL
        .iter()
        .filter_map(|weight| {
            group.get(*weight).map(|entry| {
                format!(
                    "  [\"{}\", <>{}</>]",
                    weight,
                    entry.fragment.as_str().trim()
                )
            })
        })
        .collect();

    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');
    out.push_str("import * as React from \"react\";\n");
    out.push_str("import type { ReactElement } from \"react\";\n");
    out.push_str("import { IconWeight } from \"../lib\";\n");
    out.push('\n');
    out.push_str("export default new Map<IconWeight, ReactElement>([\n");
    out.push_str(&entries.join(",\n"));
    out.push_str("\n]);\n");
    out
}

/// JSDoc block with one preview thumbnail per weight
pub fn doc_comment(group: &IconGroup, options: &NormalizeOptions) -> String {
    let lines: Vec<String> = Weight::ALL
        .iter()
        .map(|weight| match group.get(*weight) {
            Some(entry) => format!(
                "@{} ![img](data:image/svg+xml;base64,{})",
                weight,
                preview_base64(&entry.svg, options)
            ),
            None => format!("@{} (missing)", weight),
        })
        .collect();

    format!("\n/**\n * {}\n */", lines.join("\n * "))
}

/// forwardRef wrapper component
pub fn component_source(
    group: &IconGroup,
    base: ComponentBase,
    doc: &str,
    options: &NormalizeOptions,
) -> String {
    let name = group.canonical.as_str();
    let base_name = base.import_name();

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "{header}\n\
         import * as React from \"react\";\n\
         import type {{ Icon }} from \"../lib/types\";\n\
         import {base} from \"../lib/{base}\";\n\
         import weights from \"../defs/{name}\";\n\
         \n\
         {doc}\n\
         const I: Icon = React.forwardRef((props, ref) => (\n  \
         <{base} ref={{ref}} {{...props}} weights={{weights}} viewBox=\"{view_box}\" />\n\
         ));\n\
         \n\
         I.displayName = \"{name}Icon\";\n\
         \n\
         export const {name} = I;\n\
         export {{ I as {name}Icon }};\n",
        header = GENERATED_HEADER,
        base = base_name,
        name = name,
        doc = doc,
        view_box = options.view_box,
    );
    out
}
