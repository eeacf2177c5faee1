//! Verify command handler
//!
//! Exits non-zero when any icon lacks one of the six weights.

use std::path::PathBuf;

use anyhow::{bail, Result};

use lumin::assets::{read_corpus, verify_corpus};
use lumin::LocalFs;

use super::GlobalArgs;
use crate::ui::ci::{github_actions_annotation, is_github_actions, AnnotationLevel};
use crate::ui::views::verify::{render_verify_header, render_verify_report};

/// Execute the verify command
pub fn cmd_verify(assets: Option<PathBuf>, global: &GlobalArgs) -> Result<()> {
    let root = global.root()?;
    let config = global.load_config(&root)?;
    let ui = global.ui(&config);

    let assets = assets.unwrap_or_else(|| root.join(&config.paths.core_assets));

    if !ui.json {
        print!("{}", render_verify_header(&assets, ui.color, ui.unicode));
    }

    let corpus = read_corpus(&assets, &LocalFs, &config.normalize.preset.options())?;
    let missing = verify_corpus(&corpus);

    if ui.json {
        for entry in &missing {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "missing_weights",
                "command": "verify",
                "name": entry.name,
                "missing": entry.missing.iter().map(|w| w.as_str()).collect::<Vec<_>>(),
            }));
        }
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "verify",
            "status": if missing.is_empty() { "success" } else { "failure" },
            "icons": corpus.len(),
            "incomplete": missing.len(),
        }));
    } else {
        if ui.caps.is_ci && is_github_actions() {
            for entry in &missing {
                let weights: Vec<&str> = entry.missing.iter().map(|w| w.as_str()).collect();
                println!(
                    "{}",
                    github_actions_annotation(
                        AnnotationLevel::Warning,
                        &format!("{} is missing {}", entry.name, weights.join(", ")),
                        None,
                        Some("Lumin verify"),
                    )
                );
            }
        }
        print!(
            "{}",
            render_verify_report(corpus.len(), &missing, ui.color, ui.unicode)
        );
    }

    if !missing.is_empty() {
        bail!(
            "{} of {} icons are missing weights",
            missing.len(),
            corpus.len()
        );
    }

    Ok(())
}
