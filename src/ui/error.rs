use std::path::Path;

use lumin::LuminError;

use crate::ui::ci::{github_actions_annotation, is_github_actions, AnnotationLevel};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_capabilities;

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );

    if let Some(hint) = err.downcast_ref::<LuminError>().and_then(fix_hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(hint).render(supports_color)
        ));
    }

    out
}

fn fix_hint(err: &LuminError) -> Option<&'static str> {
    match err {
        LuminError::MissingInput => Some("Run `lumin add --help` for usage"),
        LuminError::InvalidName { .. } => {
            Some("Use a plain name such as `lm-paint-bucket` (letters, digits and '-')")
        }
        LuminError::BadWeightFolder { .. } => {
            Some("Asset folders must be named after a weight: regular, thin, light, bold, fill, duotone")
        }
        LuminError::InvalidConfig { .. } => Some("Fix lumin.toml and try again"),
        LuminError::NpmAuth => Some("Run `npm login`, then publish again"),
        LuminError::DistMissing { .. } => Some("Run `npm run build` or drop --skip-build"),
        _ => None,
    }
}

fn error_file(err: &LuminError) -> Option<&Path> {
    match err {
        LuminError::InvalidSvg { file, .. } | LuminError::InvalidConfig { file, .. } => {
            Some(file.as_path())
        }
        LuminError::FileNotFound { path } | LuminError::NotSvg { path } => Some(path.as_path()),
        LuminError::BadWeightFolder { root, .. } => Some(root.as_path()),
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = detect_capabilities();
    if caps.is_ci && is_github_actions() {
        let file = err
            .downcast_ref::<LuminError>()
            .and_then(error_file)
            .map(|p| p.to_string_lossy().into_owned());
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &err.to_string(),
                file.as_deref(),
                Some("Lumin"),
            )
        );
    }

    eprint!("{}", format_error(err));
}
