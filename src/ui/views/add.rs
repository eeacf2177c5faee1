use std::path::{Path, PathBuf};

use lumin::pipeline::{AddEvent, AddEventSink, AddInput, AddResult};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_add_header(
    input: &AddInput,
    preset: &str,
    dry_run: bool,
    overwrite: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run { "Lumin Add (dry run)" } else { "Lumin Add" };
    let mut header = CommandHeader::new(Icon::Add, title);
    match input {
        AddInput::Folder(path) => header.add("Folder", path.display().to_string()),
        AddInput::File { path, name } => {
            header.add("Icon", path.display().to_string());
            header.add("Name", name.as_str());
        }
    }
    header.add("Preset", preset);
    if overwrite {
        header.add("Mode", "overwrite existing icons");
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_add_summary(
    result: &AddResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let clean = result.skipped.is_empty() && result.warnings.is_empty();
    let title = match (result.dry_run, clean) {
        (true, _) => "Dry Run Complete",
        (false, true) => "Add Complete",
        (false, false) => "Add Results",
    };

    let mut summary = if clean {
        ResultSummary::success(title)
    } else {
        ResultSummary::partial(title)
    };

    summary.add_stat("icons", result.icon_count());
    if result.dry_run {
        summary.add_stat("files would be written", result.planned.len());
        summary.add_stat("export lines to append", result.exports_appended);
    } else {
        summary.add_stat("files written", result.written.len());
        summary.add_stat("export lines appended", result.exports_appended);
    }
    if !result.skipped.is_empty() {
        summary.add_warning(format!("{} skipped", plural(result.skipped.len(), "item")));
    }
    if !result.warnings.is_empty() {
        summary.add_warning(format!(
            "{} with missing weights",
            plural(result.warnings.len(), "icon")
        ));
    }

    if result.dry_run && result.icon_count() > 0 {
        summary.with_next_step("Run again without --dry-run to write the files");
    } else if !result.dry_run && result.has_changes() {
        summary.with_next_step("Run `lumin verify` to check the corpus");
    }

    summary.render(supports_color, supports_unicode)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// One `add` event as console text; `None` when the event is quiet at
/// this verbosity. The flag is true for lines meant for stderr.
pub fn render_add_event(
    event: &AddEvent,
    root: &Path,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<(String, bool)> {
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);
    let rel = |path: &Path| path.strip_prefix(root).unwrap_or(path).display().to_string();

    match event {
        AddEvent::Started { file_count, .. } => Some((
            format!(
                "{} Processing {}",
                icon(Icon::Progress),
                plural(*file_count, "file")
            ),
            false,
        )),
        AddEvent::FileProcessed { name, weight, .. } if verbose > 0 => Some((
            format!("  {} {} ({})", icon(Icon::Success), name, weight),
            false,
        )),
        AddEvent::Adjusted {
            name,
            weight,
            message,
        } => Some((
            format!(
                "{} {}",
                icon(Icon::Warning),
                ColoredText::warning(format!("{} ({}): {}", name, weight, message))
                    .render(supports_color)
            ),
            true,
        )),
        AddEvent::FileSkipped { path, reason } => Some((
            format!(
                "{} Skipped {}: {}",
                icon(Icon::Warning),
                path.display(),
                reason
            ),
            true,
        )),
        AddEvent::IconSkipped { reason, .. } => {
            Some((format!("{} {}", icon(Icon::Warning), reason), true))
        }
        AddEvent::Warning { message } => {
            Some((format!("{} {}", icon(Icon::Warning), message), true))
        }
        AddEvent::Planned {
            name,
            weights,
            files,
        } => {
            let weights: Vec<&str> = weights.iter().map(|w| w.as_str()).collect();
            let mut out = format!(
                "{} {} {}",
                icon(Icon::Preview),
                ColoredText::info(name.as_str()).bold().render(supports_color),
                ColoredText::dim(format!("[{}]", weights.join(", "))).render(supports_color)
            );
            for file in files {
                out.push_str(&format!("\n    {}", rel(file)));
            }
            Some((out, false))
        }
        AddEvent::AssetWritten { path, fallback } if verbose > 0 => {
            let note = fallback
                .map(|w| {
                    ColoredText::dim(format!(" (copied from {})", w)).render(supports_color)
                })
                .unwrap_or_default();
            Some((
                format!("  {} {}{}", icon(Icon::Success), rel(path), note),
                false,
            ))
        }
        AddEvent::ComponentsGenerated { name } => Some((
            format!("{} Generated {}", icon(Icon::Success), name),
            false,
        )),
        AddEvent::ExportsUpdated { appended, .. } => Some((
            format!(
                "{} Updated exports ({} appended)",
                icon(Icon::Success),
                plural(*appended, "line")
            ),
            false,
        )),
        _ => None,
    }
}

/// Human-readable progress for `lumin add`
pub struct ConsoleAddSink {
    ui: UiContext,
    root: PathBuf,
}

impl ConsoleAddSink {
    pub fn new(ui: UiContext, root: impl Into<PathBuf>) -> Self {
        Self {
            ui,
            root: root.into(),
        }
    }
}

impl AddEventSink for ConsoleAddSink {
    fn on_event(&self, event: AddEvent) {
        let rendered = render_add_event(
            &event,
            &self.root,
            self.ui.verbose,
            self.ui.color,
            self.ui.unicode,
        );
        match rendered {
            Some((line, true)) => eprintln!("{}", line),
            Some((line, false)) => println!("{}", line),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumin::models::Weight;

    #[test]
    fn quiet_events_need_verbose() {
        let event = AddEvent::FileProcessed {
            path: PathBuf::from("icons/star.svg"),
            name: "star".to_string(),
            weight: Weight::Bold,
        };
        assert!(render_add_event(&event, Path::new("/"), 0, false, false).is_none());
        let (line, stderr) = render_add_event(&event, Path::new("/"), 1, false, false).unwrap();
        assert_eq!(line, "  [OK] star (bold)");
        assert!(!stderr);
    }

    #[test]
    fn skips_go_to_stderr() {
        let event = AddEvent::FileSkipped {
            path: PathBuf::from("icons/broken.svg"),
            reason: "missing <svg> root".to_string(),
        };
        let (line, stderr) = render_add_event(&event, Path::new("/"), 0, false, false).unwrap();
        assert!(stderr);
        assert!(line.contains("Skipped icons/broken.svg"));
    }

    #[test]
    fn adjustments_warn_without_verbose() {
        let event = AddEvent::Adjusted {
            name: "star".to_string(),
            weight: Weight::Regular,
            message: "added viewBox=\"0 0 24 24\"".to_string(),
        };
        let (line, stderr) = render_add_event(&event, Path::new("/"), 0, false, false).unwrap();
        assert!(stderr);
        assert_eq!(line, "[WARN] star (regular): added viewBox=\"0 0 24 24\"");
    }

    #[test]
    fn fallback_assets_name_their_source() {
        let event = AddEvent::AssetWritten {
            path: PathBuf::from("/lib/src/assets/thin/star-thin.svg"),
            fallback: Some(Weight::Regular),
        };
        let (line, _) = render_add_event(&event, Path::new("/lib"), 1, false, false).unwrap();
        assert_eq!(
            line,
            "  [OK] src/assets/thin/star-thin.svg (copied from regular)"
        );
    }

    #[test]
    fn header_lists_single_icon_name() {
        let input = AddInput::File {
            path: PathBuf::from("star.svg"),
            name: "lm-star".to_string(),
        };
        let rendered = render_add_header(&input, "custom", true, false, false, false);
        assert!(rendered.contains("[ADD] Lumin Add (dry run)"));
        assert!(rendered.contains("Name: lm-star"));
        assert!(rendered.contains("Preset: custom"));
    }

    #[test]
    fn empty_result_is_clean() {
        let rendered = render_add_summary(&AddResult::default(), false, false);
        assert!(rendered.contains("[OK] Add Complete"));
        assert!(rendered.contains("0 files written"));
    }
}
