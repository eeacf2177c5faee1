use lumin::publish::{PublishEvent, PublishEventSink, PublishOptions, PublishReport};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_publish_header(
    options: &PublishOptions,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if options.dry_run {
        "Lumin Publish (dry run)"
    } else {
        "Lumin Publish"
    };
    let mut header = CommandHeader::new(Icon::Publish, title);
    header.add("Tag", options.tag.as_str());
    let skipped: Vec<&str> = [
        (options.skip_tests, "tests"),
        (options.skip_build, "build"),
    ]
    .into_iter()
    .filter_map(|(skip, step)| skip.then_some(step))
    .collect();
    if !skipped.is_empty() {
        header.add("Skipping", skipped.join(", "));
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_publish_event(
    event: &PublishEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<(String, bool)> {
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);
    match event {
        PublishEvent::Package { name, version } => Some((
            format!(
                "{} Package {}",
                icon(Icon::Progress),
                ColoredText::info(format!("{}@{}", name, version)).render(supports_color)
            ),
            false,
        )),
        PublishEvent::StepStarted { description } => Some((
            format!("{} {}...", icon(Icon::Arrow), description),
            false,
        )),
        PublishEvent::StepSucceeded { description } => Some((
            format!("{} {}", icon(Icon::Success), description),
            false,
        )),
        PublishEvent::Warning { message } => {
            Some((format!("{} {}", icon(Icon::Warning), message), true))
        }
        PublishEvent::Completed { .. } => None,
    }
}

pub fn render_publish_summary(
    report: &PublishReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if report.dry_run {
        format!("Dry run for {} complete", report.package)
    } else {
        format!("Published {}", report.package)
    };
    let mut summary = ResultSummary::success(title);
    summary.add_stat("steps run", report.steps.len());
    if report.dry_run {
        summary.with_next_step("Run `lumin publish` to publish for real");
    }
    summary.render(supports_color, supports_unicode)
}

/// Human-readable progress for `lumin publish`
pub struct ConsolePublishSink {
    ui: UiContext,
}

impl ConsolePublishSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }
}

impl PublishEventSink for ConsolePublishSink {
    fn on_event(&self, event: PublishEvent) {
        match render_publish_event(&event, self.ui.color, self.ui.unicode) {
            Some((line, true)) => eprintln!("{}", line),
            Some((line, false)) => println!("{}", line),
            None => {}
        }
    }
}
