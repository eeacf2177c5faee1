use std::path::Path;

use lumin::assets::MissingWeights;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_verify_header(assets: &Path, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Verify, "Lumin Verify");
    header.add("Assets", assets.display().to_string());
    header.render(supports_color, supports_unicode)
}

pub fn render_verify_report(
    icon_count: usize,
    missing: &[MissingWeights],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for entry in missing {
        let weights: Vec<&str> = entry.missing.iter().map(|w| w.as_str()).collect();
        out.push_str(&format!(
            "{} {} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(entry.name.as_str()).render(supports_color),
            ColoredText::dim(format!("missing {}", weights.join(", "))).render(supports_color)
        ));
    }

    let mut summary = if missing.is_empty() {
        ResultSummary::success("All icons have every weight")
    } else {
        ResultSummary::partial("Incomplete icons found")
    };
    summary.add_stat("icons checked", icon_count);
    summary.add_stat("incomplete", missing.len());
    if !missing.is_empty() {
        summary.with_next_step("Add the missing weight files and run verify again");
    }
    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}
