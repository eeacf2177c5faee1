//! Add command handler

use std::path::PathBuf;

use anyhow::Result;

use lumin::pipeline::{run_add, AddEventSink, AddInput, AddOptions, AddResult};
use lumin::render::{render_svg, IconContext, IconProps};
use lumin::{JsonEventSink, LocalFs, LuminError, Preset};

use super::GlobalArgs;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::add::{render_add_header, render_add_summary, ConsoleAddSink};

/// `lumin add` arguments after clap validation
#[derive(Debug, Clone)]
pub struct AddArgs {
    pub folder: Option<PathBuf>,
    pub icon: Option<PathBuf>,
    pub name: Option<String>,
    pub dry_run: bool,
    pub render: bool,
    pub overwrite: bool,
    pub preset: Option<Preset>,
}

impl AddArgs {
    fn input(&self) -> Result<AddInput, LuminError> {
        match (&self.folder, &self.icon) {
            (Some(folder), _) => Ok(AddInput::Folder(folder.clone())),
            (None, Some(path)) => {
                let name = self
                    .name
                    .clone()
                    .filter(|n| !n.trim().is_empty())
                    .ok_or(LuminError::MissingName)?;
                Ok(AddInput::File {
                    path: path.clone(),
                    name,
                })
            }
            (None, None) => Err(LuminError::MissingInput),
        }
    }
}

/// Execute the add command
pub fn cmd_add(args: AddArgs, global: &GlobalArgs) -> Result<()> {
    // Argument errors come before any file is read
    let input = args.input()?;

    let root = global.root()?;
    let config = global.load_config(&root)?;
    let ui = global.ui(&config);

    let preset = args.preset.unwrap_or(config.normalize.preset);
    let options = AddOptions::from_config(input, &root, &config)
        .with_normalize(preset.options())
        .with_dry_run(args.dry_run)
        .with_overwrite(args.overwrite);

    if !ui.json {
        print!(
            "{}",
            render_add_header(
                &options.input,
                preset.as_str(),
                options.dry_run,
                options.overwrite,
                ui.color,
                ui.unicode,
            )
        );
    }

    let sink: Box<dyn AddEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleAddSink::new(ui, &root))
    };

    let result = run_add(&options, &LocalFs, sink.as_ref())?;

    if args.render {
        print_renders(&result, &options, &ui);
    }

    if !ui.json {
        print!("{}", render_add_summary(&result, ui.color, ui.unicode));
    }

    Ok(())
}

/// Rendered `<svg>` of every planned icon, drawn at the preset's canvas
fn print_renders(result: &AddResult, options: &AddOptions, ui: &UiContext) {
    let context = IconContext {
        view_box: Some(options.normalize.view_box.clone()),
        ..IconContext::default()
    };
    let props = IconProps::default();

    for group in result.bundle.groups() {
        let svg = render_svg(group, &props, Some(&context));
        if ui.json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "render",
                "command": "add",
                "name": group.canonical.as_str(),
                "svg": svg,
            }));
        } else {
            println!(
                "\n{} {}\n{}",
                Icon::Preview.colored(ui.color, ui.unicode),
                ColoredText::info(group.canonical.as_str())
                    .bold()
                    .render(ui.color),
                svg
            );
        }
    }
}
