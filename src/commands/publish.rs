//! Publish command handler

use anyhow::Result;

use lumin::publish::{PublishEventSink, PublishOptions, Publisher, SystemRunner};
use lumin::JsonEventSink;

use super::GlobalArgs;
use crate::ui::views::publish::{render_publish_header, render_publish_summary, ConsolePublishSink};

/// Execute the publish command
pub fn cmd_publish(options: PublishOptions, global: &GlobalArgs) -> Result<()> {
    let root = global.root()?;
    let config = global.load_config(&root)?;
    let ui = global.ui(&config);

    if !ui.json {
        print!("{}", render_publish_header(&options, ui.color, ui.unicode));
    }

    let sink: Box<dyn PublishEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsolePublishSink::new(ui))
    };

    let runner = SystemRunner;
    let report = Publisher::new(&root, &runner).publish(&options, sink.as_ref())?;

    if !ui.json {
        print!("{}", render_publish_summary(&report, ui.color, ui.unicode));
    }

    Ok(())
}
