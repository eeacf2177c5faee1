//! JSON Event Sink
//!
//! Outputs add and publish events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use serde_json::json;

use crate::pipeline::{AddEvent, AddEventSink};
use crate::publish::{PublishEvent, PublishEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl AddEventSink for JsonEventSink {
    fn on_event(&self, event: AddEvent) {
        let json = match event {
            AddEvent::Started { input, file_count } => json!({
                "event": "start",
                "command": "add",
                "input": input.display().to_string(),
                "file_count": file_count,
            }),

            AddEvent::FileProcessed { path, name, weight } => json!({
                "event": "item_processed",
                "command": "add",
                "path": path.display().to_string(),
                "name": name,
                "weight": weight.as_str(),
            }),

            AddEvent::Adjusted {
                name,
                weight,
                message,
            } => json!({
                "event": "adjusted",
                "command": "add",
                "name": name,
                "weight": weight.as_str(),
                "message": message,
            }),

            AddEvent::FileSkipped { path, reason } => json!({
                "event": "item_skipped",
                "command": "add",
                "path": path.display().to_string(),
                "reason": reason,
            }),

            AddEvent::IconSkipped { name, reason } => json!({
                "event": "icon_skipped",
                "command": "add",
                "name": name,
                "reason": reason,
            }),

            AddEvent::Warning { message } => json!({
                "event": "warning",
                "command": "add",
                "message": message,
            }),

            AddEvent::Planned {
                name,
                weights,
                files,
            } => json!({
                "event": "planned",
                "command": "add",
                "name": name.as_str(),
                "weights": weights.iter().map(|w| w.as_str()).collect::<Vec<_>>(),
                "files": files
                    .iter()
                    .map(|f| f.display().to_string())
                    .collect::<Vec<_>>(),
            }),

            AddEvent::AssetWritten { path, fallback } => json!({
                "event": "item_written",
                "command": "add",
                "path": path.display().to_string(),
                "fallback": fallback.map(|w| w.as_str()),
            }),

            AddEvent::ComponentsGenerated { name } => json!({
                "event": "generated",
                "command": "add",
                "name": name.as_str(),
            }),

            AddEvent::ExportsUpdated {
                icon_count,
                appended,
            } => json!({
                "event": "exports_updated",
                "command": "add",
                "icon_count": icon_count,
                "appended": appended,
            }),

            AddEvent::Completed {
                icon_count,
                written_count,
                skipped_count,
                dry_run,
            } => {
                let status = if skipped_count == 0 {
                    "success"
                } else {
                    "partial"
                };
                json!({
                    "event": "complete",
                    "command": "add",
                    "status": status,
                    "icons": icon_count,
                    "written": written_count,
                    "skipped": skipped_count,
                    "dry_run": dry_run,
                })
            }
        };

        self.write_event(json);
    }
}

impl PublishEventSink for JsonEventSink {
    fn on_event(&self, event: PublishEvent) {
        let json = match event {
            PublishEvent::Package { name, version } => json!({
                "event": "start",
                "command": "publish",
                "package": name,
                "version": version,
            }),
            PublishEvent::StepStarted { description } => json!({
                "event": "step_start",
                "command": "publish",
                "step": description,
            }),
            PublishEvent::StepSucceeded { description } => json!({
                "event": "step_complete",
                "command": "publish",
                "step": description,
            }),
            PublishEvent::Warning { message } => json!({
                "event": "warning",
                "command": "publish",
                "message": message,
            }),
            PublishEvent::Completed { package, dry_run } => json!({
                "event": "complete",
                "command": "publish",
                "status": "success",
                "package": package,
                "dry_run": dry_run,
            }),
        };

        self.write_event(json);
    }
}
