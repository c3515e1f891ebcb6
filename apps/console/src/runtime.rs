use tokio::sync::mpsc;

use console_core::{ConsoleEvent, ConsoleRuntime};

use crate::controller::UiEvent;

/// Forwards controller events onto the dashboard's event channel.
pub struct ChannelRuntime {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl ChannelRuntime {
    pub fn new(tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self { tx }
    }
}

impl ConsoleRuntime for ChannelRuntime {
    fn emit(&self, event: ConsoleEvent) {
        let _ = self.tx.send(UiEvent::Console(event));
    }
}

/// Runtime for the headless subcommands: events land in the log, and the
/// size-limit warning keeps its user-facing wording.
pub struct LogRuntime;

impl ConsoleRuntime for LogRuntime {
    fn emit(&self, event: ConsoleEvent) {
        match &event {
            ConsoleEvent::FilesRejected { names } => {
                tracing::warn!(
                    "Files exceeding the 25MB size limit: {}",
                    names.join(", ")
                );
            }
            other => {
                if let Ok(json) = serde_json::to_string(other) {
                    tracing::debug!(event = %json, "console_event");
                }
            }
        }
    }
}
