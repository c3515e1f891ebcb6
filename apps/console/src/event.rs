use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use tokio::sync::mpsc;

use crate::controller::UiEvent;

pub enum AppEvent {
    Key(KeyEvent),
    Ui(UiEvent),
    Resize,
    Tick,
}

/// Merges terminal input, controller events and a redraw tick into one
/// stream for the main loop.
pub struct EventHandler {
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,
    input: EventStream,
    tick: tokio::time::Interval,
}

impl EventHandler {
    pub fn new(ui_rx: mpsc::UnboundedReceiver<UiEvent>) -> Self {
        Self {
            ui_rx,
            input: EventStream::new(),
            tick: tokio::time::interval(Duration::from_millis(250)),
        }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        loop {
            tokio::select! {
                maybe_ui = self.ui_rx.recv() => {
                    return maybe_ui.map(AppEvent::Ui);
                }
                maybe_input = self.input.next() => {
                    match maybe_input {
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            return Some(AppEvent::Key(key));
                        }
                        Some(Ok(CrosstermEvent::Resize(_, _))) => return Some(AppEvent::Resize),
                        Some(Ok(_)) => continue,
                        Some(Err(_)) | None => return None,
                    }
                }
                _ = self.tick.tick() => {
                    return Some(AppEvent::Tick);
                }
            }
        }
    }
}
