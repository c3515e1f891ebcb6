use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::app::App;
use crate::controller;
use crate::event::{AppEvent, EventHandler};
use crate::ui;

pub struct Args {
    pub base_url: String,
    pub download_dir: PathBuf,
}

fn setup_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        original(info);
    }));
}

pub async fn run(args: Args) {
    let (ui_tx, ui_rx) = mpsc::unbounded_channel();
    let cmd_tx = controller::spawn(args.base_url, ui_tx);

    setup_panic_hook();
    let mut terminal = ratatui::init();
    let mut app = App::new(cmd_tx, args.download_dir);
    let mut events = EventHandler::new(ui_rx);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app)).ok();

        match events.next().await {
            Some(AppEvent::Key(key)) => app.handle_key(key),
            Some(AppEvent::Ui(event)) => app.handle_ui(event),
            Some(AppEvent::Tick) => app.on_tick(),
            Some(AppEvent::Resize) => {}
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    ratatui::restore();
}
