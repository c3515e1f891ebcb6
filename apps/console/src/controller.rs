use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use console_core::{
    ConsoleEvent, FieldErrors, OptionsForm, SelectedFile, SubmissionController, SubmissionResult,
    perform_submission,
};
use whisperui_client::WhisperApiClient;
use whisperui_http::ReqwestClient;

use crate::runtime::ChannelRuntime;

/// User-triggered mutations, sent from the TUI to the controller task.
#[derive(Debug)]
pub enum Command {
    AddFiles(Vec<PathBuf>),
    RemoveFile(usize),
    UpdateForm(OptionsForm),
    Submit,
    Download(PathBuf),
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Console(ConsoleEvent),
    State(Snapshot),
    Downloaded(PathBuf),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct FileRow {
    pub name: String,
    pub size_label: String,
}

/// Everything the renderer needs for one frame, refreshed after every
/// controller step.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub device: Option<String>,
    pub files: Vec<FileRow>,
    pub form: OptionsForm,
    pub errors: FieldErrors,
    pub pending: bool,
    pub can_submit: bool,
    pub response_json: Option<String>,
}

/// Spawns the task that owns the controller. Commands are processed one at a
/// time; the outbound request itself runs on its own task so the form stays
/// editable while a submission is pending.
pub fn spawn(base_url: String, ui_tx: mpsc::UnboundedSender<UiEvent>) -> mpsc::UnboundedSender<Command> {
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    tokio::spawn(run(base_url, cmd_rx, ui_tx));
    cmd_tx
}

async fn run(
    base_url: String,
    mut commands: mpsc::UnboundedReceiver<Command>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
) {
    let runtime = Arc::new(ChannelRuntime::new(ui_tx.clone()));
    let client = WhisperApiClient::new(ReqwestClient::new(base_url));
    let mut controller = SubmissionController::new(client, runtime);

    controller.refresh_device().await;
    send_state(&controller, &ui_tx);

    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<SubmissionResult>();

    loop {
        tokio::select! {
            maybe_command = commands.recv() => {
                let Some(command) = maybe_command else { break };
                handle_command(&mut controller, command, &done_tx, &ui_tx).await;
                send_state(&controller, &ui_tx);
            }
            Some(result) = done_rx.recv() => {
                controller.complete_submission(result);
                send_state(&controller, &ui_tx);
            }
        }
    }
}

async fn handle_command(
    controller: &mut SubmissionController<ReqwestClient>,
    command: Command,
    done_tx: &mpsc::UnboundedSender<SubmissionResult>,
    ui_tx: &mpsc::UnboundedSender<UiEvent>,
) {
    match command {
        Command::AddFiles(paths) => {
            let mut loaded = Vec::new();
            for path in paths {
                match SelectedFile::load(&path).await {
                    Ok(file) => loaded.push(file),
                    Err(err) => {
                        let _ = ui_tx.send(UiEvent::Error(format!("{}: {err}", path.display())));
                    }
                }
            }
            controller.add_files(loaded);
        }

        Command::RemoveFile(index) => controller.remove_file(index),

        Command::UpdateForm(form) => {
            *controller.form_mut() = form;
        }

        Command::Submit => match controller.begin_submission() {
            Ok(prepared) => {
                let client = controller.client_handle();
                let done_tx = done_tx.clone();
                tokio::spawn(async move {
                    let result = perform_submission(&client, prepared).await;
                    let _ = done_tx.send(result);
                });
            }
            Err(err) => {
                let _ = ui_tx.send(UiEvent::Error(err.to_string()));
            }
        },

        Command::Download(dir) => match controller.write_response_json(&dir) {
            Ok(Some(path)) => {
                let _ = ui_tx.send(UiEvent::Downloaded(path));
            }
            Ok(None) => {}
            Err(err) => {
                let _ = ui_tx.send(UiEvent::Error(err.to_string()));
            }
        },
    }
}

fn send_state(
    controller: &SubmissionController<ReqwestClient>,
    ui_tx: &mpsc::UnboundedSender<UiEvent>,
) {
    let snapshot = Snapshot {
        device: controller.device().map(str::to_string),
        files: controller
            .attachments()
            .files()
            .iter()
            .map(|file| FileRow {
                name: file.name.clone(),
                size_label: file.human_size(),
            })
            .collect(),
        form: controller.form().clone(),
        errors: controller.form().validate(),
        pending: controller.is_pending(),
        can_submit: controller.can_submit(),
        response_json: controller.response_json().ok().flatten(),
    };

    let _ = ui_tx.send(UiEvent::State(snapshot));
}
