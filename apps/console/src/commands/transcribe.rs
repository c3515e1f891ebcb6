use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use console_core::{SelectedFile, SubmissionController, SubmissionResult};
use whisperui_client::WhisperApiClient;
use whisperui_http::ReqwestClient;
use whisperui_interface::{DiarisationMethod, ModelSize, TranscriptionMethod};

use crate::runtime::LogRuntime;

/// One-shot submission without the dashboard; prints the response JSON the
/// download action would save.
#[derive(clap::Args)]
pub struct Args {
    /// Audio file to attach; repeat for a batch
    #[arg(long = "file", value_name = "PATH", required = true)]
    pub files: Vec<PathBuf>,

    #[arg(long, default_value_t = ModelSize::Large)]
    pub model_size: ModelSize,

    #[arg(long, default_value_t = TranscriptionMethod::WhisperX)]
    pub transcription_method: TranscriptionMethod,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set, value_name = "BOOL")]
    pub diarisation: bool,

    #[arg(long, default_value_t = DiarisationMethod::WhisperXPipeline)]
    pub diarisation_method: DiarisationMethod,

    #[arg(long, default_value_t = 2)]
    pub num_speakers: i64,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set, value_name = "BOOL")]
    pub audit: bool,

    #[arg(long, default_value = "")]
    pub criteria: String,

    /// Directory to save response.json into, in addition to printing it
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

pub async fn run(base_url: String, args: Args) -> ExitCode {
    let client = WhisperApiClient::new(ReqwestClient::new(base_url));
    let mut controller = SubmissionController::new(client, Arc::new(LogRuntime));

    {
        let form = controller.form_mut();
        form.model_size = args.model_size;
        form.transcription_method = args.transcription_method;
        form.diarisation = args.diarisation;
        form.diarisation_method = args.diarisation_method;
        form.num_speakers = args.num_speakers;
        form.audit = args.audit;
        form.criteria = args.criteria;
    }

    let mut loaded = Vec::new();
    for path in &args.files {
        match SelectedFile::load(path).await {
            Ok(file) => loaded.push(file),
            Err(err) => {
                eprintln!("failed to read {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        }
    }
    controller.add_files(loaded);

    if let Err(err) = controller.submit().await {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match controller.response_json() {
        Ok(Some(json)) => println!("{json}"),
        Ok(None) => {}
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    }

    if let Some(dir) = &args.output {
        match controller.write_response_json(dir) {
            Ok(Some(path)) => eprintln!("saved {}", path.display()),
            Ok(None) => {}
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }

    match controller.result() {
        Some(SubmissionResult::TransportError(_)) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
