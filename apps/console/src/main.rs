mod app;
mod commands;
mod controller;
mod docs;
mod event;
mod runtime;
mod theme;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "whisperui",
    about = "Console dashboard for the WhisperAPI transcription service"
)]
struct Cli {
    /// Base URL of the WhisperAPI deployment
    #[arg(long, env = "WHISPERUI_BASE_URL")]
    base_url: String,

    /// Directory the response download is saved into
    #[arg(long, env = "WHISPERUI_DOWNLOAD_DIR", default_value = ".")]
    download_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive dashboard (the default)
    Tui,
    /// One-shot submission without the dashboard
    Transcribe(commands::transcribe::Args),
    /// Print the device the API is running on
    Device,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Command::Tui) => {
            // No stdout subscriber here: log lines would tear the alternate
            // screen apart.
            commands::tui::run(commands::tui::Args {
                base_url: cli.base_url,
                download_dir: cli.download_dir,
            })
            .await;
            ExitCode::SUCCESS
        }
        Some(Command::Transcribe(args)) => {
            init_tracing();
            commands::transcribe::run(cli.base_url, args).await
        }
        Some(Command::Device) => {
            init_tracing();
            commands::device::run(cli.base_url).await
        }
    }
}
