use std::process::ExitCode;

use whisperui_client::WhisperApiClient;
use whisperui_http::ReqwestClient;

pub async fn run(base_url: String) -> ExitCode {
    let client = WhisperApiClient::new(ReqwestClient::new(base_url));

    match client.get_device().await {
        Ok(device) => {
            println!("{device}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::warn!(error = %err, "get_device_failed");
            println!("- N.A. -");
            ExitCode::FAILURE
        }
    }
}
