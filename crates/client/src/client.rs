use whisperui_http::HttpClient;
use whisperui_interface::{TranscribeQuery, TranscribeResponse};

use crate::error::Error;
use crate::multipart::{self, FilePart};
use crate::query;

/// Typed client for the WhisperAPI endpoints the dashboard drives.
#[derive(Clone)]
pub struct WhisperApiClient<C> {
    http: C,
}

impl<C: HttpClient> WhisperApiClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// `GET /get-device`. The endpoint returns the device name as a bare JSON
    /// string (`"cuda"` / `"cpu"`).
    pub async fn get_device(&self) -> Result<String, Error> {
        let bytes = self.http.get("/get-device").await.map_err(Error::Http)?;
        let device: String = serde_json::from_slice(&bytes)?;
        Ok(device)
    }

    /// `POST /transcribe-files`. Files travel as repeated `files` multipart
    /// parts in sequence order; the options travel as query parameters.
    pub async fn transcribe_files(
        &self,
        files: &[FilePart],
        options: &TranscribeQuery,
    ) -> Result<TranscribeResponse, Error> {
        let boundary = multipart::boundary();
        let body = multipart::form_data_body(files, &boundary);
        let path = format!("/transcribe-files?{}", query::encode(options));

        tracing::debug!(
            files = files.len(),
            body_bytes = body.len(),
            "transcribe_files_request"
        );

        let bytes = self
            .http
            .post(&path, body, &multipart::content_type(&boundary))
            .await
            .map_err(Error::Http)?;

        let response: TranscribeResponse = serde_json::from_slice(&bytes)?;
        tracing::debug!(entries = response.len(), "transcribe_files_response");
        Ok(response)
    }
}
