use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP client error: {0}")]
    Http(whisperui_http::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status of the failed request, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(err) => err
                .downcast_ref::<whisperui_http::StatusError>()
                .map(|status_err| status_err.status),
            Self::Json(_) => None,
        }
    }
}
