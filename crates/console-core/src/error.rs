use crate::form::FieldErrors;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("no files selected")]
    NoFilesSelected,

    #[error("invalid options: {0}")]
    InvalidOptions(FieldErrors),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
