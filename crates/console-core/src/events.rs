use serde::Serialize;

use crate::submission::SubmissionResult;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ConsoleEvent {
    /// Result of the one-shot device query issued when the dashboard loads.
    /// `None` when the query failed; the UI renders that as `- N.A. -`.
    #[serde(rename = "deviceResolved")]
    DeviceResolved { device: Option<String> },

    /// One aggregate warning per selection batch, listing every candidate
    /// that exceeded the size limit.
    #[serde(rename = "filesRejected")]
    FilesRejected { names: Vec<String> },

    #[serde(rename = "submissionStarted")]
    SubmissionStarted,

    #[serde(rename = "submissionCompleted")]
    SubmissionCompleted { result: SubmissionResult },

    #[serde(rename = "submissionFailed")]
    SubmissionFailed { error: String },
}
