use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One transcript segment. `speaker` is null when diarisation was disabled
/// for the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(default)]
    pub speaker: Option<String>,
}

/// The audit step attaches a `result` entry to every file: the verdict text
/// when auditing succeeded, or `{"error": …}` when auditing that transcript
/// failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuditOutcome {
    Verdict(String),
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSuccess {
    pub filename: String,
    pub language: String,
    pub segments: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AuditOutcome>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileFailure {
    pub filename: String,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AuditOutcome>,
}

/// Per-file outcome. The wire format carries no discriminator; the shapes are
/// told apart by their keys (`language`/`segments` vs `error`), so `Success`
/// must be tried first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileOutcome {
    Success(FileSuccess),
    Failure(FileFailure),
}

impl FileOutcome {
    pub fn filename(&self) -> &str {
        match self {
            Self::Success(s) => &s.filename,
            Self::Failure(f) => &f.filename,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Response of `POST /transcribe-files`: a JSON object keyed by the
/// stringified 1-based file ordinal. Keys are parsed into `u32` so iteration
/// follows submission order (`"10"` after `"9"`, not after `"1"`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranscribeResponse(pub BTreeMap<u32, FileOutcome>);

impl TranscribeResponse {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, ordinal: u32) -> Option<&FileOutcome> {
        self.0.get(&ordinal)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &FileOutcome)> {
        self.0.iter().map(|(ordinal, outcome)| (*ordinal, outcome))
    }
}
