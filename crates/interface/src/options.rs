use serde::{Deserialize, Serialize};

/// Returned when parsing an option value that is not one of the enumerated
/// wire spellings.
#[derive(Debug, thiserror::Error)]
#[error("unknown {field} value: {value}")]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelSize {
    Base,
    Small,
    Medium,
    Large,
}

impl ModelSize {
    pub const ALL: [Self; 4] = [Self::Base, Self::Small, Self::Medium, Self::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl std::fmt::Display for ModelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModelSize {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                field: "model_size",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranscriptionMethod {
    #[serde(rename = "whisper")]
    Whisper,
    #[serde(rename = "whisperX")]
    WhisperX,
}

impl TranscriptionMethod {
    pub const ALL: [Self; 2] = [Self::Whisper, Self::WhisperX];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Whisper => "whisper",
            Self::WhisperX => "whisperX",
        }
    }
}

impl std::fmt::Display for TranscriptionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TranscriptionMethod {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                field: "transcription_method",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiarisationMethod {
    #[serde(rename = "clustering")]
    Clustering,
    #[serde(rename = "whisperX_pipeline")]
    WhisperXPipeline,
}

impl DiarisationMethod {
    pub const ALL: [Self; 2] = [Self::Clustering, Self::WhisperXPipeline];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clustering => "clustering",
            Self::WhisperXPipeline => "whisperX_pipeline",
        }
    }
}

impl std::fmt::Display for DiarisationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DiarisationMethod {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                field: "diarisation_method",
                value: s.to_string(),
            })
    }
}

/// The seven request parameters of `POST /transcribe-files`, carried as query
/// parameters (not body fields). `num_speakers` is deliberately a plain
/// integer: the server receives whatever value the form currently holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscribeQuery {
    pub model_size: ModelSize,
    pub transcription_method: TranscriptionMethod,
    pub diarisation: bool,
    pub diarisation_method: DiarisationMethod,
    pub num_speakers: i64,
    pub audit: bool,
    pub criteria: String,
}

impl Default for TranscribeQuery {
    fn default() -> Self {
        Self {
            model_size: ModelSize::Large,
            transcription_method: TranscriptionMethod::WhisperX,
            diarisation: true,
            diarisation_method: DiarisationMethod::WhisperXPipeline,
            num_speakers: 2,
            audit: true,
            criteria: String::new(),
        }
    }
}
