use std::collections::BTreeMap;

use whisperui_interface::{DiarisationMethod, ModelSize, TranscribeQuery, TranscriptionMethod};

pub const MAX_CRITERIA_CHARS: usize = 1000;

/// Form fields, used both as error-map keys and as the navigation order of
/// the dashboard form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    TranscriptionMethod,
    ModelSize,
    Diarisation,
    DiarisationMethod,
    NumSpeakers,
    Audit,
    Criteria,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TranscriptionMethod => "transcription_method",
            Self::ModelSize => "model_size",
            Self::Diarisation => "diarisation",
            Self::DiarisationMethod => "diarisation_method",
            Self::NumSpeakers => "num_speakers",
            Self::Audit => "audit",
            Self::Criteria => "criteria",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// The user-editable option state. The enum-valued fields can only ever hold
/// one of their wire spellings, so validation is left with the two fields
/// that can actually go wrong.
///
/// Disabling diarisation or auditing hides the dependent fields and excludes
/// them from validation, but never resets them: re-enabling restores whatever
/// was entered before.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsForm {
    pub model_size: ModelSize,
    pub transcription_method: TranscriptionMethod,
    pub diarisation: bool,
    pub diarisation_method: DiarisationMethod,
    pub num_speakers: i64,
    pub audit: bool,
    pub criteria: String,
}

impl Default for OptionsForm {
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

impl OptionsForm {
    /// Pure validation, independent of any UI layer.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.diarisation {
            if self.num_speakers < 1 {
                errors.insert(Field::NumSpeakers, "Must be at least 1");
            } else if self.num_speakers > 10 {
                errors.insert(Field::NumSpeakers, "Must be 10 or less");
            }
        }

        if self.audit && self.criteria.chars().count() > MAX_CRITERIA_CHARS {
            errors.insert(Field::Criteria, "Must be 1000 characters or less");
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Raw passthrough to the request parameters; only `criteria` needs
    /// trimming, the enum fields are canonical by construction. Hidden fields
    /// keep flowing through with whatever value they hold.
    pub fn to_query(&self) -> TranscribeQuery {
        TranscribeQuery {
            model_size: self.model_size,
            transcription_method: self.transcription_method,
            diarisation: self.diarisation,
            diarisation_method: self.diarisation_method,
            num_speakers: self.num_speakers,
            audit: self.audit,
            criteria: self.criteria.trim().to_string(),
        }
    }
}
