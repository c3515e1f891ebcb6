mod attachments;
mod error;
mod events;
mod form;
pub mod fs;
mod runtime;
mod submission;

pub use attachments::{AttachmentList, MAX_FILE_BYTES, SelectedFile};
pub use error::{Error, Result};
pub use events::ConsoleEvent;
pub use form::{Field, FieldErrors, MAX_CRITERIA_CHARS, OptionsForm};
pub use runtime::ConsoleRuntime;
pub use submission::{
    PreparedSubmission, RESPONSE_FILENAME, SubmissionController, SubmissionResult,
    TransportFailure, perform_submission,
};
