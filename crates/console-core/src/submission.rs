use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use whisperui_client::{FilePart, WhisperApiClient};
use whisperui_http::HttpClient;
use whisperui_interface::{TranscribeQuery, TranscribeResponse};

use crate::attachments::{AttachmentList, SelectedFile};
use crate::error::{Error, Result};
use crate::events::ConsoleEvent;
use crate::form::OptionsForm;
use crate::runtime::ConsoleRuntime;

pub const RESPONSE_FILENAME: &str = "response.json";

/// The POST itself failed: the server rejected the request outright or never
/// answered. Stored in place of the per-file mapping and echoed into the
/// download artifact as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportFailure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub error: String,
}

/// Outcome of the last submission. Created fresh per submission, replaced
/// wholesale by the next one, never merged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SubmissionResult {
    Completed(TranscribeResponse),
    TransportError(TransportFailure),
}

/// Everything one submission needs, captured at submit time so later form
/// edits cannot leak into an in-flight request.
#[derive(Debug, Clone)]
pub struct PreparedSubmission {
    pub files: Vec<FilePart>,
    pub query: TranscribeQuery,
}

/// Runs one prepared submission against the API. A transport failure is not
/// an `Err`: it is recovered into a result, exactly like a server response.
pub async fn perform_submission<C: HttpClient>(
    client: &WhisperApiClient<C>,
    prepared: PreparedSubmission,
) -> SubmissionResult {
    match client
        .transcribe_files(&prepared.files, &prepared.query)
        .await
    {
        Ok(response) => {
            tracing::info!(entries = response.len(), "submission_completed");
            SubmissionResult::Completed(response)
        }
        Err(err) => {
            tracing::warn!(error = %err, "submission_failed");
            SubmissionResult::TransportError(TransportFailure {
                status: err.status(),
                error: err.to_string(),
            })
        }
    }
}

/// Owns everything the upload page of the dashboard mutates: the attachment
/// list, the options form, the device label, the single in-flight request and
/// its stored result. One instance per dashboard run; all mutation happens on
/// user-triggered commands processed one at a time.
pub struct SubmissionController<C> {
    client: WhisperApiClient<C>,
    runtime: Arc<dyn ConsoleRuntime>,
    attachments: AttachmentList,
    form: OptionsForm,
    device: Option<String>,
    pending: bool,
    result: Option<SubmissionResult>,
}

impl<C: HttpClient> SubmissionController<C> {
    pub fn new(client: WhisperApiClient<C>, runtime: Arc<dyn ConsoleRuntime>) -> Self {
        Self {
            client,
            runtime,
            attachments: AttachmentList::default(),
            form: OptionsForm::default(),
            device: None,
            pending: false,
            result: None,
        }
    }

    pub fn attachments(&self) -> &AttachmentList {
        &self.attachments
    }

    pub fn form(&self) -> &OptionsForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut OptionsForm {
        &mut self.form
    }

    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    /// One-shot `GET /get-device`, issued when the dashboard loads. Failure
    /// is not an error state: the device label just stays unresolved.
    pub async fn refresh_device(&mut self) {
        match self.client.get_device().await {
            Ok(device) => {
                tracing::debug!(device = %device, "device_resolved");
                self.device = Some(device);
            }
            Err(err) => {
                tracing::warn!(error = %err, "get_device_failed");
            }
        }

        self.runtime.emit(ConsoleEvent::DeviceResolved {
            device: self.device.clone(),
        });
    }

    pub fn add_files(&mut self, candidates: Vec<SelectedFile>) {
        let rejected = self.attachments.add_files(candidates);

        if !rejected.is_empty() {
            tracing::warn!(rejected = ?rejected, "files_rejected_over_size_limit");
            self.runtime
                .emit(ConsoleEvent::FilesRejected { names: rejected });
        }
    }

    pub fn remove_file(&mut self, index: usize) {
        self.attachments.remove_file(index);
    }

    /// The submit trigger stays disabled while this is false: nothing
    /// attached, a field error present, or a submission already in flight.
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.attachments.is_empty() && self.form.is_valid()
    }

    /// `Idle -> Pending`: clears the previous result, snapshots the request,
    /// raises the loading flag. Gating violations leave all state untouched.
    pub fn begin_submission(&mut self) -> Result<PreparedSubmission> {
        if self.pending {
            return Err(Error::SubmissionInFlight);
        }
        if self.attachments.is_empty() {
            return Err(Error::NoFilesSelected);
        }
        let errors = self.form.validate();
        if !errors.is_empty() {
            return Err(Error::InvalidOptions(errors));
        }

        let files: Vec<FilePart> = self
            .attachments
            .files()
            .iter()
            .map(|file| FilePart::new(file.name.clone(), file.contents.clone()))
            .collect();
        let prepared = PreparedSubmission {
            files,
            query: self.form.to_query(),
        };

        self.result = None;
        self.pending = true;
        self.runtime.emit(ConsoleEvent::SubmissionStarted);
        tracing::info!(files = prepared.files.len(), "submission_started");

        Ok(prepared)
    }

    /// `Pending -> Idle`: stores the outcome and drops the loading flag.
    pub fn complete_submission(&mut self, result: SubmissionResult) {
        self.result = Some(result.clone());
        self.pending = false;

        match result {
            completed @ SubmissionResult::Completed(_) => {
                self.runtime.emit(ConsoleEvent::SubmissionCompleted {
                    result: completed,
                });
            }
            SubmissionResult::TransportError(failure) => {
                self.runtime.emit(ConsoleEvent::SubmissionFailed {
                    error: failure.error,
                });
            }
        }
    }

    /// A cloneable handle for driving a prepared submission from a spawned
    /// task while the controller keeps serving edits.
    pub fn client_handle(&self) -> WhisperApiClient<C>
    where
        C: Clone,
    {
        self.client.clone()
    }

    /// Runs one whole submission in place. Front ends that must stay
    /// responsive use `begin_submission` / `perform_submission` /
    /// `complete_submission` instead.
    pub async fn submit(&mut self) -> Result<()> {
        let prepared = self.begin_submission()?;
        let result = perform_submission(&self.client, prepared).await;
        self.complete_submission(result);
        Ok(())
    }

    /// The stored result as the downloadable artifact text: 2-space-indented
    /// JSON, exact echo of the last submission.
    pub fn response_json(&self) -> Result<Option<String>> {
        match &self.result {
            Some(result) => Ok(Some(serde_json::to_string_pretty(result)?)),
            None => Ok(None),
        }
    }

    /// Writes `response.json` into `dir` and returns its path. With no prior
    /// submission this performs no file-save action at all.
    pub fn write_response_json(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let Some(json) = self.response_json()? else {
            return Ok(None);
        };

        let target = dir.join(RESPONSE_FILENAME);
        crate::fs::atomic_write(&target, &json)?;
        tracing::info!(path = %target.display(), "response_downloaded");
        Ok(Some(target))
    }
}
