use std::sync::{Arc, Mutex};

use whisperui_client::WhisperApiClient;
use whisperui_http::{Error as HttpError, HttpClient, StatusError};

use console_core::{
    ConsoleEvent, ConsoleRuntime, Error, RESPONSE_FILENAME, SelectedFile, SubmissionController,
    SubmissionResult, TransportFailure,
};

type CannedResponse = Result<Vec<u8>, (u16, String)>;

#[derive(Debug, Clone)]
struct CapturedRequest {
    method: &'static str,
    path: String,
    content_type: Option<String>,
    body: Vec<u8>,
}

#[derive(Default)]
struct MockState {
    requests: Mutex<Vec<CapturedRequest>>,
    get_response: Mutex<Option<CannedResponse>>,
    post_response: Mutex<Option<CannedResponse>>,
}

#[derive(Clone, Default)]
struct MockHttp(Arc<MockState>);

impl MockHttp {
    fn respond_to_get(&self, response: CannedResponse) {
        *self.0.get_response.lock().unwrap() = Some(response);
    }

    fn respond_to_post(&self, response: CannedResponse) {
        *self.0.post_response.lock().unwrap() = Some(response);
    }

    fn requests(&self) -> Vec<CapturedRequest> {
        self.0.requests.lock().unwrap().clone()
    }

    fn last_post(&self) -> CapturedRequest {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == "POST")
            .expect("no POST captured")
    }
}

fn deliver(canned: Option<CannedResponse>, fallback: &[u8]) -> Result<Vec<u8>, HttpError> {
    match canned.unwrap_or_else(|| Ok(fallback.to_vec())) {
        Ok(bytes) => Ok(bytes),
        Err((status, body)) => Err(Box::new(StatusError { status, body })),
    }
}

impl HttpClient for MockHttp {
    async fn get(&self, path: &str) -> Result<Vec<u8>, HttpError> {
        self.0.requests.lock().unwrap().push(CapturedRequest {
            method: "GET",
            path: path.to_string(),
            content_type: None,
            body: Vec::new(),
        });
        deliver(self.0.get_response.lock().unwrap().take(), b"\"cpu\"")
    }

    async fn post(
        &self,
        path: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<Vec<u8>, HttpError> {
        self.0.requests.lock().unwrap().push(CapturedRequest {
            method: "POST",
            path: path.to_string(),
            content_type: Some(content_type.to_string()),
            body,
        });
        deliver(self.0.post_response.lock().unwrap().take(), b"{}")
    }
}

#[derive(Default)]
struct RecordingRuntime {
    events: Mutex<Vec<ConsoleEvent>>,
}

impl RecordingRuntime {
    fn events(&self) -> Vec<ConsoleEvent> {
        self.events.lock().unwrap().clone()
    }

    fn kinds(&self) -> Vec<&'static str> {
        self.events()
            .iter()
            .map(|event| match event {
                ConsoleEvent::DeviceResolved { .. } => "deviceResolved",
                ConsoleEvent::FilesRejected { .. } => "filesRejected",
                ConsoleEvent::SubmissionStarted => "submissionStarted",
                ConsoleEvent::SubmissionCompleted { .. } => "submissionCompleted",
                ConsoleEvent::SubmissionFailed { .. } => "submissionFailed",
            })
            .collect()
    }
}

impl ConsoleRuntime for RecordingRuntime {
    fn emit(&self, event: ConsoleEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn controller() -> (
    SubmissionController<MockHttp>,
    MockHttp,
    Arc<RecordingRuntime>,
) {
    let http = MockHttp::default();
    let runtime = Arc::new(RecordingRuntime::default());
    let controller = SubmissionController::new(
        WhisperApiClient::new(http.clone()),
        runtime.clone() as Arc<dyn ConsoleRuntime>,
    );
    (controller, http, runtime)
}

fn wav(name: &str, size: usize) -> SelectedFile {
    SelectedFile::new(name, vec![0u8; size])
}

#[tokio::test]
async fn default_submission_sends_the_exact_query_and_stores_the_result() {
    let (mut controller, http, runtime) = controller();
    controller.add_files(vec![wav("a.wav", 1024 * 1024)]);

    let body = serde_json::json!({
        "1": {
            "filename": "a.wav",
            "language": "en",
            "segments": [{"start": 0.0, "end": 1.0, "text": " hi", "speaker": null}]
        }
    });
    http.respond_to_post(Ok(serde_json::to_vec(&body).unwrap()));

    assert!(controller.can_submit());
    controller.submit().await.unwrap();

    let request = http.last_post();
    assert_eq!(
        request.path,
        "/transcribe-files?model_size=large&transcription_method=whisperX&diarisation=true\
         &diarisation_method=whisperX_pipeline&num_speakers=2&audit=true&criteria="
    );
    assert!(
        request
            .content_type
            .as_deref()
            .unwrap()
            .starts_with("multipart/form-data; boundary=")
    );
    let body_text = String::from_utf8_lossy(&request.body);
    assert_eq!(body_text.matches(r#"name="files""#).count(), 1);

    assert_eq!(runtime.kinds(), ["submissionStarted", "submissionCompleted"]);
    assert!(!controller.is_pending());

    let expected = SubmissionResult::Completed(serde_json::from_value(body).unwrap());
    assert_eq!(controller.result(), Some(&expected));
}

#[tokio::test]
async fn submission_without_files_is_blocked() {
    let (mut controller, http, runtime) = controller();

    assert!(!controller.can_submit());
    let err = controller.submit().await.unwrap_err();

    assert!(matches!(err, Error::NoFilesSelected));
    assert!(runtime.kinds().is_empty());
    assert!(http.requests().is_empty());
    assert!(controller.result().is_none());
}

#[tokio::test]
async fn field_errors_block_submission_until_resolved() {
    let (mut controller, _http, _runtime) = controller();
    controller.add_files(vec![wav("a.wav", 10)]);

    controller.form_mut().num_speakers = 11;
    assert!(!controller.can_submit());
    let err = controller.submit().await.unwrap_err();
    assert!(matches!(err, Error::InvalidOptions(_)));
    assert!(err.to_string().contains("Must be 10 or less"));

    controller.form_mut().num_speakers = 10;
    assert!(controller.can_submit());
}

#[tokio::test]
async fn hidden_out_of_range_values_are_sent_raw() {
    let (mut controller, http, _runtime) = controller();
    controller.add_files(vec![wav("a.wav", 10)]);

    controller.form_mut().diarisation = false;
    controller.form_mut().num_speakers = 0;

    controller.submit().await.unwrap();

    let path = http.last_post().path;
    assert!(path.contains("diarisation=false"));
    assert!(path.contains("num_speakers=0"));
}

#[tokio::test]
async fn criteria_is_trimmed_before_sending() {
    let (mut controller, http, _runtime) = controller();
    controller.add_files(vec![wav("a.wav", 10)]);
    controller.form_mut().criteria = "  no profanity  ".to_string();

    controller.submit().await.unwrap();

    assert!(http.last_post().path.ends_with("criteria=no%20profanity"));
}

#[tokio::test]
async fn transport_failures_are_recovered_into_the_result() {
    let (mut controller, http, runtime) = controller();
    controller.add_files(vec![wav("a.wav", 10)]);
    http.respond_to_post(Err((400, r#"{"detail":"No Files Uploaded"}"#.to_string())));

    controller.submit().await.unwrap();

    assert_eq!(runtime.kinds(), ["submissionStarted", "submissionFailed"]);
    assert!(!controller.is_pending());

    match controller.result().unwrap() {
        SubmissionResult::TransportError(TransportFailure { status, error }) => {
            assert_eq!(*status, Some(400));
            assert!(error.contains("No Files Uploaded"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn a_second_submission_while_pending_is_rejected() {
    let (mut controller, _http, runtime) = controller();
    controller.add_files(vec![wav("a.wav", 10)]);

    let prepared = controller.begin_submission().unwrap();
    assert!(controller.is_pending());
    assert!(!controller.can_submit());
    assert!(controller.result().is_none());

    let err = controller.begin_submission().unwrap_err();
    assert!(matches!(err, Error::SubmissionInFlight));

    let client = controller.client_handle();
    let result = console_core::perform_submission(&client, prepared).await;
    controller.complete_submission(result);

    assert!(!controller.is_pending());
    assert_eq!(runtime.kinds(), ["submissionStarted", "submissionCompleted"]);
}

#[tokio::test]
async fn form_edits_while_pending_do_not_leak_into_the_in_flight_request() {
    let (mut controller, http, _runtime) = controller();
    controller.add_files(vec![wav("a.wav", 10)]);
    controller.form_mut().num_speakers = 3;

    let prepared = controller.begin_submission().unwrap();
    controller.form_mut().num_speakers = 9;

    let client = controller.client_handle();
    let result = console_core::perform_submission(&client, prepared).await;
    controller.complete_submission(result);

    assert!(http.last_post().path.contains("num_speakers=3"));
    assert_eq!(controller.form().num_speakers, 9);
}

#[tokio::test]
async fn each_submission_replaces_the_previous_result_wholesale() {
    let (mut controller, http, _runtime) = controller();
    controller.add_files(vec![wav("a.wav", 10)]);

    http.respond_to_post(Ok(
        br#"{"1": {"filename": "a.wav", "error": "boom"}}"#.to_vec()
    ));
    controller.submit().await.unwrap();
    assert!(matches!(
        controller.result(),
        Some(SubmissionResult::Completed(_))
    ));

    http.respond_to_post(Err((502, "bad gateway".to_string())));
    controller.submit().await.unwrap();
    assert!(matches!(
        controller.result(),
        Some(SubmissionResult::TransportError(_))
    ));
}

#[tokio::test]
async fn oversized_candidates_surface_one_aggregate_warning() {
    let (mut controller, _http, runtime) = controller();

    controller.add_files(vec![
        wav("fine.wav", 26_214_400),
        SelectedFile::new("big-a.wav", vec![0u8; 26_214_401]),
        SelectedFile::new("big-b.wav", vec![0u8; 27_000_000]),
    ]);

    assert_eq!(controller.attachments().len(), 1);
    let events = runtime.events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        ConsoleEvent::FilesRejected { names } => {
            assert_eq!(names, &["big-a.wav".to_string(), "big-b.wav".to_string()]);
        }
        other => panic!("expected rejection warning, got {other:?}"),
    }
}

#[tokio::test]
async fn device_query_stores_the_reported_device() {
    let (mut controller, http, runtime) = controller();
    http.respond_to_get(Ok(b"\"cuda\"".to_vec()));

    controller.refresh_device().await;

    assert_eq!(controller.device(), Some("cuda"));
    assert_eq!(http.requests()[0].path, "/get-device");
    assert_eq!(runtime.kinds(), ["deviceResolved"]);
}

#[tokio::test]
async fn failed_device_query_leaves_the_label_unresolved() {
    let (mut controller, http, runtime) = controller();
    http.respond_to_get(Err((500, "boom".to_string())));

    controller.refresh_device().await;

    assert_eq!(controller.device(), None);
    assert_eq!(runtime.kinds(), ["deviceResolved"]);
}

#[tokio::test]
async fn download_without_a_submission_saves_nothing() {
    let (controller, _http, _runtime) = controller();
    let dir = tempfile::tempdir().unwrap();

    let written = controller.write_response_json(dir.path()).unwrap();

    assert!(written.is_none());
    assert!(!dir.path().join(RESPONSE_FILENAME).exists());
}

#[tokio::test]
async fn download_echoes_the_result_as_indented_json() {
    let (mut controller, http, _runtime) = controller();
    controller.add_files(vec![wav("a.wav", 10)]);
    http.respond_to_post(Ok(
        br#"{"1": {"filename": "a.wav", "error": "boom"}}"#.to_vec()
    ));
    controller.submit().await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let written = controller.write_response_json(dir.path()).unwrap().unwrap();

    assert_eq!(written, dir.path().join(RESPONSE_FILENAME));
    let content = std::fs::read_to_string(&written).unwrap();
    assert_eq!(
        content,
        serde_json::to_string_pretty(controller.result().unwrap()).unwrap()
    );
    assert!(content.contains("\n  \"1\""));
}
