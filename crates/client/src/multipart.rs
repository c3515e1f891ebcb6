use bytes::Bytes;

/// One attached file, carried as a `files` part of the multipart body.
/// `Bytes` keeps resubmission cheap: the payload is reference-counted, not
/// copied per request.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub filename: String,
    pub contents: Bytes,
}

impl FilePart {
    pub fn new(filename: impl Into<String>, contents: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            contents: contents.into(),
        }
    }
}

pub(crate) fn boundary() -> String {
    format!("whisperui-{}", uuid::Uuid::new_v4().simple())
}

pub(crate) fn content_type(boundary: &str) -> String {
    format!("multipart/form-data; boundary={boundary}")
}

/// Assembles the `multipart/form-data` body: one part per file, all under the
/// repeated field name `files`, in sequence order.
pub(crate) fn form_data_body(parts: &[FilePart], boundary: &str) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        let filename = part.filename.replace('\\', "\\\\").replace('"', "\\\"");

        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"files\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(&part.contents);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}
