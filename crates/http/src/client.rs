use reqwest::header::CONTENT_TYPE;

use crate::{Error, HttpClient, StatusError};

/// `HttpClient` backed by a shared `reqwest::Client`, rooted at the API base
/// URL. Paths passed to the trait methods are absolute (`/get-device`).
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, path: &str) -> Result<Vec<u8>, Error> {
        let response = self.client.get(self.url(path)).send().await?;
        read_body(response).await
    }

    async fn post(&self, path: &str, body: Vec<u8>, content_type: &str) -> Result<Vec<u8>, Error> {
        let response = self
            .client
            .post(self.url(path))
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;
        read_body(response).await
    }
}

async fn read_body(response: reqwest::Response) -> Result<Vec<u8>, Error> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if status.is_success() {
        Ok(bytes.to_vec())
    } else {
        Err(Box::new(StatusError {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped_from_base_url() {
        let client = ReqwestClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/get-device"), "http://localhost:8000/get-device");
    }

    #[test]
    fn status_error_displays_status_and_body() {
        let err = StatusError {
            status: 400,
            body: r#"{"detail":"No Files Uploaded"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"HTTP 400: {"detail":"No Files Uploaded"}"#
        );
    }
}
