mod client;

use std::future::Future;

pub use client::ReqwestClient;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Non-2xx responses surface as this error so callers can report the HTTP
/// status without depending on the underlying HTTP engine.
#[derive(Debug, thiserror::Error)]
#[error("HTTP {status}: {body}")]
pub struct StatusError {
    pub status: u16,
    pub body: String,
}

pub trait HttpClient: Send + Sync {
    fn get(&self, path: &str) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;

    fn post(
        &self,
        path: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;
}
