mod client;
mod error;
mod multipart;
mod query;

pub use client::WhisperApiClient;
pub use error::Error;
pub use multipart::FilePart;
