//! HTTP-specific error type wrapping reqwest and decoding errors.

use libdash_domain::error::LibdashError;
use reqwest::StatusCode;

/// Errors originating from the HTTP transport.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// Building the client, connecting, timing out or reading the body failed.
    #[error("request failed")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status and no envelope.
    #[error("unexpected status {0}")]
    Status(StatusCode),

    /// The body was not the expected JSON envelope.
    #[error("invalid response body")]
    Decode(#[from] serde_json::Error),

    /// A successful envelope without the `data` the endpoint promises.
    #[error("response carried no data")]
    MissingData,
}

impl From<HttpError> for LibdashError {
    fn from(err: HttpError) -> Self {
        Self::Transport(Box::new(err))
    }
}
