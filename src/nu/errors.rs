use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The response body was not the JSON shape the service documents:
    /// not JSON at all, no `messages` array, or a message without its
    /// required `type` or `message` field.
    #[error("malformed validator response: {0}")]
    MalformedResponse(String),
    /// The request to the service failed at the transport level.
    #[error("validator service request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The service answered with a non-success status code.
    #[error("validator service returned HTTP {status} for {url}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("invalid service base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
