//! Error types for the upstream clients

use serde::Deserialize;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Upstream client errors
#[derive(Error, Debug)]
pub enum Error {
    /// No ids were supplied at all.
    #[error("no concept ids to search for")]
    NoIdentifiers,

    /// Every supplied id was the empty string.
    #[error("provided concept ids are empty")]
    AllIdentifiersEmpty,

    /// The upstream could not be reached (connection failure or timeout).
    #[error("upstream unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// The upstream answered with a non-200 status.
    #[error("{status}: {message}")]
    UpstreamRejected {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The upstream answered 200 but the body was not the expected JSON.
    #[error("malformed upstream response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl Error {
    /// True for failures caused by the caller's input rather than the
    /// upstream. These map to a bad request at the service boundary.
    pub fn is_input(&self) -> bool {
        matches!(self, Error::NoIdentifiers | Error::AllIdentifiersEmpty)
    }
}

const DECODE_FALLBACK_MESSAGE: &str = "Failed to decode message from response";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Turn a non-200 upstream response into an [`Error::UpstreamRejected`],
/// decoding the `{"message": ...}` body on a best-effort basis.
pub(crate) async fn decode_response_error(resp: reqwest::Response) -> Error {
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => DECODE_FALLBACK_MESSAGE.to_string(),
    };

    Error::UpstreamRejected { status, message }
}
