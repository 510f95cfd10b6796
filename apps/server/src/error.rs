//! Error types for the internal concordances service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Caller-facing errors. The Display strings for input errors are a stable
/// contract with callers; upstream variants hide the underlying cause behind
/// a fixed message.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please provide ids to concord, using the 'ids' query parameter")]
    MissingIds,

    #[error("Please provide non-empty ids to concord, using the 'ids' query parameter")]
    EmptyIds,

    #[error("Please provide one value for 'authority' query parameter")]
    TooManyAuthorityValues,

    #[error("Please provide a non-empty 'authority' query parameter")]
    EmptyAuthority,

    #[error("Please provide one value for 'include_deprecated' query parameter")]
    TooManyIncludeDeprecatedValues,

    #[error("Please provide a valid boolean value for 'include_deprecated' query parameter")]
    InvalidIncludeDeprecated,

    #[error("Public Concordances request failed, please try again")]
    ConcordancesUnavailable(#[source] concord_concepts::Error),

    #[error("Concept Search request failed, please try again")]
    SearchUnavailable(#[source] concord_concepts::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::MissingIds
            | Error::EmptyIds
            | Error::TooManyAuthorityValues
            | Error::EmptyAuthority
            | Error::TooManyIncludeDeprecatedValues
            | Error::InvalidIncludeDeprecated => StatusCode::BAD_REQUEST,
            Error::ConcordancesUnavailable(cause) | Error::SearchUnavailable(cause) => {
                tracing::error!(error = %cause, "Upstream request failed");
                StatusCode::SERVICE_UNAVAILABLE
            }
        };

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_messages_are_stable() {
        assert_eq!(
            Error::MissingIds.to_string(),
            "Please provide ids to concord, using the 'ids' query parameter"
        );
        assert_eq!(
            Error::EmptyIds.to_string(),
            "Please provide non-empty ids to concord, using the 'ids' query parameter"
        );
    }

    #[test]
    fn upstream_errors_hide_the_cause() {
        let err = Error::ConcordancesUnavailable(concord_concepts::Error::NoIdentifiers);
        assert_eq!(
            err.to_string(),
            "Public Concordances request failed, please try again"
        );
    }
}
