//! REST client error type.

use super::types::ApiErrorBody;

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, abort).
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-success status; `body` is the decoded error payload when present.
    #[error("request failed with status {status}")]
    Status { status: u16, body: Option<ApiErrorBody> },

    /// The response body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The profile response carried no user id.
    #[error("profile response has no user id")]
    MissingIdentity,

    /// A list endpoint answered with something other than a JSON array.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// Called outside the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Error payload of a rejected request, if the backend sent one.
    pub fn body(&self) -> Option<&ApiErrorBody> {
        match self {
            Self::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}
