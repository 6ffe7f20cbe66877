//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: non-2xx responses, with the decoded body kept
//! - [`MaxHttpRetriesExceededError`]: retry budget spent on 429/5xx
//! - [`InvalidHttpRequestError`]: a request rejected before it was sent
//! - [`HttpError`]: the union returned by every [`Transport`](super::Transport) call
//!
//! The resource layer turns these into
//! [`ResourceError`](crate::rest::ResourceError) values keyed by status code.

use serde_json::Value;
use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// `message` holds a compact JSON summary of the error fields plus the
/// request reference; `body` keeps the decoded response body so 422
/// field errors can be parsed further up.
///
/// ```rust
/// use shopify_admin::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"errors":"Not Found"}"#.to_string(),
///     body: json!({"errors": "Not Found"}),
///     error_reference: Some("abc-123".to_string()),
/// };
/// assert_eq!(error.to_string(), r#"{"errors":"Not Found"}"#);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error summary in JSON format.
    pub message: String,
    /// Decoded response body, `Value::Null` when the body was empty or not JSON.
    pub body: Value,
    /// Request reference from the `X-Request-Id` header.
    pub error_reference: Option<String>,
}

/// Error returned when every allowed attempt ended in 429 or 5xx.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Serialized error message from the last response.
    pub message: String,
    /// Request reference from the `X-Request-Id` header.
    pub error_reference: Option<String>,
}

/// Error returned when a request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path was empty after normalization.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A configured header value could not be sent.
    #[error("Invalid value for header '{name}'.")]
    InvalidHeader {
        /// The header name.
        name: String,
    },
}

/// Unified error type for transport operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, connection or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request body could not be encoded or a response body decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the error carries one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            _ => None,
        }
    }
}
