//! Resource-level error taxonomy.
//!
//! Transport failures are mapped to semantic variants by status code:
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **422**: [`ResourceError::ValidationFailed`] with per-field messages
//! - **other non-2xx**: [`ResourceError::Server`]
//! - **connection, timeout, retry exhaustion**: [`ResourceError::Http`]
//!
//! ```rust,ignore
//! match shop.products().get(123, None).await {
//!     Ok(product) => println!("found {:?}", product.title),
//!     Err(ResourceError::NotFound { resource, id }) => println!("{resource} {id} is gone"),
//!     Err(ResourceError::ValidationFailed { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) if e.is_network() => println!("network trouble: {e}"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, HttpResponseError};
use serde_json::Value;
use thiserror::Error;

/// Error type for resource operations.
///
/// ```rust
/// use shopify_admin::rest::ResourceError;
/// use std::collections::HashMap;
///
/// let error = ResourceError::NotFound {
///     resource: "Product",
///     id: "123".to_string(),
/// };
/// assert_eq!(error.to_string(), "Product with id 123 not found");
///
/// let mut errors = HashMap::new();
/// errors.insert("title".to_string(), vec!["can't be blank".to_string()]);
/// let error = ResourceError::ValidationFailed {
///     errors,
///     request_id: Some("abc-123".to_string()),
/// };
/// assert_eq!(error.request_id(), Some("abc-123"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The record (or its parent) does not exist (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The resource type name (e.g. "Product").
        resource: &'static str,
        /// The requested ID, or "unknown" for collection requests.
        id: String,
    },

    /// The API rejected the payload (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Field name to messages; general messages are keyed "base".
        errors: HashMap<String, Vec<String>>,
        /// The `X-Request-Id` of the failed request.
        request_id: Option<String>,
    },

    /// Any other non-2xx response.
    #[error("Server responded with {code}: {message}")]
    Server {
        /// The HTTP status code.
        code: u16,
        /// Serialized error body.
        message: String,
        /// The `X-Request-Id` of the failed request.
        request_id: Option<String>,
    },

    /// An update was attempted on a record without an ID.
    #[error("Cannot {operation} {resource} without an id")]
    MissingId {
        /// The resource type name.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// A caller-supplied path could not be used.
    #[error("Invalid path '{path}' for {resource}")]
    InvalidPath {
        /// The resource type name.
        resource: &'static str,
        /// The rejected path.
        path: String,
    },

    /// No endpoint template matches the operation and the available IDs.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The resource type name.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// The response body did not have the expected shape.
    #[error("Failed to decode {resource} response: {message}")]
    Decode {
        /// The resource type name.
        resource: &'static str,
        /// What went wrong.
        message: String,
    },

    /// The record or its options could not be serialized into a request.
    #[error("Failed to encode {resource} request: {message}")]
    Encode {
        /// The resource type name.
        resource: &'static str,
        /// What went wrong.
        message: String,
    },

    /// A transport failure that never produced a usable response.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Maps a status code and body to a semantic variant.
    ///
    /// ```rust
    /// use shopify_admin::rest::ResourceError;
    /// use serde_json::json;
    ///
    /// let error = ResourceError::from_http_response(
    ///     404,
    ///     &json!({"errors": "Not Found"}),
    ///     "Product",
    ///     Some("123"),
    ///     Some("req-123"),
    /// );
    /// assert!(matches!(error, ResourceError::NotFound { .. }));
    /// ```
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &Value,
        resource: &'static str,
        id: Option<&str>,
        request_id: Option<&str>,
    ) -> Self {
        match code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            422 => Self::ValidationFailed {
                errors: parse_validation_errors(body),
                request_id: request_id.map(ToString::to_string),
            },
            _ => Self::Server {
                code,
                message: body.to_string(),
                request_id: request_id.map(ToString::to_string),
            },
        }
    }

    /// Maps a transport error for an operation on `resource`.
    #[must_use]
    pub fn from_http_error(error: HttpError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            HttpError::Response(HttpResponseError {
                code,
                message,
                body,
                error_reference,
            }) => match Self::from_http_response(code, &body, resource, id, error_reference.as_deref()) {
                Self::Server {
                    code, request_id, ..
                } => Self::Server {
                    code,
                    message,
                    request_id,
                },
                mapped => mapped,
            },
            HttpError::Json(e) => Self::Decode {
                resource,
                message: e.to_string(),
            },
            other => Self::Http(other),
        }
    }

    /// Returns `true` for failures where no response was received.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Http(HttpError::Network(_)))
    }

    /// Returns the HTTP status code behind this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::ValidationFailed { .. } => Some(422),
            Self::Server { code, .. } => Some(*code),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the `X-Request-Id` of the failed request, if known.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } | Self::Server { request_id, .. } => {
                request_id.as_deref()
            }
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            Self::Http(HttpError::MaxRetries(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

/// Parses the `errors` member of a 422 body.
///
/// Shopify sends one of:
/// - `{"errors": {"title": ["can't be blank"]}}`
/// - `{"errors": ["Title can't be blank"]}` (keyed "base")
/// - `{"errors": "Title can't be blank"}` (keyed "base")
fn parse_validation_errors(body: &Value) -> HashMap<String, Vec<String>> {
    let messages = |value: &Value| -> Vec<String> {
        match value {
            Value::Array(arr) => arr
                .iter()
                .map(|v| v.as_str().map_or_else(|| v.to_string(), ToString::to_string))
                .collect(),
            Value::String(s) => vec![s.clone()],
            other => vec![other.to_string()],
        }
    };

    let mut result = HashMap::new();
    match body.get("errors") {
        Some(Value::Object(map)) => {
            for (field, value) in map {
                result.insert(field.clone(), messages(value));
            }
        }
        Some(value @ (Value::Array(_) | Value::String(_))) => {
            let base = messages(value);
            if !base.is_empty() {
                result.insert("base".to_string(), base);
            }
        }
        _ => {}
    }
    result
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
