//! Outgoing request description.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// URL query parameters, kept sorted so request URLs are deterministic.
pub type QueryParams = BTreeMap<String, String>;

/// HTTP methods used by the Admin REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Retrieve resources.
    Get,
    /// Create resources.
    Post,
    /// Update resources.
    Put,
    /// Remove resources.
    Delete,
}

impl HttpMethod {
    pub(crate) const fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A request to send through [`HttpClient::request`](super::HttpClient::request).
///
/// ```rust
/// use shopify_admin::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "admin/products.json")
///     .body(json!({"product": {"title": "Burton Custom Freestyle 151"}}))
///     .build()
///     .unwrap();
/// assert_eq!(request.path, "admin/products.json");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// Path relative to the shop origin.
    pub path: String,
    /// JSON body, required for POST and PUT.
    pub body: Option<Value>,
    /// Query parameters appended to the URL.
    pub query: QueryParams,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] for a POST or PUT
    /// without a body.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<Value>,
    query: QueryParams,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: QueryParams::new(),
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Replaces all query parameters.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_and_put_require_body() {
        for method in [HttpMethod::Post, HttpMethod::Put] {
            let result = HttpRequest::builder(method, "admin/products.json").build();
            assert!(matches!(
                result,
                Err(InvalidHttpRequestError::MissingBody { .. })
            ));
        }
    }

    #[test]
    fn test_get_and_delete_build_without_body() {
        assert!(HttpRequest::builder(HttpMethod::Get, "admin/products.json")
            .build()
            .is_ok());
        assert!(HttpRequest::builder(HttpMethod::Delete, "admin/products/1.json")
            .build()
            .is_ok());
    }

    #[test]
    fn test_query_params_accumulate_in_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "admin/products.json")
            .query_param("since_id", "10")
            .query_param("limit", "50")
            .build()
            .unwrap();

        let keys: Vec<_> = request.query.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["limit", "since_id"]);
    }

    #[test]
    fn test_body_is_kept() {
        let request = HttpRequest::builder(HttpMethod::Put, "admin/webhooks/4.json")
            .body(json!({"webhook": {"id": 4}}))
            .build()
            .unwrap();
        assert_eq!(request.body, Some(json!({"webhook": {"id": 4}})));
    }

    #[test]
    fn test_method_display_is_lowercase() {
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
        assert_eq!(HttpMethod::Get.as_reqwest(), reqwest::Method::GET);
    }
}
