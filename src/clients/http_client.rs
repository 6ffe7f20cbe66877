//! Authenticated HTTP client for the Admin REST API.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use reqwest::header::HeaderValue;

use crate::clients::errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::{ApiCallLimit, HttpResponse};
use crate::config::ShopifyConfig;

/// Fixed retry wait time in seconds when no `Retry-After` is given.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Upper bound on a server-requested `Retry-After` wait.
pub const MAX_RETRY_WAIT: Duration = Duration::from_secs(60);

/// How long a request waits when the call-limit bucket is full.
///
/// Shopify's REST bucket leaks two requests per second.
pub const THROTTLE_WAIT: Duration = Duration::from_millis(500);

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for a single shop.
///
/// The client handles:
/// - base URL composition from the shop domain or a configured override
/// - the `X-Shopify-Access-Token`, `Accept` and `User-Agent` headers
/// - retries on 429 (honouring `Retry-After`) and 5xx, up to `max_tries`
/// - waiting out a full call-limit bucket before sending
///
/// `HttpClient` is `Send + Sync`; share one instance across tasks so the
/// call-limit state is shared too.
///
/// ```rust
/// use shopify_admin::{AccessToken, HttpClient, ShopDomain, ShopifyConfig};
///
/// let config = ShopifyConfig::builder()
///     .shop(ShopDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("shpat_123").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config).unwrap();
/// assert_eq!(client.base_uri(), "https://my-store.myshopify.com");
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    default_headers: HashMap<String, String>,
    max_tries: u32,
    throttle: bool,
    call_limit: Mutex<Option<ApiCallLimit>>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the access token or user
    /// agent cannot be used as a header value, and [`HttpError::Network`]
    /// if the TLS backend fails to initialize.
    pub fn new(config: &ShopifyConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify Admin REST Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            config.access_token().as_ref().to_string(),
        );

        for (name, value) in &default_headers {
            HeaderValue::from_str(value)
                .map_err(|_| InvalidHttpRequestError::InvalidHeader { name: name.clone() })?;
        }

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_uri: config.base_url(),
            default_headers,
            max_tries: config.max_tries(),
            throttle: config.throttle(),
            call_limit: Mutex::new(None),
        })
    }

    /// Returns the origin requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the call limit reported by the most recent response.
    #[must_use]
    pub fn last_call_limit(&self) -> Option<ApiCallLimit> {
        *self.call_limit.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sends a request, retrying 429 and 5xx responses up to `max_tries`.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] when the request fails validation
    /// - [`HttpError::Network`] on connection failures and timeouts
    /// - [`HttpError::Response`] for a non-2xx response that is not retried
    /// - [`HttpError::MaxRetries`] when every attempt was throttled or failed
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;
        let url = format!("{}/{}", self.base_uri, normalize_path(&request.path)?);

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            if let Some(delay) = self.throttle_delay() {
                tracing::warn!(
                    path = %request.path,
                    delay = ?delay,
                    "API call limit reached, waiting before sending"
                );
                tokio::time::sleep(delay).await;
            }

            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                attempt = tries,
                "sending Admin API request"
            );

            let mut req_builder = self
                .client
                .request(request.http_method.as_reqwest(), &url)
                .query(&request.query);
            for (key, value) in &self.default_headers {
                req_builder = req_builder.header(key, value);
            }
            if let Some(body) = &request.body {
                req_builder = req_builder
                    .header("Content-Type", "application/json")
                    .body(body.to_string());
            }

            let res = req_builder.send().await?;
            let code = res.status().as_u16();
            let res_headers = parse_response_headers(res.headers());
            let body_text = res.text().await?;
            let response = HttpResponse::new(code, res_headers, parse_body(code, &body_text)?);

            self.record_call_limit(response.api_call_limit);

            if let Some(reason) = response.deprecation_reason() {
                tracing::warn!(
                    path = %request.path,
                    reason,
                    "deprecated Admin API endpoint"
                );
            }

            if response.is_ok() {
                return Ok(response);
            }

            let message = serialize_error(&response);
            let error_reference = response.request_id().map(String::from);

            if !should_retry(code) || tries >= self.max_tries {
                if should_retry(code) && self.max_tries > 1 {
                    return Err(MaxHttpRetriesExceededError {
                        code,
                        tries: self.max_tries,
                        message,
                        error_reference,
                    }
                    .into());
                }
                return Err(HttpResponseError {
                    code,
                    message,
                    body: response.body,
                    error_reference,
                }
                .into());
            }

            let delay = calculate_retry_delay(&response, code);
            tracing::warn!(
                path = %request.path,
                status = code,
                attempt = tries,
                delay = ?delay,
                "retrying Admin API request"
            );
            tokio::time::sleep(delay).await;
        }
    }

    fn throttle_delay(&self) -> Option<Duration> {
        if !self.throttle {
            return None;
        }
        self.last_call_limit()
            .filter(ApiCallLimit::is_exhausted)
            .map(|_| THROTTLE_WAIT)
    }

    fn record_call_limit(&self, limit: Option<ApiCallLimit>) {
        if let Some(limit) = limit {
            *self.call_limit.lock().unwrap_or_else(PoisonError::into_inner) = Some(limit);
        }
    }
}

const fn should_retry(code: u16) -> bool {
    code == 429 || code >= 500
}

/// Strips leading slashes and normalizes the `.json` suffix.
fn normalize_path(path: &str) -> Result<String, InvalidHttpRequestError> {
    let path = path.trim_start_matches('/');
    let path = path.strip_suffix(".json").unwrap_or(path);
    if path.is_empty() {
        return Err(InvalidHttpRequestError::EmptyPath);
    }
    Ok(format!("{path}.json"))
}

fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let value = value.to_str().unwrap_or_default().to_string();
        result
            .entry(name.as_str().to_lowercase())
            .or_default()
            .push(value);
    }
    result
}

/// Error bodies that are not JSON are kept as `{"errors": text}`; a
/// successful body that is not JSON is an error.
fn parse_body(code: u16, body_text: &str) -> Result<serde_json::Value, HttpError> {
    if body_text.trim().is_empty() {
        return Ok(serde_json::json!({}));
    }
    match serde_json::from_str(body_text) {
        Ok(body) => Ok(body),
        Err(_) if code >= 400 => Ok(serde_json::json!({ "errors": body_text })),
        Err(e) => Err(HttpError::Json(e)),
    }
}

/// 429 uses `Retry-After` when present, capped at [`MAX_RETRY_WAIT`];
/// values that are not a valid duration fall back to the fixed delay.
fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
    if status == 429 {
        if let Some(delay) = response
            .retry_request_after
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        {
            return delay.min(MAX_RETRY_WAIT);
        }
    }
    Duration::from_secs(RETRY_WAIT_TIME)
}

fn serialize_error(response: &HttpResponse) -> String {
    let mut error_body = serde_json::Map::new();

    for key in ["errors", "error", "error_description"] {
        if let Some(value) = response.body.get(key) {
            error_body.insert(key.to_string(), value.clone());
        }
    }
    if let Some(request_id) = response.request_id() {
        error_body.insert(
            "error_reference".to_string(),
            serde_json::json!(format!(
                "If you report this error, please include this id: {request_id}."
            )),
        );
    }

    serde_json::Value::Object(error_body).to_string()
}
