//! HTTP transport for the Admin REST API.
//!
//! - [`HttpClient`]: authenticated reqwest client with retries and throttling
//! - [`Transport`]: the contract resource services are written against
//! - [`HttpRequest`] / [`HttpResponse`]: request description and parsed response
//! - [`ApiCallLimit`] / [`PaginationInfo`]: Shopify response headers
//!
//! # Retry Behavior
//!
//! - **429**: waits for `Retry-After`, or 1 second if absent
//! - **5xx**: waits 1 second
//! - **other 4xx**: returned immediately
//!
//! `max_tries` defaults to 1, i.e. no retries.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION, THROTTLE_WAIT};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, QueryParams};
pub use http_response::{ApiCallLimit, HttpResponse, PaginationInfo};
pub use transport::Transport;
