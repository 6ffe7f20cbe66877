//! The seam between resource services and HTTP.
//!
//! Resource services only ever talk to a [`Transport`]. [`HttpClient`] is
//! the production implementation; tests substitute in-memory ones.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::errors::HttpError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest, QueryParams};
use crate::clients::http_response::HttpResponse;
use crate::rest::ResourceResponse;

/// Shopify's `{"count": N}` body.
#[derive(Debug, Deserialize)]
struct CountBody {
    count: u64,
}

/// JSON transport relative to a shop origin.
///
/// Paths are relative (`admin/products.json`). Implementations compose the
/// base URL, authenticate, encode and decode JSON, map non-2xx statuses to
/// [`HttpError::Response`] and own rate-limit handling. Implementations must
/// be safe to share between concurrent callers.
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Issues a GET and decodes the body, keeping response metadata.
    async fn get_page<T>(&self, path: &str, query: &QueryParams) -> Result<ResourceResponse<T>, HttpError>
    where
        T: DeserializeOwned;

    /// Issues a POST with a JSON body and decodes the response body.
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned;

    /// Issues a PUT with a JSON body and decodes the response body.
    async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned;

    /// Issues a DELETE, discarding the response body.
    async fn delete(&self, path: &str) -> Result<(), HttpError>;

    /// Issues a GET and decodes the body.
    async fn get<T>(&self, path: &str, query: &QueryParams) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        Ok(self.get_page::<T>(path, query).await?.into_inner())
    }

    /// Issues a GET against a count endpoint and decodes `{"count": N}`.
    async fn count(&self, path: &str, query: &QueryParams) -> Result<u64, HttpError> {
        let body: CountBody = self.get(path, query).await?;
        Ok(body.count)
    }
}

impl HttpClient {
    async fn send_json<B>(&self, method: HttpMethod, path: &str, body: &B) -> Result<HttpResponse, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let request = HttpRequest::builder(method, path)
            .body(serde_json::to_value(body)?)
            .build()?;
        self.request(request).await
    }
}

impl Transport for HttpClient {
    async fn get_page<T>(&self, path: &str, query: &QueryParams) -> Result<ResourceResponse<T>, HttpError>
    where
        T: DeserializeOwned,
    {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query.clone())
            .build()?;
        let response = self.request(request).await?;
        let request_id = response.request_id().map(String::from);
        let data = serde_json::from_value(response.body)?;

        Ok(ResourceResponse::new(
            data,
            response.pagination,
            response.api_call_limit,
            request_id,
        ))
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send_json(HttpMethod::Post, path, body).await?;
        Ok(serde_json::from_value(response.body)?)
    }

    async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send_json(HttpMethod::Put, path, body).await?;
        Ok(serde_json::from_value(response.body)?)
    }

    async fn delete(&self, path: &str) -> Result<(), HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.request(request).await?;
        Ok(())
    }
}
