//! A scripted [`Transport`] for unit tests of the resource layer.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::clients::{HttpError, HttpMethod, HttpResponseError, QueryParams, Transport};
use crate::rest::ResourceResponse;

/// One request seen by [`RecordingTransport`].
#[derive(Debug, Clone)]
pub struct Call {
    pub method: HttpMethod,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Value>,
}

/// Records every request and answers with queued bodies or errors.
///
/// When the queue is empty the answer is `{}`.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    responses: Mutex<VecDeque<Result<Value, HttpError>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, body: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(body));
        self
    }

    pub fn fail(self, code: u16, body: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(HttpError::Response(HttpResponseError {
                code,
                message: body.to_string(),
                body,
                error_reference: Some("req-test".to_string()),
            })));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Call {
        self.calls().pop().expect("no request was made")
    }

    fn record(&self, method: HttpMethod, path: &str, query: QueryParams, body: Option<Value>) -> Result<Value, HttpError> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            query,
            body,
        });
        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| Ok(json!({})))
    }
}

impl Transport for RecordingTransport {
    async fn get_page<T>(&self, path: &str, query: &QueryParams) -> Result<ResourceResponse<T>, HttpError>
    where
        T: DeserializeOwned,
    {
        let body = self.record(HttpMethod::Get, path, query.clone(), None)?;
        Ok(ResourceResponse::from_data(serde_json::from_value(body)?))
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let sent = serde_json::to_value(body)?;
        let body = self.record(HttpMethod::Post, path, QueryParams::new(), Some(sent))?;
        Ok(serde_json::from_value(body)?)
    }

    async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let sent = serde_json::to_value(body)?;
        let body = self.record(HttpMethod::Put, path, QueryParams::new(), Some(sent))?;
        Ok(serde_json::from_value(body)?)
    }

    async fn delete(&self, path: &str) -> Result<(), HttpError> {
        self.record(HttpMethod::Delete, path, QueryParams::new(), None)?;
        Ok(())
    }
}
