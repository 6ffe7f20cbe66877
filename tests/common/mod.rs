//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};

use shopify_admin::clients::{HttpError, HttpResponseError, QueryParams, Transport};
use shopify_admin::{AccessToken, HostUrl, ResourceResponse, ShopDomain, ShopifyConfig};

pub const TEST_TOKEN: &str = "shpat_test_token";

/// A config pointing at a local mock server.
pub fn config_for(uri: &str) -> ShopifyConfig {
    config_with_tries(uri, 1)
}

pub fn config_with_tries(uri: &str, max_tries: u32) -> ShopifyConfig {
    ShopifyConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new(TEST_TOKEN).unwrap())
        .base_url(HostUrl::new(uri).unwrap())
        .max_tries(max_tries)
        .build()
        .unwrap()
}

/// An in-memory shop that stores whatever is posted and serves it back.
///
/// Collections are keyed by path, so `admin/products.json` and
/// `admin/products/{id}.json` address the same records.
#[derive(Debug, Default)]
pub struct MemoryShop {
    collections: Mutex<HashMap<String, BTreeMap<u64, (String, Value)>>>,
    next_id: AtomicU64,
}

enum Target {
    Collection(String),
    Count(String),
    Item(String, u64),
}

fn parse(path: &str) -> Target {
    let path = path.trim_start_matches('/');
    let path = path.strip_suffix(".json").unwrap_or(path);
    match path.rsplit_once('/') {
        Some((collection, "count")) => Target::Count(collection.to_string()),
        Some((collection, last)) => last
            .parse()
            .map_or_else(|_| Target::Collection(path.to_string()), |id| Target::Item(collection.to_string(), id)),
        None => Target::Collection(path.to_string()),
    }
}

fn not_found() -> HttpError {
    HttpError::Response(HttpResponseError {
        code: 404,
        message: r#"{"errors":"Not Found"}"#.to_string(),
        body: json!({"errors": "Not Found"}),
        error_reference: None,
    })
}

fn plural_key(collection: &str) -> &str {
    collection.rsplit('/').next().unwrap_or(collection)
}

fn single_member(body: Value) -> (String, Map<String, Value>) {
    let Value::Object(envelope) = body else {
        panic!("body is not an object");
    };
    let (key, record) = envelope.into_iter().next().expect("empty envelope");
    let Value::Object(record) = record else {
        panic!("record is not an object");
    };
    (key, record)
}

impl MemoryShop {
    pub fn new() -> Self {
        Self {
            collections: Mutex::default(),
            next_id: AtomicU64::new(1000),
        }
    }

    fn read(&self, path: &str) -> Result<Value, HttpError> {
        let collections = self.collections.lock().unwrap();
        match parse(path) {
            Target::Collection(collection) => {
                let records: Vec<Value> = collections
                    .get(&collection)
                    .map(|records| records.values().map(|(_, v)| v.clone()).collect())
                    .unwrap_or_default();
                Ok(json!({ plural_key(&collection): records }))
            }
            Target::Count(collection) => Ok(json!({"count": collections.get(&collection).map_or(0, BTreeMap::len)})),
            Target::Item(collection, id) => {
                let (key, record) = collections.get(&collection).and_then(|r| r.get(&id)).ok_or_else(not_found)?;
                Ok(json!({ key.as_str(): record }))
            }
        }
    }
}

impl Transport for MemoryShop {
    async fn get_page<T>(&self, path: &str, _query: &QueryParams) -> Result<ResourceResponse<T>, HttpError>
    where
        T: DeserializeOwned,
    {
        let body = self.read(path)?;
        Ok(ResourceResponse::from_data(serde_json::from_value(body)?))
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let Target::Collection(collection) = parse(path) else {
            return Err(not_found());
        };
        let (key, mut record) = single_member(serde_json::to_value(body)?);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        record.insert("id".to_string(), json!(id));
        let record = Value::Object(record);

        self.collections
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .insert(id, (key.clone(), record.clone()));
        Ok(serde_json::from_value(json!({ key: record }))?)
    }

    async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let Target::Item(collection, id) = parse(path) else {
            return Err(not_found());
        };
        let (key, changes) = single_member(serde_json::to_value(body)?);
        let mut collections = self.collections.lock().unwrap();
        let (_, Value::Object(stored)) = collections.get_mut(&collection).and_then(|r| r.get_mut(&id)).ok_or_else(not_found)?
        else {
            panic!("stored record is not an object");
        };
        stored.extend(changes);
        let record = Value::Object(stored.clone());
        Ok(serde_json::from_value(json!({ key: record }))?)
    }

    async fn delete(&self, path: &str) -> Result<(), HttpError> {
        let Target::Item(collection, id) = parse(path) else {
            return Err(not_found());
        };
        self.collections
            .lock()
            .unwrap()
            .get_mut(&collection)
            .and_then(|records| records.remove(&id))
            .map(|_| ())
            .ok_or_else(not_found)
    }
}
