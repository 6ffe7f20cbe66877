//! `{"product": {...}}` and `{"products": [...]}` wrappers.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::rest::ResourceError;

/// Wraps a record as `{key: record}`.
pub(crate) fn wrap<R: Serialize>(resource: &'static str, key: &str, record: &R) -> Result<Value, ResourceError> {
    let value = serde_json::to_value(record).map_err(|e| ResourceError::Encode {
        resource,
        message: e.to_string(),
    })?;
    let mut envelope = Map::with_capacity(1);
    envelope.insert(key.to_string(), value);
    Ok(Value::Object(envelope))
}

/// Extracts the record under `key`; a missing or null member is an error.
pub(crate) fn unwrap_single<R: DeserializeOwned>(
    resource: &'static str,
    key: &str,
    body: Value,
) -> Result<R, ResourceError> {
    let value = take_member(body, key)
        .filter(|v| !v.is_null())
        .ok_or_else(|| ResourceError::Decode {
            resource,
            message: format!("response body has no '{key}' member"),
        })?;
    decode(resource, value)
}

/// Extracts the records under `key`; a missing or null member is empty.
pub(crate) fn unwrap_list<R: DeserializeOwned>(
    resource: &'static str,
    key: &str,
    body: Value,
) -> Result<Vec<R>, ResourceError> {
    match take_member(body, key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => decode(resource, value),
    }
}

fn take_member(body: Value, key: &str) -> Option<Value> {
    match body {
        Value::Object(mut map) => map.remove(key),
        _ => None,
    }
}

fn decode<T: DeserializeOwned>(resource: &'static str, value: Value) -> Result<T, ResourceError> {
    serde_json::from_value(value).map_err(|e| ResourceError::Decode {
        resource,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Thing {
        id: u64,
    }

    #[test]
    fn test_wrap_uses_singular_key() {
        let body = wrap("Thing", "webhook", &Thing { id: 4 }).unwrap();
        assert_eq!(body, json!({"webhook": {"id": 4}}));
    }

    #[test]
    fn test_unwrap_single() {
        let thing: Thing = unwrap_single("Thing", "thing", json!({"thing": {"id": 9}})).unwrap();
        assert_eq!(thing, Thing { id: 9 });

        let missing = unwrap_single::<Thing>("Thing", "thing", json!({"other": {}}));
        assert!(matches!(missing, Err(ResourceError::Decode { resource: "Thing", .. })));

        let null = unwrap_single::<Thing>("Thing", "thing", json!({"thing": null}));
        assert!(null.is_err());
    }

    #[test]
    fn test_unwrap_list_treats_missing_as_empty() {
        let things: Vec<Thing> = unwrap_list("Thing", "things", json!({"things": []})).unwrap();
        assert!(things.is_empty());

        let things: Vec<Thing> = unwrap_list("Thing", "things", json!({})).unwrap();
        assert!(things.is_empty());

        let things: Vec<Thing> = unwrap_list("Thing", "things", json!({"things": null})).unwrap();
        assert!(things.is_empty());

        let things: Vec<Thing> = unwrap_list("Thing", "things", json!({"things": [{"id": 1}, {"id": 2}]})).unwrap();
        assert_eq!(things.len(), 2);
    }

    #[test]
    fn test_unwrap_list_reports_shape_errors() {
        let result = unwrap_list::<Thing>("Thing", "things", json!({"things": {"id": 1}}));
        assert!(matches!(result, Err(ResourceError::Decode { .. })));
    }
}
