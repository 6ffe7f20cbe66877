//! Option bags to URL query parameters.

use serde::Serialize;
use serde_json::Value;

use crate::clients::QueryParams;

/// Serializes an options struct into query parameters.
///
/// Unset and zero-valued entries are dropped: `null`, `0`, `""` and empty
/// arrays never reach the URL. Booleans are always kept, arrays are joined
/// with commas and nested objects are sent as JSON.
///
/// ```rust
/// use shopify_admin::rest::serialize_to_query;
/// use serde_json::json;
///
/// let query = serialize_to_query(&json!({
///     "limit": 50,
///     "since_id": 0,
///     "ids": [1, 2, 3],
///     "fields": "",
///     "published": false,
/// }))
/// .unwrap();
///
/// assert_eq!(query.get("limit").map(String::as_str), Some("50"));
/// assert_eq!(query.get("ids").map(String::as_str), Some("1,2,3"));
/// assert_eq!(query.get("published").map(String::as_str), Some("false"));
/// assert!(!query.contains_key("since_id"));
/// assert!(!query.contains_key("fields"));
/// ```
///
/// # Errors
///
/// Returns the serializer error if `params` cannot be represented as JSON.
pub fn serialize_to_query<T: Serialize + ?Sized>(params: &T) -> Result<QueryParams, serde_json::Error> {
    let mut query = QueryParams::new();

    if let Value::Object(map) = serde_json::to_value(params)? {
        for (key, value) in map {
            if let Some(value) = query_value(value) {
                query.insert(key, value);
            }
        }
    }

    Ok(query)
}

fn query_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) if is_zero(&n) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Array(items) => {
            let joined: Vec<String> = items.into_iter().filter_map(query_value).collect();
            (!joined.is_empty()).then(|| joined.join(","))
        }
        object @ Value::Object(_) => Some(object.to_string()),
    }
}

fn is_zero(n: &serde_json::Number) -> bool {
    n.as_u64() == Some(0) || n.as_i64() == Some(0) || n.as_f64().is_some_and(|f| f == 0.0)
}
