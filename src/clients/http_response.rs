//! Incoming response and Shopify header parsing.

use std::collections::HashMap;

/// Request budget parsed from the `X-Shopify-Shop-Api-Call-Limit` header.
///
/// The header format is "X/Y": X requests are in the leaky bucket, which
/// holds Y.
///
/// ```rust
/// use shopify_admin::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("39/40").unwrap();
/// assert_eq!(limit.remaining(), 1);
/// assert!(!limit.is_exhausted());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// The current number of requests in the bucket.
    pub request_count: u32,
    /// The bucket capacity.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses the header value, returning `None` when it is not "X/Y".
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: count.parse().ok()?,
            bucket_size: size.parse().ok()?,
        })
    }

    /// Returns how many requests fit before the bucket is full.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }

    /// Returns `true` when the next request would be rejected with 429.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

/// Cursor pagination parsed from the `Link` header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// The `page_info` value for the previous page, if any.
    pub prev_page_info: Option<String>,
    /// The `page_info` value for the next page, if any.
    pub next_page_info: Option<String>,
}

impl PaginationInfo {
    /// Parses a header of the form `<url>; rel="next", <url>; rel="previous"`.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in header_value.split(',') {
            let mut parts = link.split(';').map(str::trim);
            let Some(url) = parts
                .next()
                .map(|s| s.trim_start_matches('<').trim_end_matches('>'))
            else {
                continue;
            };
            let rel = parts.find_map(|part| part.strip_prefix("rel=").map(|r| r.trim_matches('"')));

            let Some(page_info) = Self::extract_page_info(url) else {
                continue;
            };
            match rel {
                Some("previous") => result.prev_page_info = Some(page_info),
                Some("next") => result.next_page_info = Some(page_info),
                _ => {}
            }
        }

        result
    }

    /// Returns `true` if neither cursor is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.prev_page_info.is_none() && self.next_page_info.is_none()
    }

    fn extract_page_info(url: &str) -> Option<String> {
        let (_, query) = url.split_once('?')?;
        query.split('&').find_map(|param| {
            param
                .split_once('=')
                .filter(|(key, _)| *key == "page_info")
                .map(|(_, value)| value.to_string())
        })
    }
}

/// A response from the Admin API with Shopify headers parsed.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased, possibly multi-valued.
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded body; `{}` for empty bodies.
    pub body: serde_json::Value,
    /// Cursors from the `Link` header.
    pub pagination: Option<PaginationInfo>,
    /// Budget from `X-Shopify-Shop-Api-Call-Limit`.
    pub api_call_limit: Option<ApiCallLimit>,
    /// Seconds to wait before retrying, from `Retry-After`.
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a response, parsing the call limit, link and retry headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let first = |name: &str| headers.get(name).and_then(|values| values.first());

        let pagination = first("link")
            .map(|link| PaginationInfo::parse_link_header(link))
            .filter(|info| !info.is_empty());
        let api_call_limit = first("x-shopify-shop-api-call-limit").and_then(|v| ApiCallLimit::parse(v));
        let retry_request_after = first("retry-after").and_then(|v| v.trim().parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            pagination,
            api_call_limit,
            retry_request_after,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_only_for_2xx() {
        assert!(HttpResponse::new(200, HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(201, HashMap::new(), json!({})).is_ok());
        for code in [301, 404, 422, 429, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), json!({})).is_ok());
        }
    }

    #[test]
    fn test_api_call_limit_parsing() {
        let limit = ApiCallLimit::parse("40/80").unwrap();
        assert_eq!(limit.request_count, 40);
        assert_eq!(limit.bucket_size, 80);
        assert_eq!(limit.remaining(), 40);

        assert!(ApiCallLimit::parse("invalid").is_none());
        assert!(ApiCallLimit::parse("40").is_none());
        assert!(ApiCallLimit::parse("40/").is_none());
        assert!(ApiCallLimit::parse("abc/def").is_none());
    }

    #[test]
    fn test_api_call_limit_exhaustion() {
        assert!(ApiCallLimit::parse("40/40").unwrap().is_exhausted());
        assert!(ApiCallLimit::parse("41/40").unwrap().is_exhausted());
        assert!(!ApiCallLimit::parse("39/40").unwrap().is_exhausted());
    }

    #[test]
    fn test_link_header_parsing() {
        let link = r#"<https://shop.myshopify.com/admin/products.json?limit=2&page_info=abc123>; rel="next", <https://shop.myshopify.com/admin/products.json?page_info=xyz789>; rel="previous""#;
        let info = PaginationInfo::parse_link_header(link);
        assert_eq!(info.next_page_info.as_deref(), Some("abc123"));
        assert_eq!(info.prev_page_info.as_deref(), Some("xyz789"));

        let link = r#"<https://shop.myshopify.com/admin/products.json?page_info=abc123>; rel="next""#;
        let info = PaginationInfo::parse_link_header(link);
        assert_eq!(info.next_page_info.as_deref(), Some("abc123"));
        assert!(info.prev_page_info.is_none());
    }

    #[test]
    fn test_link_without_page_info_is_ignored() {
        let info = PaginationInfo::parse_link_header(r#"<https://example.com/x.json>; rel="next""#);
        assert!(info.is_empty());
    }

    #[test]
    fn test_response_parses_shopify_headers() {
        let response = HttpResponse::new(
            429,
            headers(&[
                ("retry-after", "2.5"),
                ("x-shopify-shop-api-call-limit", "40/40"),
                ("x-request-id", "abc-123-xyz"),
                ("x-shopify-api-deprecated-reason", "Use the GraphQL API"),
            ]),
            json!({}),
        );

        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
        assert!(response.api_call_limit.unwrap().is_exhausted());
        assert_eq!(response.request_id(), Some("abc-123-xyz"));
        assert_eq!(response.deprecation_reason(), Some("Use the GraphQL API"));
        assert!(response.pagination.is_none());
    }
}
