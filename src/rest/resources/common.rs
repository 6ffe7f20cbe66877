//! Option bags shared by several resources.
//!
//! Every field is optional. Unset, zero and empty values are left out of the
//! query string, so `ListOptions { since_id: Some(0), ..Default::default() }`
//! sends no `since_id` at all. Filters the typed fields do not cover go in
//! `extra`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Filters and paging for list operations.
///
/// ```rust
/// use shopify_admin::rest::resources::ListOptions;
/// use shopify_admin::rest::serialize_to_query;
///
/// let options = ListOptions {
///     limit: Some(50),
///     since_id: Some(0),
///     ..Default::default()
/// }
/// .with("vendor", "Burton");
///
/// let query = serialize_to_query(&options).unwrap();
/// assert_eq!(query["limit"], "50");
/// assert_eq!(query["vendor"], "Burton");
/// assert!(!query.contains_key("since_id"));
/// ```
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[must_use]
pub struct ListOptions {
    /// Restrict results to these IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Page size (Shopify caps it at 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Only return records with an ID greater than this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Cursor from a previous page's `Link` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    /// Show records created at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show records created at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Show records last updated at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Show records last updated at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Only return these fields of each record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Additional query parameters.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ListOptions {
    /// Options that fetch the page behind a pagination cursor.
    pub fn page(page_info: impl Into<String>) -> Self {
        Self {
            page_info: Some(page_info.into()),
            ..Self::default()
        }
    }

    /// Adds a query parameter with no typed field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Filters for count operations.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[must_use]
pub struct CountOptions {
    /// Count records created at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Count records created at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Count records last updated at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Count records last updated at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Additional query parameters.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl CountOptions {
    /// Adds a query parameter with no typed field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Options for fetching a single record.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[must_use]
pub struct GetOptions {
    /// Only return these fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Additional query parameters.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl GetOptions {
    /// Restricts the response to `fields`.
    pub fn fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: Some(fields.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }
}
