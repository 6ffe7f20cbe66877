//! Path templates for REST resources.
//!
//! Each resource lists its endpoints as [`ResourcePath`] constants. A call
//! picks the most specific template whose placeholders it can fill, then
//! interpolates the IDs:
//!
//! ```rust
//! use shopify_admin::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         ResourceOperation::Delete,
//!         &["product_id", "id"],
//!         "admin/products/{product_id}/variants/{id}.json",
//!     ),
//!     ResourcePath::new(ResourceOperation::Find, &["id"], "admin/variants/{id}.json"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Delete, &["product_id", "id"]).unwrap();
//! let url = build_path(path.template, &[("product_id", 632_910_392), ("id", 808_950_810)]);
//! assert_eq!(url, "admin/products/632910392/variants/808950810.json");
//! ```

use crate::clients::HttpMethod;
use std::fmt;

/// Operations a resource endpoint can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch one record (GET /resources/{id}).
    Find,
    /// List records (GET /resources).
    All,
    /// Create a record (POST /resources).
    Create,
    /// Update a record (PUT /resources/{id}).
    Update,
    /// Delete a record (DELETE /resources/{id}).
    Delete,
    /// Count records (GET /resources/count).
    Count,
}

impl ResourceOperation {
    /// Returns the HTTP method this operation is sent with.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::All | Self::Count => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Count => "count",
        }
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One endpoint of a resource: the operation, the IDs its template needs,
/// and the template itself (`admin/products/{product_id}/images/{id}.json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The operation this path serves.
    pub operation: ResourceOperation,
    /// Placeholder names the template requires.
    pub ids: &'static [&'static str],
    /// The URL template, relative to the shop origin.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            operation,
            ids,
            template,
        }
    }

    /// Returns `true` if every required ID is available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the most specific path for `operation` that the available IDs
/// can fill.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.ids.len())
}

/// Replaces `{name}` placeholders in `template` with the matching IDs.
#[must_use]
pub fn build_path<V: fmt::Display>(template: &str, ids: &[(&str, V)]) -> String {
    ids.iter().fold(template.to_string(), |path, (key, value)| {
        path.replace(&format!("{{{key}}}"), &value.to_string())
    })
}

/// Normalizes a caller-supplied owner path such as `/orders/123/`.
///
/// Leading and trailing separators are removed; `None` is returned when
/// nothing is left.
///
/// ```rust
/// use shopify_admin::rest::normalize_owner_path;
///
/// assert_eq!(normalize_owner_path("/orders/123/").as_deref(), Some("orders/123"));
/// assert_eq!(normalize_owner_path("orders/123").as_deref(), Some("orders/123"));
/// assert_eq!(normalize_owner_path("//"), None);
/// ```
#[must_use]
pub fn normalize_owner_path(path: &str) -> Option<String> {
    let trimmed = path.trim().trim_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
