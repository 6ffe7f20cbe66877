//! Response wrapper carrying data plus Shopify response metadata.
//!
//! [`ResourceResponse<T>`] implements `Deref<Target = T>`, so a page of
//! products can be iterated, indexed and measured directly:
//!
//! ```rust,ignore
//! let page = shop.products().list_page(None).await?;
//! for product in page.iter() {
//!     println!("{:?}", product.title);
//! }
//! if let Some(cursor) = page.next_page_info() {
//!     // pass `cursor` as `page_info` to fetch the next page
//! }
//! let products = page.into_inner();
//! ```

use std::ops::{Deref, DerefMut};

use crate::clients::{ApiCallLimit, PaginationInfo};

/// Data returned by a request, with pagination cursors, call limit and
/// request id.
///
/// ```rust
/// use shopify_admin::rest::ResourceResponse;
/// use shopify_admin::clients::{ApiCallLimit, PaginationInfo};
///
/// let response = ResourceResponse::new(
///     vec!["a", "b"],
///     Some(PaginationInfo {
///         prev_page_info: None,
///         next_page_info: Some("eyJsYXN0X2lkIjo0fQ".to_string()),
///     }),
///     Some(ApiCallLimit { request_count: 1, bucket_size: 40 }),
///     Some("req-123".to_string()),
/// );
///
/// assert_eq!(response.len(), 2);
/// assert!(response.has_next_page());
/// assert_eq!(response.request_id(), Some("req-123"));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: Option<PaginationInfo>,
    rate_limit: Option<ApiCallLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: Option<PaginationInfo>,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Wraps data that came without response metadata.
    #[must_use]
    pub const fn from_data(data: T) -> Self {
        Self::new(data, None, None, None)
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns `true` if the `Link` header advertised a next page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_page_info().is_some()
    }

    /// Returns `true` if the `Link` header advertised a previous page.
    #[must_use]
    pub fn has_prev_page(&self) -> bool {
        self.prev_page_info().is_some()
    }

    /// Returns the `page_info` cursor for the next page.
    #[must_use]
    pub fn next_page_info(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.next_page_info.as_deref())
    }

    /// Returns the `page_info` cursor for the previous page.
    #[must_use]
    pub fn prev_page_info(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.prev_page_info.as_deref())
    }

    /// Returns the pagination info, if any.
    #[must_use]
    pub const fn pagination(&self) -> Option<&PaginationInfo> {
        self.pagination.as_ref()
    }

    /// Returns the call limit reported with this response.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the `X-Request-Id` of this response.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data while preserving metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }

    /// Maps the inner data with a fallible function while preserving metadata.
    ///
    /// # Errors
    ///
    /// Returns whatever error `f` returns.
    pub fn try_map<U, E, F>(self, f: F) -> Result<ResourceResponse<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Ok(ResourceResponse {
            data: f(self.data)?,
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
