//! REST resource infrastructure for the Shopify Admin API.
//!
//! This module provides the pieces every resource service is built from:
//!
//! - **[`RestResource`] trait**: names a record type and lists its endpoints
//! - **[`ResourceClient`]**: the one generic list/count/get/create/update/delete
//!   helper, parameterized by transport and record type
//! - **[`ResourceResponse<T>`]**: a Deref-based wrapper carrying pagination
//!   and call-limit metadata
//! - **Path building**: multiple templates per operation for nested resources
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! The concrete records and their services (Customer, Product, Variant,
//! Image, Metafield, Webhook) live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::rest::resources::{ProductService, ListOptions};
//! use shopify_admin::{ShopifyClient, ShopifyConfig};
//!
//! let shop = ShopifyClient::new(&config)?;
//!
//! let page = shop.products().list_page(None).await?;
//! for product in page.iter() {
//!     println!("- {:?}", product.title);
//! }
//!
//! if let Some(cursor) = page.next_page_info() {
//!     let next = ListOptions::page(cursor);
//!     // ...
//! }
//! ```

mod envelope;
mod errors;
mod path;
mod query;
mod resource;
mod response;

#[cfg(test)]
pub(crate) mod testing;

pub mod resources;

// Public exports
pub use errors::ResourceError;
pub use path::{build_path, get_path, normalize_owner_path, ResourceOperation, ResourcePath};
pub use query::serialize_to_query;
pub use resource::{ParentIds, ResourceClient, RestResource};
pub use response::ResourceResponse;
