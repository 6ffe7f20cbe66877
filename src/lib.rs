//! # Shopify Admin REST
//!
//! Typed async bindings for the Shopify Admin REST API: customers, products,
//! variants, images, metafields and webhook subscriptions.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Validated newtypes for the shop domain and credentials
//! - An async HTTP transport with retry, call-limit throttling and pagination
//!   parsing ([`HttpClient`])
//! - One service per resource with list, count, get, create, update and
//!   delete ([`ShopifyClient`])
//! - Status-mapped errors: 404 is [`ResourceError::NotFound`], 422 is
//!   [`ResourceError::ValidationFailed`]
//! - HMAC verification of webhook deliveries ([`webhooks`])
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_admin::{AccessToken, ShopDomain, ShopifyClient, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .max_tries(3)
//!     .build()
//!     .unwrap();
//!
//! let shop = ShopifyClient::new(&config).unwrap();
//! # let _ = shop;
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use shopify_admin::prelude::*;
//!
//! let product = shop.products().get(632_910_392, None).await?;
//!
//! let mut variant = shop.variants().get(808_950_810, None).await?;
//! variant.price = Some("24.99".parse()?);
//! shop.variants().update(&variant).await?;
//!
//! match shop.customers().get(1, None).await {
//!     Err(ResourceError::NotFound { .. }) => println!("no such customer"),
//!     other => println!("{other:?}"),
//! }
//! ```
//!
//! ## Logging
//!
//! Requests, retries, throttling and deprecation notices are reported
//! through [`tracing`]; install any subscriber to see them.
//!
//! ## Thread Safety
//!
//! [`ShopifyConfig`], [`HttpClient`] and [`ShopifyClient`] are `Send + Sync`.
//! One client can serve any number of concurrent tasks.

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod shopify;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiSecretKey, HostUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder};
pub use error::ConfigError;

pub use clients::{HttpClient, HttpError, HttpMethod, Transport};
pub use rest::{ResourceError, ResourceResponse};
pub use shopify::ShopifyClient;

pub use rest::resources::{
    Customer, CustomerAddress, Image, Metafield, Product, ProductOption, ProductStatus, Variant, Webhook,
    WebhookFormat, WeightUnit,
};

/// The service traits plus the types most calls need.
///
/// ```rust
/// use shopify_admin::prelude::*;
/// ```
pub mod prelude {
    pub use crate::rest::resources::{
        CountOptions, CustomerService, GetOptions, ImageService, ListOptions, MetafieldListOptions,
        MetafieldService, ProductListOptions, ProductService, VariantService, WebhookListOptions, WebhookService,
    };
    pub use crate::rest::{ResourceError, ResourceResponse};
    pub use crate::ShopifyClient;
}
