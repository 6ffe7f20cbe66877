//! Admin REST resources.
//!
//! Each resource is a record type implementing
//! [`RestResource`](crate::rest::RestResource), a service trait describing
//! its operations, and a service struct implementing that trait over any
//! [`Transport`](crate::clients::Transport):
//!
//! | Record        | Trait                | Service          | Scope                        |
//! |---------------|----------------------|------------------|------------------------------|
//! | [`Customer`]  | [`CustomerService`]  | [`Customers`]    | shop                         |
//! | [`Product`]   | [`ProductService`]   | [`Products`]     | shop                         |
//! | [`Variant`]   | [`VariantService`]   | [`Variants`]     | product                      |
//! | [`Image`]     | [`ImageService`]     | [`Images`]       | product                      |
//! | [`Metafield`] | [`MetafieldService`] | [`Metafields`]   | shop, or any owner path      |
//! | [`Webhook`]   | [`WebhookService`]   | [`Webhooks`]     | shop                         |
//!
//! The traits must be in scope to call their methods; `use
//! shopify_admin::prelude::*` brings them all in.
//!
//! ## Variant Resource
//!
//! Variants are listed and created under a product but fetched and updated
//! by their own ID:
//!
//! ```rust,ignore
//! use shopify_admin::rest::resources::VariantService;
//!
//! let variants = shop.variants().list(632_910_392, None).await?;
//! let variant = shop.variants().get(808_950_810, None).await?;
//! ```

mod common;
mod customer;
mod image;
mod metafield;
mod product;
mod variant;
mod webhook;

pub use common::{CountOptions, GetOptions, ListOptions};
pub use customer::{Customer, CustomerAddress, CustomerService, CustomerState, Customers};
pub use image::{Image, ImageService, Images};
pub use metafield::{Metafield, MetafieldListOptions, MetafieldService, Metafields};
pub use product::{Product, ProductListOptions, ProductOption, ProductService, ProductStatus, Products};
pub use variant::{Variant, VariantService, Variants, WeightUnit};
pub use webhook::{Webhook, WebhookFormat, WebhookListOptions, WebhookService, Webhooks};
