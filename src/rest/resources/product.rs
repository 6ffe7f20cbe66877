//! Product resource implementation.
//!
//! This module provides the Product resource, which represents a product in a Shopify store.
//! Products carry their variants, options and images inline; the
//! [`Variant`] and [`Image`] services manage those one at a time.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::rest::resources::{Product, ProductListOptions, ProductService, ProductStatus};
//!
//! // List active products from one vendor
//! let options = ProductListOptions {
//!     vendor: Some("Burton".to_string()),
//!     status: Some(ProductStatus::Active),
//!     ..Default::default()
//! };
//! let products = shop.products().list(Some(&options)).await?;
//!
//! // Create a new product
//! let product = Product {
//!     title: Some("Burton Custom Freestyle 151".to_string()),
//!     vendor: Some("Burton".to_string()),
//!     product_type: Some("Snowboard".to_string()),
//!     ..Default::default()
//! };
//! let saved = shop.products().create(&product).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::Transport;
use crate::rest::{ResourceClient, ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource};

use super::common::{CountOptions, GetOptions, ListOptions};
use super::image::Image;
use super::variant::Variant;

/// The status of a product.
///
/// Determines whether a product is visible to customers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// The product is active and visible to customers.
    #[default]
    Active,
    /// The product is archived and not visible to customers.
    Archived,
    /// The product is a draft and not visible to customers.
    Draft,
}

/// A product option such as "Size" or "Color".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductOption {
    /// The unique identifier of the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the product this option belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The name of the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The position of the option in the product's option list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    /// The possible values for this option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// A product in a Shopify store.
///
/// # Fields
///
/// ## Writable Fields
/// - `title`, `body_html`, `vendor`, `product_type`, `handle`
/// - `published_at`, `published_scope`, `status`, `tags`, `template_suffix`
/// - `variants`, `options`, `images`, `image`
///
/// ## Read-Only Fields
/// - `created_at`, `updated_at`, `admin_graphql_api_id`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Product {
    /// The unique identifier of the product, assigned by Shopify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The name of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The description of the product in HTML format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The name of the product's vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// A categorization for the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// The URL-friendly name of the product. Generated from the title when
    /// not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// When the product was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the product was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the product was published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// Where the product is published.
    /// Valid values: "web", "global".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    /// The status of the product: active, archived, or draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    /// A comma-separated list of tags for the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// The suffix of the Liquid template used for the product page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// The admin GraphQL API ID for this product.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,

    /// The variants of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,

    /// The options of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,

    /// All images associated with the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,

    /// The featured image of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl RestResource for Product {
    const NAME: &'static str = "Product";
    const PLURAL: &'static str = "products";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::Find, &["id"], "admin/products/{id}.json"),
        ResourcePath::new(ResourceOperation::All, &[], "admin/products.json"),
        ResourcePath::new(ResourceOperation::Count, &[], "admin/products/count.json"),
        ResourcePath::new(ResourceOperation::Create, &[], "admin/products.json"),
        ResourcePath::new(ResourceOperation::Update, &["id"], "admin/products/{id}.json"),
        ResourcePath::new(ResourceOperation::Delete, &["id"], "admin/products/{id}.json"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing products.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[must_use]
pub struct ProductListOptions {
    /// Filter by product title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Filter by product vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Filter by product handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Filter by product type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Filter by collection ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    /// Filter by published status.
    /// Valid values: "published", "unpublished", "any".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,

    /// Filter by product status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    /// Paging, ID and date filters.
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Operations on products.
#[allow(async_fn_in_trait)]
pub trait ProductService {
    /// Lists products.
    async fn list(&self, options: Option<&ProductListOptions>) -> Result<Vec<Product>, ResourceError>;

    /// Lists one page of products with its pagination cursors.
    async fn list_page(
        &self,
        options: Option<&ProductListOptions>,
    ) -> Result<ResourceResponse<Vec<Product>>, ResourceError>;

    /// Counts products.
    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError>;

    /// Fetches a product.
    async fn get(&self, product_id: u64, options: Option<&GetOptions>) -> Result<Product, ResourceError>;

    /// Creates a product.
    async fn create(&self, product: &Product) -> Result<Product, ResourceError>;

    /// Updates a product.
    async fn update(&self, product: &Product) -> Result<Product, ResourceError>;

    /// Deletes a product.
    async fn delete(&self, product_id: u64) -> Result<(), ResourceError>;
}

/// [`ProductService`] over any [`Transport`].
#[derive(Debug)]
pub struct Products<'c, T> {
    resource: ResourceClient<'c, T, Product>,
}

impl<'c, T: Transport> Products<'c, T> {
    /// Creates the service over `transport`.
    #[must_use]
    pub const fn new(transport: &'c T) -> Self {
        Self {
            resource: ResourceClient::new(transport),
        }
    }
}

impl<T: Transport> ProductService for Products<'_, T> {
    async fn list(&self, options: Option<&ProductListOptions>) -> Result<Vec<Product>, ResourceError> {
        self.resource.list(&[], options).await
    }

    async fn list_page(
        &self,
        options: Option<&ProductListOptions>,
    ) -> Result<ResourceResponse<Vec<Product>>, ResourceError> {
        self.resource.list_page(&[], options).await
    }

    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError> {
        self.resource.count(&[], options).await
    }

    async fn get(&self, product_id: u64, options: Option<&GetOptions>) -> Result<Product, ResourceError> {
        self.resource.get(&[], product_id, options).await
    }

    async fn create(&self, product: &Product) -> Result<Product, ResourceError> {
        self.resource.create(&[], product).await
    }

    async fn update(&self, product: &Product) -> Result<Product, ResourceError> {
        self.resource.update(&[], product).await
    }

    async fn delete(&self, product_id: u64) -> Result<(), ResourceError> {
        self.resource.delete(&[], product_id).await
    }
}
