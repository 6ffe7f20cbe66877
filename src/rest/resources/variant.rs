//! Variant resource implementation.
//!
//! A variant is one purchasable version of a product (a size, a color).
//! Variants are listed, counted, created and deleted under their product,
//! but fetched and updated through the standalone `variants/{id}` path.
//!
//! # Example
//!
//! ```rust,ignore
//! use rust_decimal::Decimal;
//! use shopify_admin::rest::resources::{Variant, VariantService};
//!
//! let variants = shop.variants().list(632_910_392, None).await?;
//!
//! let mut variant = shop.variants().get(808_950_810, None).await?;
//! variant.price = Some(Decimal::new(19_99, 2));
//! let saved = shop.variants().update(&variant).await?;
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::Transport;
use crate::rest::{ResourceClient, ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource};

use super::common::{CountOptions, GetOptions, ListOptions};

/// Unit of a variant's `weight`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Grams.
    G,
    /// Kilograms.
    #[default]
    Kg,
    /// Ounces.
    Oz,
    /// Pounds.
    Lb,
}

/// A product variant.
///
/// Prices and weights are exact decimals; Shopify sends prices as strings
/// such as `"199.00"` and the scale is kept on the way back.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Variant {
    /// The unique identifier of the variant, assigned by Shopify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the owning product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The title of the variant, derived from its option values.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub title: Option<String>,

    /// The price of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,

    /// The original price, shown struck through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<Decimal>,

    /// The stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The barcode, UPC or ISBN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// The position in the product's variant list, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    /// Whether to keep selling when out of stock ("deny" or "continue").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_policy: Option<String>,

    /// The fulfillment service handling the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,

    /// Who tracks inventory ("shopify" or absent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_management: Option<String>,

    /// The value of the first option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,

    /// The value of the second option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,

    /// The value of the third option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,

    /// Whether tax is charged on the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,

    /// Whether the variant needs shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,

    /// The weight in `weight_unit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,

    /// The unit of `weight`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<WeightUnit>,

    /// The weight in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<u64>,

    /// The ID of the variant's image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<u64>,

    /// The ID of the linked inventory item.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub inventory_item_id: Option<u64>,

    /// Units available across all locations.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub inventory_quantity: Option<i64>,

    /// When the variant was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the variant was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The GraphQL Admin API ID.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Variant {
    const NAME: &'static str = "Variant";
    const PLURAL: &'static str = "variants";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            ResourceOperation::All,
            &["product_id"],
            "admin/products/{product_id}/variants.json",
        ),
        ResourcePath::new(
            ResourceOperation::Count,
            &["product_id"],
            "admin/products/{product_id}/variants/count.json",
        ),
        ResourcePath::new(ResourceOperation::Find, &["id"], "admin/variants/{id}.json"),
        ResourcePath::new(
            ResourceOperation::Create,
            &["product_id"],
            "admin/products/{product_id}/variants.json",
        ),
        ResourcePath::new(ResourceOperation::Update, &["id"], "admin/variants/{id}.json"),
        ResourcePath::new(
            ResourceOperation::Delete,
            &["product_id", "id"],
            "admin/products/{product_id}/variants/{id}.json",
        ),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on product variants.
#[allow(async_fn_in_trait)]
pub trait VariantService {
    /// Lists the variants of a product.
    async fn list(&self, product_id: u64, options: Option<&ListOptions>) -> Result<Vec<Variant>, ResourceError>;

    /// Lists one page of a product's variants with its pagination cursors.
    async fn list_page(
        &self,
        product_id: u64,
        options: Option<&ListOptions>,
    ) -> Result<ResourceResponse<Vec<Variant>>, ResourceError>;

    /// Counts the variants of a product.
    async fn count(&self, product_id: u64, options: Option<&CountOptions>) -> Result<u64, ResourceError>;

    /// Fetches a variant by its own ID.
    async fn get(&self, variant_id: u64, options: Option<&GetOptions>) -> Result<Variant, ResourceError>;

    /// Adds a variant to a product.
    async fn create(&self, product_id: u64, variant: &Variant) -> Result<Variant, ResourceError>;

    /// Updates a variant at the path of its ID.
    async fn update(&self, variant: &Variant) -> Result<Variant, ResourceError>;

    /// Removes a variant from a product.
    async fn delete(&self, product_id: u64, variant_id: u64) -> Result<(), ResourceError>;
}

/// [`VariantService`] over any [`Transport`].
#[derive(Debug)]
pub struct Variants<'c, T> {
    resource: ResourceClient<'c, T, Variant>,
}

impl<'c, T: Transport> Variants<'c, T> {
    /// Creates the service over `transport`.
    #[must_use]
    pub const fn new(transport: &'c T) -> Self {
        Self {
            resource: ResourceClient::new(transport),
        }
    }
}

impl<T: Transport> VariantService for Variants<'_, T> {
    async fn list(&self, product_id: u64, options: Option<&ListOptions>) -> Result<Vec<Variant>, ResourceError> {
        self.resource.list(&[("product_id", product_id)], options).await
    }

    async fn list_page(
        &self,
        product_id: u64,
        options: Option<&ListOptions>,
    ) -> Result<ResourceResponse<Vec<Variant>>, ResourceError> {
        self.resource.list_page(&[("product_id", product_id)], options).await
    }

    async fn count(&self, product_id: u64, options: Option<&CountOptions>) -> Result<u64, ResourceError> {
        self.resource.count(&[("product_id", product_id)], options).await
    }

    async fn get(&self, variant_id: u64, options: Option<&GetOptions>) -> Result<Variant, ResourceError> {
        self.resource.get(&[], variant_id, options).await
    }

    async fn create(&self, product_id: u64, variant: &Variant) -> Result<Variant, ResourceError> {
        self.resource.create(&[("product_id", product_id)], variant).await
    }

    async fn update(&self, variant: &Variant) -> Result<Variant, ResourceError> {
        self.resource.update(&[], variant).await
    }

    async fn delete(&self, product_id: u64, variant_id: u64) -> Result<(), ResourceError> {
        self.resource.delete(&[("product_id", product_id)], variant_id).await
    }
}
