//! Product image resource implementation.
//!
//! Images always live under a product:
//! `admin/products/{product_id}/images[/{id}].json`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::rest::resources::{Image, ImageService};
//!
//! let image = Image {
//!     src: Some("https://example.com/rails_logo.gif".to_string()),
//!     alt: Some("Rails logo".to_string()),
//!     ..Default::default()
//! };
//! let saved = shop.images().create(632_910_392, &image).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::Transport;
use crate::rest::{ResourceClient, ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource};

use super::common::{CountOptions, GetOptions, ListOptions};

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Image {
    /// The unique identifier of the image, assigned by Shopify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the owning product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The order of the image in the product's image list, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    /// The image URL. On create Shopify downloads it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// A base64-encoded image, as an alternative to `src` on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,

    /// The file name used with `attachment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Width in pixels.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub width: Option<u32>,

    /// Height in pixels.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub height: Option<u32>,

    /// Variants shown with this image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_ids: Option<Vec<u64>>,

    /// When the image was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the image was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The GraphQL Admin API ID.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Image {
    const NAME: &'static str = "Image";
    const PLURAL: &'static str = "images";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            ResourceOperation::All,
            &["product_id"],
            "admin/products/{product_id}/images.json",
        ),
        ResourcePath::new(
            ResourceOperation::Count,
            &["product_id"],
            "admin/products/{product_id}/images/count.json",
        ),
        ResourcePath::new(
            ResourceOperation::Find,
            &["product_id", "id"],
            "admin/products/{product_id}/images/{id}.json",
        ),
        ResourcePath::new(
            ResourceOperation::Create,
            &["product_id"],
            "admin/products/{product_id}/images.json",
        ),
        ResourcePath::new(
            ResourceOperation::Update,
            &["product_id", "id"],
            "admin/products/{product_id}/images/{id}.json",
        ),
        ResourcePath::new(
            ResourceOperation::Delete,
            &["product_id", "id"],
            "admin/products/{product_id}/images/{id}.json",
        ),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on product images.
#[allow(async_fn_in_trait)]
pub trait ImageService {
    /// Lists the images of a product.
    async fn list(&self, product_id: u64, options: Option<&ListOptions>) -> Result<Vec<Image>, ResourceError>;

    /// Lists one page of a product's images with its pagination cursors.
    async fn list_page(
        &self,
        product_id: u64,
        options: Option<&ListOptions>,
    ) -> Result<ResourceResponse<Vec<Image>>, ResourceError>;

    /// Counts the images of a product.
    async fn count(&self, product_id: u64, options: Option<&CountOptions>) -> Result<u64, ResourceError>;

    /// Fetches one image of a product.
    async fn get(&self, product_id: u64, image_id: u64, options: Option<&GetOptions>) -> Result<Image, ResourceError>;

    /// Adds an image to a product.
    async fn create(&self, product_id: u64, image: &Image) -> Result<Image, ResourceError>;

    /// Updates an image of a product.
    async fn update(&self, product_id: u64, image: &Image) -> Result<Image, ResourceError>;

    /// Removes an image from a product.
    async fn delete(&self, product_id: u64, image_id: u64) -> Result<(), ResourceError>;
}

/// [`ImageService`] over any [`Transport`].
#[derive(Debug)]
pub struct Images<'c, T> {
    resource: ResourceClient<'c, T, Image>,
}

impl<'c, T: Transport> Images<'c, T> {
    /// Creates the service over `transport`.
    #[must_use]
    pub const fn new(transport: &'c T) -> Self {
        Self {
            resource: ResourceClient::new(transport),
        }
    }
}

impl<T: Transport> ImageService for Images<'_, T> {
    async fn list(&self, product_id: u64, options: Option<&ListOptions>) -> Result<Vec<Image>, ResourceError> {
        self.resource.list(&[("product_id", product_id)], options).await
    }

    async fn list_page(
        &self,
        product_id: u64,
        options: Option<&ListOptions>,
    ) -> Result<ResourceResponse<Vec<Image>>, ResourceError> {
        self.resource.list_page(&[("product_id", product_id)], options).await
    }

    async fn count(&self, product_id: u64, options: Option<&CountOptions>) -> Result<u64, ResourceError> {
        self.resource.count(&[("product_id", product_id)], options).await
    }

    async fn get(&self, product_id: u64, image_id: u64, options: Option<&GetOptions>) -> Result<Image, ResourceError> {
        self.resource.get(&[("product_id", product_id)], image_id, options).await
    }

    async fn create(&self, product_id: u64, image: &Image) -> Result<Image, ResourceError> {
        self.resource.create(&[("product_id", product_id)], image).await
    }

    async fn update(&self, product_id: u64, image: &Image) -> Result<Image, ResourceError> {
        self.resource.update(&[("product_id", product_id)], image).await
    }

    async fn delete(&self, product_id: u64, image_id: u64) -> Result<(), ResourceError> {
        self.resource.delete(&[("product_id", product_id)], image_id).await
    }
}
