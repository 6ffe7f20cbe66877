//! The entry point: one shop, one transport, six resource services.

use crate::clients::{HttpClient, HttpError, Transport};
use crate::config::ShopifyConfig;
use crate::rest::resources::{Customers, Images, Metafields, Products, Variants, Webhooks};

/// A client for one shop's Admin REST API.
///
/// Each accessor returns a lightweight service borrowing the shared
/// transport; they can be called freely and used concurrently.
///
/// ```rust,ignore
/// use shopify_admin::prelude::*;
/// use shopify_admin::{AccessToken, ShopDomain, ShopifyClient, ShopifyConfig};
///
/// let config = ShopifyConfig::builder()
///     .shop(ShopDomain::new("my-store")?)
///     .access_token(AccessToken::new("shpat_123")?)
///     .build()?;
/// let shop = ShopifyClient::new(&config)?;
///
/// let count = shop.products().count(None).await?;
/// let webhooks = shop.webhooks().list(None).await?;
/// ```
///
/// Tests and alternative transports go through [`ShopifyClient::with_transport`].
#[derive(Debug)]
pub struct ShopifyClient<T = HttpClient> {
    transport: T,
}

impl ShopifyClient<HttpClient> {
    /// Builds the HTTP transport from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the HTTP client cannot be constructed or a
    /// configured header value is invalid.
    pub fn new(config: &ShopifyConfig) -> Result<Self, HttpError> {
        Ok(Self {
            transport: HttpClient::new(config)?,
        })
    }
}

impl<T: Transport> ShopifyClient<T> {
    /// Wraps an existing transport.
    #[must_use]
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Customers of the shop.
    #[must_use]
    pub const fn customers(&self) -> Customers<'_, T> {
        Customers::new(&self.transport)
    }

    /// Products of the shop.
    #[must_use]
    pub const fn products(&self) -> Products<'_, T> {
        Products::new(&self.transport)
    }

    /// Variants, scoped per call by product ID.
    #[must_use]
    pub const fn variants(&self) -> Variants<'_, T> {
        Variants::new(&self.transport)
    }

    /// Product images, scoped per call by product ID.
    #[must_use]
    pub const fn images(&self) -> Images<'_, T> {
        Images::new(&self.transport)
    }

    /// Metafields of the shop or of any owning record.
    #[must_use]
    pub const fn metafields(&self) -> Metafields<'_, T> {
        Metafields::new(&self.transport)
    }

    /// Webhook subscriptions.
    #[must_use]
    pub const fn webhooks(&self) -> Webhooks<'_, T> {
        Webhooks::new(&self.transport)
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyClient>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, HostUrl, ShopDomain};
    use crate::rest::resources::{MetafieldService, ProductService, VariantService};
    use crate::rest::testing::RecordingTransport;
    use serde_json::json;

    #[test]
    fn test_new_uses_configured_base_url() {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("my-store").unwrap())
            .access_token(AccessToken::new("shpat_123").unwrap())
            .base_url(HostUrl::new("http://127.0.0.1:9999/").unwrap())
            .build()
            .unwrap();

        let shop = ShopifyClient::new(&config).unwrap();
        assert_eq!(shop.transport().base_uri(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_services_share_one_transport() {
        let shop = ShopifyClient::with_transport(
            RecordingTransport::new()
                .respond(json!({"count": 1}))
                .respond(json!({"variants": []}))
                .respond(json!({"metafields": []})),
        );

        tokio_test::block_on(async {
            shop.products().count(None).await.unwrap();
            shop.variants().list(7, None).await.unwrap();
            shop.metafields().list_for_object("products/7", None).await.unwrap();
        });

        let paths: Vec<String> = shop.transport().calls().into_iter().map(|c| c.path).collect();
        assert_eq!(
            paths,
            vec![
                "admin/products/count.json",
                "admin/products/7/variants.json",
                "admin/products/7/metafields.json",
            ]
        );
    }
}
