//! Client configuration.
//!
//! - [`ShopifyConfig`]: the settings an [`HttpClient`](crate::HttpClient) is built from
//! - [`ShopifyConfigBuilder`]: fluent builder for [`ShopifyConfig`]
//! - [`ShopDomain`], [`AccessToken`], [`ApiSecretKey`], [`HostUrl`]: validated newtypes
//!
//! # Example
//!
//! ```rust
//! use shopify_admin::{AccessToken, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .max_tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://my-store.myshopify.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiSecretKey, HostUrl, ShopDomain};

use crate::error::ConfigError;
use std::time::Duration;

/// Configuration for talking to a single shop's Admin REST API.
///
/// `ShopifyConfig` is `Clone`, `Send` and `Sync`; build it once and share it.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    shop: ShopDomain,
    access_token: AccessToken,
    base_url: Option<HostUrl>,
    api_secret_key: Option<ApiSecretKey>,
    user_agent_prefix: Option<String>,
    max_tries: u32,
    throttle: bool,
    timeout: Option<Duration>,
}

impl ShopifyConfig {
    /// Creates a new builder for constructing a `ShopifyConfig`.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the origin requests are sent to.
    ///
    /// This is the configured override when present, otherwise
    /// `https://{shop}`.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.base_url.as_ref().map_or_else(
            || format!("https://{}", self.shop),
            |url| url.as_ref().to_string(),
        )
    }

    /// Returns the API secret key used for webhook verification, if configured.
    #[must_use]
    pub const fn api_secret_key(&self) -> Option<&ApiSecretKey> {
        self.api_secret_key.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many attempts a request gets on 429 and 5xx responses.
    #[must_use]
    pub const fn max_tries(&self) -> u32 {
        self.max_tries
    }

    /// Returns whether requests wait when the call-limit bucket is full.
    #[must_use]
    pub const fn throttle(&self) -> bool {
        self.throttle
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
///
/// `shop` and `access_token` are required.
///
/// # Defaults
///
/// - `max_tries`: `1` (no retries)
/// - `throttle`: `true`
/// - `base_url`, `api_secret_key`, `user_agent_prefix`, `timeout`: `None`
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    base_url: Option<HostUrl>,
    api_secret_key: Option<ApiSecretKey>,
    user_agent_prefix: Option<String>,
    max_tries: Option<u32>,
    throttle: Option<bool>,
    timeout: Option<Duration>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the Admin API access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Overrides the `https://{shop}` origin.
    #[must_use]
    pub fn base_url(mut self, url: HostUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API secret key used to verify webhook deliveries.
    #[must_use]
    pub fn api_secret_key(mut self, key: ApiSecretKey) -> Self {
        self.api_secret_key = Some(key);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the number of attempts for requests that hit 429 or 5xx.
    #[must_use]
    pub const fn max_tries(mut self, tries: u32) -> Self {
        self.max_tries = Some(tries);
        self
    }

    /// Enables or disables pre-emptive call-limit throttling.
    #[must_use]
    pub const fn throttle(mut self, enabled: bool) -> Self {
        self.throttle = Some(enabled);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ShopifyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `access_token` is unset, and [`ConfigError::InvalidMaxTries`] if
    /// `max_tries` is zero.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        let max_tries = self.max_tries.unwrap_or(1);
        if max_tries == 0 {
            return Err(ConfigError::InvalidMaxTries { tries: max_tries });
        }

        Ok(ShopifyConfig {
            shop,
            access_token,
            base_url: self.base_url,
            api_secret_key: self.api_secret_key,
            user_agent_prefix: self.user_agent_prefix,
            max_tries,
            throttle: self.throttle.unwrap_or(true),
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> ShopifyConfigBuilder {
        ShopifyConfig::builder()
            .shop(ShopDomain::new("my-store").unwrap())
            .access_token(AccessToken::new("shpat_token").unwrap())
    }

    #[test]
    fn test_builder_requires_shop() {
        let result = ShopifyConfigBuilder::new()
            .access_token(AccessToken::new("token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "shop" })
        ));
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = ShopifyConfigBuilder::new()
            .shop(ShopDomain::new("my-store").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_rejects_zero_tries() {
        let result = base_builder().max_tries(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidMaxTries { tries: 0 })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = base_builder().build().unwrap();

        assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
        assert_eq!(config.base_url(), "https://my-store.myshopify.com");
        assert_eq!(config.max_tries(), 1);
        assert!(config.throttle());
        assert!(config.timeout().is_none());
        assert!(config.api_secret_key().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = base_builder()
            .base_url(HostUrl::new("http://127.0.0.1:9999/").unwrap())
            .api_secret_key(ApiSecretKey::new("hush").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .max_tries(4)
            .throttle(false)
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "http://127.0.0.1:9999");
        assert_eq!(config.api_secret_key().unwrap().as_ref(), "hush");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.max_tries(), 4);
        assert!(!config.throttle());
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_config_debug_masks_credentials() {
        let config = base_builder()
            .api_secret_key(ApiSecretKey::new("hush").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("ShopifyConfig"));
        assert!(!debug_str.contains("shpat_token"));
        assert!(!debug_str.contains("hush"));
    }
}
