//! HMAC-SHA256 verification of webhook deliveries.
//!
//! Shopify signs each delivery body with the app's API secret key and sends
//! the base64 digest in the [`HEADER_HMAC`] header. Comparisons run in
//! constant time.
//!
//! # Example
//!
//! ```rust
//! use shopify_admin::webhooks::{compute_signature, verify_hmac};
//!
//! let body = br#"{"id":820982911946154508}"#;
//! let header = compute_signature(body, "my-secret");
//!
//! assert!(verify_hmac(body, &header, "my-secret"));
//! assert!(!verify_hmac(body, &header, "other-secret"));
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::ShopifyConfig;
use crate::webhooks::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// HTTP header carrying the base64 HMAC-SHA256 of the delivery body.
pub const HEADER_HMAC: &str = "X-Shopify-Hmac-SHA256";

/// HTTP header carrying the topic, e.g. "orders/create".
pub const HEADER_TOPIC: &str = "X-Shopify-Topic";

/// HTTP header carrying the shop's myshopify.com domain.
pub const HEADER_SHOP_DOMAIN: &str = "X-Shopify-Shop-Domain";

/// HTTP header carrying the unique delivery ID.
pub const HEADER_WEBHOOK_ID: &str = "X-Shopify-Webhook-Id";

/// Computes the base64 HMAC-SHA256 of `body` keyed with `secret`.
#[must_use]
pub fn compute_signature(body: &[u8], secret: &str) -> String {
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        // HMAC accepts keys of any length
        return String::new();
    };
    mac.update(body);
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Returns `true` when `hmac_header` is the signature of `raw_body` under
/// `secret`.
#[must_use]
pub fn verify_hmac(raw_body: &[u8], hmac_header: &str, secret: &str) -> bool {
    let computed = compute_signature(raw_body, secret);
    let header = hmac_header.trim();
    !header.is_empty() && bool::from(computed.as_bytes().ct_eq(header.as_bytes()))
}

/// Verifies a delivery with the API secret key from `config`.
///
/// # Errors
///
/// Returns [`WebhookError::MissingSecret`] when `config` has no API secret
/// key and [`WebhookError::InvalidHmac`] when the signature does not match.
///
/// ```rust
/// use shopify_admin::webhooks::{compute_signature, verify_webhook, WebhookError};
/// use shopify_admin::{AccessToken, ApiSecretKey, ShopDomain, ShopifyConfig};
///
/// let config = ShopifyConfig::builder()
///     .shop(ShopDomain::new("example").unwrap())
///     .access_token(AccessToken::new("shpat_test").unwrap())
///     .api_secret_key(ApiSecretKey::new("hush").unwrap())
///     .build()
///     .unwrap();
///
/// let body = b"{}";
/// assert!(verify_webhook(&config, body, &compute_signature(body, "hush")).is_ok());
/// assert_eq!(verify_webhook(&config, body, "forged"), Err(WebhookError::InvalidHmac));
/// ```
pub fn verify_webhook(config: &ShopifyConfig, raw_body: &[u8], hmac_header: &str) -> Result<(), WebhookError> {
    let secret = config.api_secret_key().ok_or(WebhookError::MissingSecret)?;

    if verify_hmac(raw_body, hmac_header, secret.as_ref()) {
        Ok(())
    } else {
        tracing::warn!(body_len = raw_body.len(), "webhook signature mismatch");
        Err(WebhookError::InvalidHmac)
    }
}
