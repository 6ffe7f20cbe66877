//! Webhook verification errors.

use thiserror::Error;

/// Error type for webhook delivery verification.
///
/// ```rust
/// use shopify_admin::webhooks::WebhookError;
///
/// let error = WebhookError::InvalidHmac;
/// assert_eq!(error.to_string(), "Webhook HMAC signature is invalid.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebhookError {
    /// The configuration has no API secret key to verify with.
    #[error("API secret key is not configured. Please set api_secret_key in ShopifyConfig to verify webhooks.")]
    MissingSecret,

    /// The signature header does not match the body.
    #[error("Webhook HMAC signature is invalid.")]
    InvalidHmac,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebhookError>();
};
