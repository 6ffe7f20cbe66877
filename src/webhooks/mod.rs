//! Verification of incoming webhook deliveries.
//!
//! Subscriptions themselves are managed through
//! [`WebhookService`](crate::rest::resources::WebhookService). This module
//! checks that a delivery really came from Shopify:
//!
//! ```rust,ignore
//! use shopify_admin::webhooks::{verify_webhook, HEADER_HMAC};
//!
//! let signature = request.headers().get(HEADER_HMAC).unwrap_or_default();
//! verify_webhook(&config, &raw_body, signature)?;
//! ```

mod errors;
mod verification;

pub use errors::WebhookError;
pub use verification::{
    compute_signature, verify_hmac, verify_webhook, HEADER_HMAC, HEADER_SHOP_DOMAIN, HEADER_TOPIC,
    HEADER_WEBHOOK_ID,
};
