//! Webhook subscription resource implementation.
//!
//! A subscription tells Shopify to POST a payload to `address` whenever the
//! `topic` event occurs. Verifying those deliveries is handled by
//! [`crate::webhooks`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::rest::resources::{Webhook, WebhookFormat, WebhookListOptions, WebhookService};
//!
//! let webhook = Webhook {
//!     topic: Some("orders/create".to_string()),
//!     address: Some("https://example.com/webhooks/orders".to_string()),
//!     format: Some(WebhookFormat::Json),
//!     ..Default::default()
//! };
//! let saved = shop.webhooks().create(&webhook).await?;
//!
//! let options = WebhookListOptions {
//!     topic: Some("orders/create".to_string()),
//!     ..Default::default()
//! };
//! let count = shop.webhooks().count(Some(&options)).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::Transport;
use crate::rest::{ResourceClient, ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource};

use super::common::{GetOptions, ListOptions};

/// The payload format of a webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WebhookFormat {
    /// JSON format (default).
    #[default]
    Json,
    /// XML format.
    Xml,
}

/// A webhook subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Webhook {
    /// The unique identifier of the webhook, assigned by Shopify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The URL where payloads are delivered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// The triggering event, e.g. "orders/create".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// The payload format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<WebhookFormat>,

    /// Restricts the payload to these fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Metafield namespaces included in the payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafield_namespaces: Option<Vec<String>>,

    /// The API version payloads are serialized with.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub api_version: Option<String>,

    /// When the webhook was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the webhook was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Webhook {
    const NAME: &'static str = "Webhook";
    const PLURAL: &'static str = "webhooks";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::Find, &["id"], "admin/webhooks/{id}.json"),
        ResourcePath::new(ResourceOperation::All, &[], "admin/webhooks.json"),
        ResourcePath::new(ResourceOperation::Count, &[], "admin/webhooks/count.json"),
        ResourcePath::new(ResourceOperation::Create, &[], "admin/webhooks.json"),
        ResourcePath::new(ResourceOperation::Update, &["id"], "admin/webhooks/{id}.json"),
        ResourcePath::new(ResourceOperation::Delete, &["id"], "admin/webhooks/{id}.json"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing and counting webhooks.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[must_use]
pub struct WebhookListOptions {
    /// Only subscriptions delivering to this URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Only subscriptions to this topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Paging, ID and date filters.
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Operations on webhook subscriptions.
#[allow(async_fn_in_trait)]
pub trait WebhookService {
    /// Lists subscriptions.
    async fn list(&self, options: Option<&WebhookListOptions>) -> Result<Vec<Webhook>, ResourceError>;

    /// Lists one page of subscriptions with its pagination cursors.
    async fn list_page(
        &self,
        options: Option<&WebhookListOptions>,
    ) -> Result<ResourceResponse<Vec<Webhook>>, ResourceError>;

    /// Counts subscriptions. Only `address` and `topic` apply.
    async fn count(&self, options: Option<&WebhookListOptions>) -> Result<u64, ResourceError>;

    /// Fetches a subscription.
    async fn get(&self, webhook_id: u64, options: Option<&GetOptions>) -> Result<Webhook, ResourceError>;

    /// Subscribes to a topic.
    async fn create(&self, webhook: &Webhook) -> Result<Webhook, ResourceError>;

    /// Changes a subscription's address or fields.
    async fn update(&self, webhook: &Webhook) -> Result<Webhook, ResourceError>;

    /// Unsubscribes.
    async fn delete(&self, webhook_id: u64) -> Result<(), ResourceError>;
}

/// [`WebhookService`] over any [`Transport`].
#[derive(Debug)]
pub struct Webhooks<'c, T> {
    resource: ResourceClient<'c, T, Webhook>,
}

impl<'c, T: Transport> Webhooks<'c, T> {
    /// Creates the service over `transport`.
    #[must_use]
    pub const fn new(transport: &'c T) -> Self {
        Self {
            resource: ResourceClient::new(transport),
        }
    }
}

impl<T: Transport> WebhookService for Webhooks<'_, T> {
    async fn list(&self, options: Option<&WebhookListOptions>) -> Result<Vec<Webhook>, ResourceError> {
        self.resource.list(&[], options).await
    }

    async fn list_page(
        &self,
        options: Option<&WebhookListOptions>,
    ) -> Result<ResourceResponse<Vec<Webhook>>, ResourceError> {
        self.resource.list_page(&[], options).await
    }

    async fn count(&self, options: Option<&WebhookListOptions>) -> Result<u64, ResourceError> {
        self.resource.count(&[], options).await
    }

    async fn get(&self, webhook_id: u64, options: Option<&GetOptions>) -> Result<Webhook, ResourceError> {
        self.resource.get(&[], webhook_id, options).await
    }

    async fn create(&self, webhook: &Webhook) -> Result<Webhook, ResourceError> {
        self.resource.create(&[], webhook).await
    }

    async fn update(&self, webhook: &Webhook) -> Result<Webhook, ResourceError> {
        self.resource.update(&[], webhook).await
    }

    async fn delete(&self, webhook_id: u64) -> Result<(), ResourceError> {
        self.resource.delete(&[], webhook_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testing::RecordingTransport;
    use serde_json::json;

    #[test]
    fn test_webhook_round_trip_fields() {
        let webhook: Webhook = serde_json::from_value(json!({
            "id": 4_759_306,
            "address": "https://apple.com",
            "topic": "orders/create",
            "format": "json",
            "fields": [],
            "metafield_namespaces": [],
            "api_version": "unstable",
            "created_at": "2024-01-02T09:28:43-05:00",
            "updated_at": "2024-01-02T09:28:43-05:00"
        }))
        .unwrap();
        assert_eq!(webhook.format, Some(WebhookFormat::Json));
        assert_eq!(webhook.api_version.as_deref(), Some("unstable"));

        let json = serde_json::to_value(&webhook).unwrap();
        assert!(json.get("api_version").is_none());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["topic"], "orders/create");
    }

    #[test]
    fn test_list_filters_by_topic_and_address() {
        let transport = RecordingTransport::new().respond(json!({"webhooks": [{"id": 1, "topic": "orders/create"}]}));
        let options = WebhookListOptions {
            topic: Some("orders/create".to_string()),
            address: Some(String::new()),
            ..Default::default()
        };

        let webhooks = tokio_test::block_on(Webhooks::new(&transport).list(Some(&options))).unwrap();

        assert_eq!(webhooks.len(), 1);
        let call = transport.last();
        assert_eq!(call.path, "admin/webhooks.json");
        assert_eq!(call.query["topic"], "orders/create");
        assert!(!call.query.contains_key("address"));
    }

    #[test]
    fn test_delete_of_missing_webhook_is_not_found() {
        let transport = RecordingTransport::new().fail(404, json!({"errors": "Not Found"}));
        let result = tokio_test::block_on(Webhooks::new(&transport).delete(4_759_306));

        assert!(matches!(result, Err(ResourceError::NotFound { resource: "Webhook", .. })));
        assert_eq!(transport.last().path, "admin/webhooks/4759306.json");
    }
}
