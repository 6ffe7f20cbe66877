//! Metafield resource implementation.
//!
//! Metafields attach namespaced key/value data to the shop or to any other
//! resource. Shop-level metafields live at `admin/metafields.json`; those of
//! another record are reached through its path, e.g.
//! `admin/products/632910392/metafields.json`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::rest::resources::{MetafieldListOptions, MetafieldService};
//!
//! let options = MetafieldListOptions {
//!     namespace: Some("inventory".to_string()),
//!     ..Default::default()
//! };
//!
//! // "/orders/450789469/" and "orders/450789469" address the same owner
//! let metafields = shop
//!     .metafields()
//!     .list_for_object("/orders/450789469/", Some(&options))
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::Transport;
use crate::rest::{
    normalize_owner_path, ResourceClient, ResourceError, ResourceOperation, ResourcePath, ResourceResponse,
    RestResource,
};

use super::common::{CountOptions, GetOptions, ListOptions};

/// A metafield.
///
/// `value` is kept as raw JSON: Shopify returns strings, integers or JSON
/// strings depending on `type`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Metafield {
    /// The unique identifier of the metafield, assigned by Shopify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The container for a group of metafields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// The name of the metafield within its namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The stored data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// The legacy value type ("string", "integer", "json_string").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    /// The metafield definition type, e.g. "single_line_text_field".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    /// Free-text note on what the metafield holds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The ID of the record the metafield is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,

    /// The type of the owning record, e.g. "product".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_resource: Option<String>,

    /// When the metafield was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the metafield was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The GraphQL Admin API ID.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Metafield {
    const NAME: &'static str = "Metafield";
    const PLURAL: &'static str = "metafields";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::Find, &["id"], "admin/metafields/{id}.json"),
        ResourcePath::new(ResourceOperation::All, &[], "admin/metafields.json"),
        ResourcePath::new(ResourceOperation::Count, &[], "admin/metafields/count.json"),
        ResourcePath::new(ResourceOperation::Create, &[], "admin/metafields.json"),
        ResourcePath::new(ResourceOperation::Update, &["id"], "admin/metafields/{id}.json"),
        ResourcePath::new(ResourceOperation::Delete, &["id"], "admin/metafields/{id}.json"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing metafields.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[must_use]
pub struct MetafieldListOptions {
    /// Only metafields in this namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Only metafields with this key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Only metafields with this legacy value type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    /// Only metafields with this definition type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    /// Paging, ID and date filters.
    #[serde(flatten)]
    pub list: ListOptions,
}

/// Operations on metafields.
#[allow(async_fn_in_trait)]
pub trait MetafieldService {
    /// Lists shop-level metafields.
    async fn list(&self, options: Option<&MetafieldListOptions>) -> Result<Vec<Metafield>, ResourceError>;

    /// Lists one page of shop-level metafields with its pagination cursors.
    async fn list_page(
        &self,
        options: Option<&MetafieldListOptions>,
    ) -> Result<ResourceResponse<Vec<Metafield>>, ResourceError>;

    /// Lists the metafields of the record at `owner_path`, e.g.
    /// `"products/632910392"`. Leading and trailing `/` are ignored.
    ///
    /// Returns [`ResourceError::InvalidPath`] when nothing is left of
    /// `owner_path` after trimming.
    async fn list_for_object(
        &self,
        owner_path: &str,
        options: Option<&MetafieldListOptions>,
    ) -> Result<Vec<Metafield>, ResourceError>;

    /// Counts shop-level metafields.
    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError>;

    /// Counts the metafields of the record at `owner_path`.
    async fn count_for_object(&self, owner_path: &str, options: Option<&CountOptions>) -> Result<u64, ResourceError>;

    /// Fetches a metafield.
    async fn get(&self, metafield_id: u64, options: Option<&GetOptions>) -> Result<Metafield, ResourceError>;

    /// Creates a shop-level metafield.
    async fn create(&self, metafield: &Metafield) -> Result<Metafield, ResourceError>;

    /// Updates a metafield.
    async fn update(&self, metafield: &Metafield) -> Result<Metafield, ResourceError>;

    /// Deletes a metafield.
    async fn delete(&self, metafield_id: u64) -> Result<(), ResourceError>;
}

/// [`MetafieldService`] over any [`Transport`].
#[derive(Debug)]
pub struct Metafields<'c, T> {
    resource: ResourceClient<'c, T, Metafield>,
}

impl<'c, T: Transport> Metafields<'c, T> {
    /// Creates the service over `transport`.
    #[must_use]
    pub const fn new(transport: &'c T) -> Self {
        Self {
            resource: ResourceClient::new(transport),
        }
    }

    fn owner_path(owner_path: &str, suffix: &str) -> Result<String, ResourceError> {
        let owner = normalize_owner_path(owner_path).ok_or_else(|| ResourceError::InvalidPath {
            resource: Metafield::NAME,
            path: owner_path.to_string(),
        })?;
        Ok(format!("admin/{owner}/{suffix}"))
    }
}

impl<T: Transport> MetafieldService for Metafields<'_, T> {
    async fn list(&self, options: Option<&MetafieldListOptions>) -> Result<Vec<Metafield>, ResourceError> {
        self.resource.list(&[], options).await
    }

    async fn list_page(
        &self,
        options: Option<&MetafieldListOptions>,
    ) -> Result<ResourceResponse<Vec<Metafield>>, ResourceError> {
        self.resource.list_page(&[], options).await
    }

    async fn list_for_object(
        &self,
        owner_path: &str,
        options: Option<&MetafieldListOptions>,
    ) -> Result<Vec<Metafield>, ResourceError> {
        let path = Self::owner_path(owner_path, "metafields.json")?;
        Ok(self.resource.list_at(&path, options).await?.into_inner())
    }

    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError> {
        self.resource.count(&[], options).await
    }

    async fn count_for_object(&self, owner_path: &str, options: Option<&CountOptions>) -> Result<u64, ResourceError> {
        let path = Self::owner_path(owner_path, "metafields/count.json")?;
        self.resource.count_at(&path, options).await
    }

    async fn get(&self, metafield_id: u64, options: Option<&GetOptions>) -> Result<Metafield, ResourceError> {
        self.resource.get(&[], metafield_id, options).await
    }

    async fn create(&self, metafield: &Metafield) -> Result<Metafield, ResourceError> {
        self.resource.create(&[], metafield).await
    }

    async fn update(&self, metafield: &Metafield) -> Result<Metafield, ResourceError> {
        self.resource.update(&[], metafield).await
    }

    async fn delete(&self, metafield_id: u64) -> Result<(), ResourceError> {
        self.resource.delete(&[], metafield_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testing::RecordingTransport;
    use serde_json::json;

    #[test]
    fn test_metafield_type_is_renamed() {
        let metafield: Metafield = serde_json::from_value(json!({
            "id": 721_389_482,
            "namespace": "affiliates",
            "key": "app_key",
            "value": 25,
            "type": "number_integer",
            "owner_resource": "shop"
        }))
        .unwrap();
        assert_eq!(metafield.metafield_type.as_deref(), Some("number_integer"));
        assert_eq!(metafield.value, Some(json!(25)));

        let json = serde_json::to_value(&metafield).unwrap();
        assert_eq!(json["type"], "number_integer");
        assert!(json.get("metafield_type").is_none());
    }

    #[test]
    fn test_list_for_object_normalizes_owner_path() {
        let transport = RecordingTransport::new()
            .respond(json!({"metafields": [{"id": 1}]}))
            .respond(json!({"metafields": []}))
            .respond(json!({"count": 3}));
        let metafields = Metafields::new(&transport);

        tokio_test::block_on(async {
            assert_eq!(metafields.list_for_object("/orders/123/", None).await.unwrap().len(), 1);
            assert!(metafields.list_for_object("orders/123", None).await.unwrap().is_empty());
            assert_eq!(metafields.count_for_object("orders/123/", None).await.unwrap(), 3);
        });

        let calls = transport.calls();
        assert_eq!(calls[0].path, "admin/orders/123/metafields.json");
        assert_eq!(calls[1].path, calls[0].path);
        assert_eq!(calls[2].path, "admin/orders/123/metafields/count.json");
    }

    #[test]
    fn test_list_for_object_rejects_empty_owner() {
        let transport = RecordingTransport::new();
        let result = tokio_test::block_on(Metafields::new(&transport).list_for_object("//", None));

        match result {
            Err(ResourceError::InvalidPath { resource, path }) => {
                assert_eq!(resource, "Metafield");
                assert_eq!(path, "//");
            }
            other => panic!("expected InvalidPath, got {other:?}"),
        }
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_list_sends_namespace_filter() {
        let transport = RecordingTransport::new().respond(json!({"metafields": []}));
        let options = MetafieldListOptions {
            namespace: Some("inventory".to_string()),
            key: Some(String::new()),
            ..Default::default()
        };

        tokio_test::block_on(Metafields::new(&transport).list(Some(&options))).unwrap();

        let call = transport.last();
        assert_eq!(call.path, "admin/metafields.json");
        assert_eq!(call.query.len(), 1);
        assert_eq!(call.query["namespace"], "inventory");
    }
}
