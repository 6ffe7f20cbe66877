//! The generic CRUD helper shared by every resource service.
//!
//! A record type implements [`RestResource`] by naming itself and listing
//! its endpoint templates. [`ResourceClient`] then provides
//! list/count/get/create/update/delete over any [`Transport`]:
//!
//! ```rust,ignore
//! use shopify_admin::rest::{ResourceClient, ResourceOperation, ResourcePath, RestResource};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Webhook {
//!     pub id: Option<u64>,
//!     pub topic: Option<String>,
//! }
//!
//! impl RestResource for Webhook {
//!     const NAME: &'static str = "Webhook";
//!     const PLURAL: &'static str = "webhooks";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(ResourceOperation::All, &[], "admin/webhooks.json"),
//!         ResourcePath::new(ResourceOperation::Find, &["id"], "admin/webhooks/{id}.json"),
//!     ];
//!
//!     fn get_id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! let webhooks = ResourceClient::<_, Webhook>::new(&http).list(&[], None::<&()>).await?;
//! ```

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpError, QueryParams, Transport};
use crate::rest::envelope::{unwrap_list, unwrap_single, wrap};
use crate::rest::{
    build_path, get_path, serialize_to_query, ResourceError, ResourceOperation, ResourcePath,
    ResourceResponse,
};

/// Parent IDs that scope a nested resource, e.g. `[("product_id", 632910392)]`.
pub type ParentIds<'a> = &'a [(&'static str, u64)];

/// A record exposed by the Admin REST API.
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The singular name (e.g. "Product"), used in errors and, lowercased,
    /// as the singular envelope key.
    const NAME: &'static str;

    /// The plural envelope key (e.g. "products").
    const PLURAL: &'static str;

    /// Endpoint templates, relative to the shop origin.
    const PATHS: &'static [ResourcePath];

    /// Returns the server-assigned ID, `None` for unsaved records.
    fn get_id(&self) -> Option<u64>;

    /// Returns the key of the singular envelope (e.g. "product").
    #[must_use]
    fn resource_key() -> String {
        Self::NAME.to_lowercase()
    }
}

/// List/count/get/create/update/delete for one resource type over a
/// borrowed transport.
///
/// Holds nothing but the borrow, so copies are free and concurrent calls
/// are safe whenever the transport is.
pub struct ResourceClient<'c, T, R> {
    transport: &'c T,
    resource: PhantomData<fn() -> R>,
}

impl<T, R> Clone for ResourceClient<'_, T, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, R> Copy for ResourceClient<'_, T, R> {}

impl<T, R> std::fmt::Debug for ResourceClient<'_, T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceClient")
            .field("resource", &std::any::type_name::<R>())
            .finish_non_exhaustive()
    }
}

impl<'c, T, R> ResourceClient<'c, T, R>
where
    T: Transport,
    R: RestResource,
{
    /// Creates a helper over `transport`.
    #[must_use]
    pub const fn new(transport: &'c T) -> Self {
        Self {
            transport,
            resource: PhantomData,
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &'c T {
        self.transport
    }

    /// Resolves the endpoint for `operation` with the given IDs.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] when no template of
    /// `R` serves the operation with these IDs.
    pub fn resolve(&self, operation: ResourceOperation, ids: &[(&str, u64)]) -> Result<String, ResourceError> {
        let available: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();
        let path = get_path(R::PATHS, operation, &available).ok_or(ResourceError::PathResolutionFailed {
            resource: R::NAME,
            operation: operation.as_str(),
        })?;
        Ok(build_path(path.template, ids))
    }

    /// Lists records, discarding response metadata.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::list_page`].
    pub async fn list<O>(&self, parents: ParentIds<'_>, options: Option<&O>) -> Result<Vec<R>, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        Ok(self.list_page(parents, options).await?.into_inner())
    }

    /// Lists records with pagination cursors and call-limit metadata.
    ///
    /// An empty collection yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] mapped from the transport failure, or
    /// [`ResourceError::Decode`] when the body does not hold records.
    pub async fn list_page<O>(
        &self,
        parents: ParentIds<'_>,
        options: Option<&O>,
    ) -> Result<ResourceResponse<Vec<R>>, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let path = self.resolve(ResourceOperation::All, parents)?;
        self.list_at(&path, options).await
    }

    /// Lists records from an explicit collection path.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::list_page`].
    pub async fn list_at<O>(&self, path: &str, options: Option<&O>) -> Result<ResourceResponse<Vec<R>>, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let query = query_for(R::NAME, options)?;
        tracing::debug!(resource = R::NAME, operation = "list", path, "resource request");

        let page: ResourceResponse<Value> = self
            .transport
            .get_page(path, &query)
            .await
            .map_err(|e| Self::error(e, None))?;
        page.try_map(|body| unwrap_list(R::NAME, R::PLURAL, body))
    }

    /// Counts records.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] mapped from the transport failure.
    pub async fn count<O>(&self, parents: ParentIds<'_>, options: Option<&O>) -> Result<u64, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let path = self.resolve(ResourceOperation::Count, parents)?;
        self.count_at(&path, options).await
    }

    /// Counts records at an explicit count path.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] mapped from the transport failure.
    pub async fn count_at<O>(&self, path: &str, options: Option<&O>) -> Result<u64, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let query = query_for(R::NAME, options)?;
        tracing::debug!(resource = R::NAME, operation = "count", path, "resource request");

        self.transport
            .count(path, &query)
            .await
            .map_err(|e| Self::error(e, None))
    }

    /// Fetches one record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for an ID of zero and
    /// [`ResourceError::NotFound`] on 404.
    pub async fn get<O>(&self, parents: ParentIds<'_>, id: u64, options: Option<&O>) -> Result<R, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let id = Self::require_id(Some(id), ResourceOperation::Find)?;
        let path = self.resolve(ResourceOperation::Find, &with_id(parents, id))?;
        let query = query_for(R::NAME, options)?;
        tracing::debug!(resource = R::NAME, operation = "get", id, path = %path, "resource request");

        let body: Value = self
            .transport
            .get(&path, &query)
            .await
            .map_err(|e| Self::error(e, Some(id)))?;
        unwrap_single(R::NAME, &R::resource_key(), body)
    }

    /// Creates a record, returning the stored version with its new ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] on 422.
    pub async fn create(&self, parents: ParentIds<'_>, record: &R) -> Result<R, ResourceError> {
        let path = self.resolve(ResourceOperation::Create, parents)?;
        let key = R::resource_key();
        let body = wrap(R::NAME, &key, record)?;
        tracing::debug!(resource = R::NAME, operation = "create", path = %path, "resource request");

        let response: Value = self
            .transport
            .post(&path, &body)
            .await
            .map_err(|e| Self::error(e, None))?;
        unwrap_single(R::NAME, &key, response)
    }

    /// Updates a record at the path of its own ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without sending anything when
    /// the record has no ID or an ID of zero, [`ResourceError::NotFound`]
    /// on 404 and [`ResourceError::ValidationFailed`] on 422.
    pub async fn update(&self, parents: ParentIds<'_>, record: &R) -> Result<R, ResourceError> {
        let id = Self::require_id(record.get_id(), ResourceOperation::Update)?;
        let path = self.resolve(ResourceOperation::Update, &with_id(parents, id))?;
        let key = R::resource_key();
        let body = wrap(R::NAME, &key, record)?;
        tracing::debug!(resource = R::NAME, operation = "update", id, path = %path, "resource request");

        let response: Value = self
            .transport
            .put(&path, &body)
            .await
            .map_err(|e| Self::error(e, Some(id)))?;
        unwrap_single(R::NAME, &key, response)
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for an ID of zero and
    /// [`ResourceError::NotFound`] on 404.
    pub async fn delete(&self, parents: ParentIds<'_>, id: u64) -> Result<(), ResourceError> {
        let id = Self::require_id(Some(id), ResourceOperation::Delete)?;
        let path = self.resolve(ResourceOperation::Delete, &with_id(parents, id))?;
        tracing::debug!(resource = R::NAME, operation = "delete", id, path = %path, "resource request");

        self.transport
            .delete(&path)
            .await
            .map_err(|e| Self::error(e, Some(id)))
    }

    fn require_id(id: Option<u64>, operation: ResourceOperation) -> Result<u64, ResourceError> {
        id.filter(|id| *id != 0).ok_or(ResourceError::MissingId {
            resource: R::NAME,
            operation: operation.as_str(),
        })
    }

    fn error(error: HttpError, id: Option<u64>) -> ResourceError {
        let id = id.map(|id| id.to_string());
        ResourceError::from_http_error(error, R::NAME, id.as_deref())
    }
}

fn with_id<'a>(parents: &[(&'a str, u64)], id: u64) -> Vec<(&'a str, u64)> {
    let mut ids = parents.to_vec();
    ids.push(("id", id));
    ids
}

fn query_for<O: Serialize + ?Sized>(resource: &'static str, options: Option<&O>) -> Result<QueryParams, ResourceError> {
    let Some(options) = options else {
        return Ok(QueryParams::new());
    };
    serialize_to_query(options).map_err(|e| ResourceError::Encode {
        resource,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use crate::rest::testing::RecordingTransport;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Gadget {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
        name: String,
    }

    impl RestResource for Gadget {
        const NAME: &'static str = "Gadget";
        const PLURAL: &'static str = "gadgets";
        const PATHS: &'static [ResourcePath] = &[
            ResourcePath::new(ResourceOperation::All, &["shelf_id"], "admin/shelves/{shelf_id}/gadgets.json"),
            ResourcePath::new(ResourceOperation::Count, &["shelf_id"], "admin/shelves/{shelf_id}/gadgets/count.json"),
            ResourcePath::new(ResourceOperation::Find, &["id"], "admin/gadgets/{id}.json"),
            ResourcePath::new(ResourceOperation::Create, &["shelf_id"], "admin/shelves/{shelf_id}/gadgets.json"),
            ResourcePath::new(ResourceOperation::Update, &["id"], "admin/gadgets/{id}.json"),
            ResourcePath::new(ResourceOperation::Delete, &["id"], "admin/gadgets/{id}.json"),
        ];

        fn get_id(&self) -> Option<u64> {
            self.id
        }
    }

    fn gadget(id: Option<u64>) -> Gadget {
        Gadget {
            id,
            name: "sprocket".to_string(),
        }
    }

    #[test]
    fn test_resource_key_is_lowercased_name() {
        assert_eq!(Gadget::resource_key(), "gadget");
    }

    #[test]
    fn test_resolve_fills_parent_ids() {
        let transport = RecordingTransport::new();
        let client = ResourceClient::<_, Gadget>::new(&transport);

        assert_eq!(
            client.resolve(ResourceOperation::All, &[("shelf_id", 3)]).unwrap(),
            "admin/shelves/3/gadgets.json"
        );
        assert!(matches!(
            client.resolve(ResourceOperation::All, &[]),
            Err(ResourceError::PathResolutionFailed { resource: "Gadget", operation: "all" })
        ));
    }

    #[test]
    fn test_list_unwraps_plural_envelope_and_sends_query() {
        let transport = RecordingTransport::new().respond(json!({"gadgets": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]}));
        let client = ResourceClient::<_, Gadget>::new(&transport);

        let gadgets = tokio_test::block_on(client.list(&[("shelf_id", 3)], Some(&json!({"limit": 2, "since_id": 0}))))
            .unwrap();

        assert_eq!(gadgets.len(), 2);
        assert_eq!(gadgets[1].id, Some(2));
        let call = transport.last();
        assert_eq!(call.method, HttpMethod::Get);
        assert_eq!(call.path, "admin/shelves/3/gadgets.json");
        assert_eq!(call.query.len(), 1);
        assert_eq!(call.query["limit"], "2");
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot encode"))
        }
    }

    #[test]
    fn test_unencodable_options_fail_before_request() {
        let transport = RecordingTransport::new();
        let client = ResourceClient::<_, Gadget>::new(&transport);

        tokio_test::block_on(async {
            let listed = client.list(&[("shelf_id", 3)], Some(&Unencodable)).await;
            assert!(matches!(listed, Err(ResourceError::Encode { resource: "Gadget", .. })));
            let counted = client.count(&[("shelf_id", 3)], Some(&Unencodable)).await;
            assert!(matches!(counted, Err(ResourceError::Encode { resource: "Gadget", .. })));
        });
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_list_of_empty_collection_is_empty() {
        let transport = RecordingTransport::new().respond(json!({"gadgets": []})).respond(json!({}));
        let client = ResourceClient::<_, Gadget>::new(&transport);

        tokio_test::block_on(async {
            assert!(client.list(&[("shelf_id", 3)], None::<&()>).await.unwrap().is_empty());
            assert!(client.list(&[("shelf_id", 3)], None::<&()>).await.unwrap().is_empty());
        });
    }

    #[test]
    fn test_count_reads_count_member() {
        let transport = RecordingTransport::new().respond(json!({"count": 17}));
        let client = ResourceClient::<_, Gadget>::new(&transport);

        let count = tokio_test::block_on(client.count(&[("shelf_id", 3)], None::<&()>)).unwrap();

        assert_eq!(count, 17);
        assert_eq!(transport.last().path, "admin/shelves/3/gadgets/count.json");
    }

    #[test]
    fn test_get_rejects_missing_envelope() {
        let transport = RecordingTransport::new().respond(json!({"widget": {"id": 1, "name": "a"}}));
        let client = ResourceClient::<_, Gadget>::new(&transport);

        let result = tokio_test::block_on(client.get(&[], 1, None::<&()>));
        assert!(matches!(result, Err(ResourceError::Decode { resource: "Gadget", .. })));
    }

    #[test]
    fn test_create_wraps_record_and_returns_stored_version() {
        let transport = RecordingTransport::new().respond(json!({"gadget": {"id": 99, "name": "sprocket"}}));
        let client = ResourceClient::<_, Gadget>::new(&transport);

        let saved = tokio_test::block_on(client.create(&[("shelf_id", 3)], &gadget(None))).unwrap();

        assert_eq!(saved, gadget(Some(99)));
        let call = transport.last();
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(call.body, Some(json!({"gadget": {"name": "sprocket"}})));
    }

    #[test]
    fn test_update_rejects_zero_id_without_request() {
        let transport = RecordingTransport::new();
        let client = ResourceClient::<_, Gadget>::new(&transport);

        tokio_test::block_on(async {
            for id in [None, Some(0)] {
                let result = client.update(&[], &gadget(id)).await;
                assert!(matches!(result, Err(ResourceError::MissingId { resource: "Gadget", .. })));
            }
        });
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_get_and_delete_reject_zero_id() {
        let transport = RecordingTransport::new();
        let client = ResourceClient::<_, Gadget>::new(&transport);

        tokio_test::block_on(async {
            let fetched = client.get(&[], 0, None::<&()>).await;
            assert!(matches!(fetched, Err(ResourceError::MissingId { operation: "find", .. })));
            let deleted = client.delete(&[], 0).await;
            assert!(matches!(deleted, Err(ResourceError::MissingId { operation: "delete", .. })));
        });
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_update_puts_to_id_path() {
        let transport = RecordingTransport::new().respond(json!({"gadget": {"id": 5, "name": "sprocket"}}));
        let client = ResourceClient::<_, Gadget>::new(&transport);

        tokio_test::block_on(client.update(&[], &gadget(Some(5)))).unwrap();

        let call = transport.last();
        assert_eq!(call.method, HttpMethod::Put);
        assert_eq!(call.path, "admin/gadgets/5.json");
    }

    #[test]
    fn test_delete_maps_not_found_with_id() {
        let transport = RecordingTransport::new().fail(404, json!({"errors": "Not Found"}));
        let client = ResourceClient::<_, Gadget>::new(&transport);

        let result = tokio_test::block_on(client.delete(&[], 5));

        match result {
            Err(ResourceError::NotFound { resource, id }) => {
                assert_eq!(resource, "Gadget");
                assert_eq!(id, "5");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert_eq!(transport.last().method, HttpMethod::Delete);
    }

    #[test]
    fn test_server_errors_keep_status() {
        let transport = RecordingTransport::new().fail(503, json!({"errors": "Unavailable"}));
        let client = ResourceClient::<_, Gadget>::new(&transport);

        let error = tokio_test::block_on(client.get(&[], 5, None::<&()>)).unwrap_err();
        assert!(matches!(error, ResourceError::Server { code: 503, .. }));
        assert_eq!(error.request_id(), Some("req-test"));
    }
}
