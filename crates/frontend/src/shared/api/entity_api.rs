//! CRUD seam between list/form screens and wherever records live.

use async_trait::async_trait;
use contracts::domain::common::EntityRecord;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

use super::multipart::to_form_data;
use super::{ApiClient, ApiError};

/// CRUD over one entity type
///
/// `create` and `update` return the record as confirmed by the store; list
/// caches are only ever updated from these values.
#[async_trait(?Send)]
pub trait EntityApi {
    type Record: EntityRecord + 'static;
    type Payload: Serialize + Clone + 'static;

    async fn list(&self) -> Result<Vec<Self::Record>, ApiError>;
    async fn create(&self, payload: &Self::Payload) -> Result<Self::Record, ApiError>;
    async fn update(&self, id: &str, payload: &Self::Payload) -> Result<Self::Record, ApiError>;
    /// Returns the confirmation message, if the store sent one
    async fn delete(&self, id: &str) -> Result<Option<String>, ApiError>;
}

/// How create/update bodies go over the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyEncoding {
    Json,
    Multipart,
}

/// REST resource: `GET {list_path}`, `POST /{resource}`, `PUT|DELETE /{resource}/{id}`
#[derive(Clone, Debug)]
pub struct RestEntityApi<R, P> {
    client: ApiClient,
    resource: String,
    list_path: String,
    encoding: BodyEncoding,
    _marker: PhantomData<(R, P)>,
}

impl<R: EntityRecord, P> RestEntityApi<R, P> {
    /// JSON resource named after the record's collection
    pub fn new(client: ApiClient) -> Self {
        let resource = format!("/{}", R::collection_name());
        Self {
            client,
            list_path: resource.clone(),
            resource,
            encoding: BodyEncoding::Json,
            _marker: PhantomData,
        }
    }

    /// Some backends only answer the listing on a trailing-slash path
    pub fn with_list_path(mut self, path: impl Into<String>) -> Self {
        self.list_path = path.into();
        self
    }

    pub fn with_encoding(mut self, encoding: BodyEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn list_path(&self) -> &str {
        &self.list_path
    }

    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.resource, urlencoding::encode(id))
    }

    pub fn encoding(&self) -> BodyEncoding {
        self.encoding
    }
}

#[async_trait(?Send)]
impl<R, P> EntityApi for RestEntityApi<R, P>
where
    R: EntityRecord + DeserializeOwned + 'static,
    P: Serialize + Clone + 'static,
{
    type Record = R;
    type Payload = P;

    async fn list(&self) -> Result<Vec<R>, ApiError> {
        self.client.get(&self.list_path).await
    }

    async fn create(&self, payload: &P) -> Result<R, ApiError> {
        log::debug!("create {} via {:?}", R::element_name(), self.encoding);
        match self.encoding {
            BodyEncoding::Json => self.client.post_json(&self.resource, payload).await,
            BodyEncoding::Multipart => {
                self.client
                    .post_form(&self.resource, to_form_data(payload)?)
                    .await
            }
        }
    }

    async fn update(&self, id: &str, payload: &P) -> Result<R, ApiError> {
        let path = self.item_path(id);
        match self.encoding {
            BodyEncoding::Json => self.client.put_json(&path, payload).await,
            BodyEncoding::Multipart => self.client.put_form(&path, to_form_data(payload)?).await,
        }
    }

    async fn delete(&self, id: &str) -> Result<Option<String>, ApiError> {
        self.client.delete(&self.item_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::{Category, CategoryPayload};
    use contracts::domain::a002_collection::aggregate::{Collection, CollectionPayload};

    #[test]
    fn test_paths_follow_collection_name() {
        let api: RestEntityApi<Category, CategoryPayload> =
            RestEntityApi::new(ApiClient::new("http://api:3000"))
                .with_encoding(BodyEncoding::Multipart);
        assert_eq!(api.list_path(), "/category");
        assert_eq!(api.item_path("abc 1"), "/category/abc%201");
        assert_eq!(api.encoding(), BodyEncoding::Multipart);
    }

    #[test]
    fn test_custom_list_path() {
        let api: RestEntityApi<Collection, CollectionPayload> =
            RestEntityApi::new(ApiClient::new("http://api:3000")).with_list_path("/collection/");
        assert_eq!(api.list_path(), "/collection/");
        assert_eq!(api.item_path("42"), "/collection/42");
        assert_eq!(api.encoding(), BodyEncoding::Json);
    }
}
