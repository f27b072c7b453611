//! Entity API chosen by configuration: the REST backend or the local demo store.

use async_trait::async_trait;
use contracts::domain::common::{EntityRecord, FromPayload};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ApiClient, ApiError, EntityApi, LocalEntityApi, RestEntityApi};
use crate::shared::config::DataSource;
use crate::shared::storage::LocalStorage;

#[derive(Clone, Debug)]
pub enum SourceApi<R, P> {
    Remote(RestEntityApi<R, P>),
    Local(LocalEntityApi<R, P, LocalStorage>),
}

impl<R, P> SourceApi<R, P>
where
    R: EntityRecord + Serialize + DeserializeOwned,
{
    pub fn for_source(source: DataSource, client: ApiClient) -> Self {
        match source {
            DataSource::Remote => SourceApi::Remote(RestEntityApi::new(client)),
            DataSource::Local => SourceApi::Local(LocalEntityApi::new(LocalStorage)),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, SourceApi::Local(_))
    }
}

#[async_trait(?Send)]
impl<R, P> EntityApi for SourceApi<R, P>
where
    R: EntityRecord + FromPayload<P> + Serialize + DeserializeOwned + 'static,
    P: Serialize + Clone + 'static,
{
    type Record = R;
    type Payload = P;

    async fn list(&self) -> Result<Vec<R>, ApiError> {
        match self {
            SourceApi::Remote(api) => api.list().await,
            SourceApi::Local(api) => api.list().await,
        }
    }

    async fn create(&self, payload: &P) -> Result<R, ApiError> {
        match self {
            SourceApi::Remote(api) => api.create(payload).await,
            SourceApi::Local(api) => api.create(payload).await,
        }
    }

    async fn update(&self, id: &str, payload: &P) -> Result<R, ApiError> {
        match self {
            SourceApi::Remote(api) => api.update(id, payload).await,
            SourceApi::Local(api) => api.update(id, payload).await,
        }
    }

    async fn delete(&self, id: &str) -> Result<Option<String>, ApiError> {
        match self {
            SourceApi::Remote(api) => api.delete(id).await,
            SourceApi::Local(api) => api.delete(id).await,
        }
    }
}
