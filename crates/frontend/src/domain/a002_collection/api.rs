use contracts::domain::a002_collection::aggregate::{Collection, CollectionPayload};

use crate::shared::api::{ApiClient, BodyEncoding, RestEntityApi};
use crate::shared::config::AppConfig;

pub type CollectionApi = RestEntityApi<Collection, CollectionPayload>;

/// The backend lists collections at `/collection/` (trailing slash) and
/// takes writes as multipart forms.
pub fn collection_api(config: &AppConfig) -> CollectionApi {
    RestEntityApi::new(ApiClient::from_session(config))
        .with_list_path("/collection/")
        .with_encoding(BodyEncoding::Multipart)
}
