use contracts::domain::a001_category::aggregate::{Category, CategoryPayload};

use crate::shared::api::{ApiClient, BodyEncoding, RestEntityApi};
use crate::shared::config::AppConfig;

/// Categories are written as multipart forms
pub type CategoryApi = RestEntityApi<Category, CategoryPayload>;

pub fn category_api(config: &AppConfig) -> CategoryApi {
    RestEntityApi::new(ApiClient::from_session(config)).with_encoding(BodyEncoding::Multipart)
}
