use contracts::domain::a004_banner::aggregate::{Banner, BannerPayload};

use crate::shared::api::{ApiClient, SourceApi};
use crate::shared::config::AppConfig;

pub type BannerApi = SourceApi<Banner, BannerPayload>;

pub fn banner_api(config: &AppConfig) -> BannerApi {
    SourceApi::for_source(config.banners, ApiClient::from_session(config))
}
