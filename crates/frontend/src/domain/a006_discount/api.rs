use contracts::domain::a006_discount::aggregate::{Discount, DiscountPayload};

use crate::shared::api::{ApiClient, SourceApi};
use crate::shared::config::AppConfig;

pub type DiscountApi = SourceApi<Discount, DiscountPayload>;

pub fn discount_api(config: &AppConfig) -> DiscountApi {
    SourceApi::for_source(config.discounts, ApiClient::from_session(config))
}
