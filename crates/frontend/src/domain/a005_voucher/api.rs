use contracts::domain::a005_voucher::aggregate::{Voucher, VoucherPayload};

use crate::shared::api::{ApiClient, RestEntityApi};
use crate::shared::config::AppConfig;

/// Vouchers are always managed by the backend (JSON bodies)
pub type VoucherApi = RestEntityApi<Voucher, VoucherPayload>;

pub fn voucher_api(config: &AppConfig) -> VoucherApi {
    RestEntityApi::new(ApiClient::from_session(config))
}
