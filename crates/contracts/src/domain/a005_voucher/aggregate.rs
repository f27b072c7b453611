use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityDraft, EntityRecord};
use crate::shared::validation::{
    parse_optional_count, parse_optional_date, parse_percent, require_identifier, ValidationError,
};

/// Checkout voucher code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    pub discount_percent: f64,
    #[serde(default)]
    pub max_uses: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
    #[serde(default)]
    pub expires_at: Option<NaiveDate>,
    #[serde(default)]
    pub active: bool,
}

impl Voucher {
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_at.is_some_and(|d| d < today)
    }

    pub fn is_exhausted(&self) -> bool {
        self.max_uses.is_some_and(|max| self.used_count >= max)
    }
}

impl EntityRecord for Voucher {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.code
    }

    fn collection_name() -> &'static str {
        "voucher"
    }

    fn element_name() -> &'static str {
        "Voucher"
    }

    fn list_name() -> &'static str {
        "Vouchers"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherPayload {
    pub code: String,
    pub discount_percent: f64,
    pub max_uses: Option<u32>,
    pub expires_at: Option<NaiveDate>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoucherDraft {
    pub code: String,
    pub discount_percent: String,
    pub max_uses: String,
    pub expires_at: String,
    pub active: bool,
}

impl Default for VoucherDraft {
    fn default() -> Self {
        Self {
            code: String::new(),
            discount_percent: String::new(),
            max_uses: String::new(),
            expires_at: String::new(),
            active: true,
        }
    }
}

impl EntityDraft for VoucherDraft {
    type Record = Voucher;
    type Payload = VoucherPayload;

    fn from_record(record: &Voucher) -> Self {
        Self {
            code: record.code.clone(),
            discount_percent: record.discount_percent.to_string(),
            max_uses: record.max_uses.map(|m| m.to_string()).unwrap_or_default(),
            expires_at: record
                .expires_at
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            active: record.active,
        }
    }

    fn to_payload(&self) -> Result<VoucherPayload, ValidationError> {
        require_identifier("code", "Code", &self.code)?;
        let discount_percent = parse_percent("discount_percent", "Discount", &self.discount_percent)?;
        let max_uses = parse_optional_count("max_uses", "Max uses", &self.max_uses)?;
        let expires_at = parse_optional_date("expires_at", "Expiry date", &self.expires_at)?;

        Ok(VoucherPayload {
            code: self.code.trim().to_uppercase(),
            discount_percent,
            max_uses,
            expires_at,
            active: self.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_uppercased() {
        let draft = VoucherDraft {
            code: "spring10".into(),
            discount_percent: "10".into(),
            ..Default::default()
        };
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.code, "SPRING10");
        assert_eq!(payload.max_uses, None);
        assert_eq!(payload.expires_at, None);
    }

    #[test]
    fn test_discount_over_hundred_is_rejected() {
        let draft = VoucherDraft {
            code: "BIG".into(),
            discount_percent: "150".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate().unwrap_err().field, "discount_percent");
    }

    #[test]
    fn test_usage_and_expiry_flags() {
        let v = Voucher {
            id: "v".into(),
            code: "X".into(),
            discount_percent: 5.0,
            max_uses: Some(3),
            used_count: 3,
            expires_at: NaiveDate::from_ymd_opt(2024, 1, 31),
            active: true,
        };
        assert!(v.is_exhausted());
        assert!(v.is_expired(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(!v.is_expired(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert_eq!(VoucherDraft::from_record(&v).expires_at, "2024-01-31");
    }
}
