use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityDraft, EntityRecord, FromPayload};
use crate::shared::validation::{parse_date, parse_percent, require_text, split_ids, ValidationError};

/// Time-boxed price reduction on a set of products (local demo data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub percent: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub product_ids: Vec<String>,
}

impl Discount {
    /// Both ends inclusive
    pub fn is_running(&self, today: NaiveDate) -> bool {
        self.start_date <= today && today <= self.end_date
    }
}

impl EntityRecord for Discount {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "discounts"
    }

    fn element_name() -> &'static str {
        "Discount"
    }

    fn list_name() -> &'static str {
        "Discounts"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountPayload {
    pub name: String,
    pub percent: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub product_ids: Vec<String>,
}

impl FromPayload<DiscountPayload> for Discount {
    fn from_payload(id: String, p: &DiscountPayload) -> Self {
        Self {
            id,
            name: p.name.clone(),
            percent: p.percent,
            start_date: p.start_date,
            end_date: p.end_date,
            product_ids: p.product_ids.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscountDraft {
    pub name: String,
    pub percent: String,
    pub start_date: String,
    pub end_date: String,
    pub product_ids: String,
}

impl EntityDraft for DiscountDraft {
    type Record = Discount;
    type Payload = DiscountPayload;

    fn from_record(record: &Discount) -> Self {
        Self {
            name: record.name.clone(),
            percent: record.percent.to_string(),
            start_date: record.start_date.format("%Y-%m-%d").to_string(),
            end_date: record.end_date.format("%Y-%m-%d").to_string(),
            product_ids: record.product_ids.join(", "),
        }
    }

    fn to_payload(&self) -> Result<DiscountPayload, ValidationError> {
        require_text("name", "Name", &self.name)?;
        let percent = parse_percent("percent", "Percent", &self.percent)?;
        let start_date = parse_date("start_date", "Start date", &self.start_date)?;
        let end_date = parse_date("end_date", "End date", &self.end_date)?;
        if end_date < start_date {
            return Err(ValidationError::new(
                "end_date",
                "End date must not be before the start date",
            ));
        }

        Ok(DiscountPayload {
            name: self.name.trim().to_string(),
            percent,
            start_date,
            end_date,
            product_ids: split_ids(&self.product_ids),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> DiscountDraft {
        DiscountDraft {
            name: "Valentine".into(),
            percent: "15".into(),
            start_date: "2025-02-01".into(),
            end_date: "2025-02-14".into(),
            product_ids: "p1, p2".into(),
        }
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let mut d = draft();
        d.end_date = "2025-01-31".into();
        assert_eq!(d.validate().unwrap_err().field, "end_date");
    }

    #[test]
    fn test_single_day_discount_is_running_that_day() {
        let mut d = draft();
        d.end_date = d.start_date.clone();
        let discount = Discount::from_payload("d1".into(), &d.to_payload().unwrap());
        let day = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert!(discount.is_running(day));
        assert!(!discount.is_running(day.succ_opt().unwrap()));
    }
}
