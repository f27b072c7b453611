use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityDraft, EntityRecord, FromPayload};
use crate::shared::validation::{
    parse_count, parse_non_negative_amount, require_identifier, require_text, ValidationError,
};

/// Catalogue item. Kept in local storage until the product API is wired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl EntityRecord for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub category_id: String,
    pub material: String,
    pub description: String,
    pub image_urls: Vec<String>,
}

impl FromPayload<ProductPayload> for Product {
    fn from_payload(id: String, p: &ProductPayload) -> Self {
        Self {
            id,
            sku: p.sku.clone(),
            name: p.name.clone(),
            price: p.price,
            stock: p.stock,
            category_id: p.category_id.clone(),
            material: p.material.clone(),
            description: p.description.clone(),
            image_urls: p.image_urls.clone(),
        }
    }
}

/// Numeric fields hold the raw input text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub sku: String,
    pub name: String,
    pub price: String,
    pub stock: String,
    pub category_id: String,
    pub material: String,
    pub description: String,
    pub image_urls: Vec<String>,
}

impl EntityDraft for ProductDraft {
    type Record = Product;
    type Payload = ProductPayload;

    fn from_record(record: &Product) -> Self {
        Self {
            sku: record.sku.clone(),
            name: record.name.clone(),
            price: record.price.to_string(),
            stock: record.stock.to_string(),
            category_id: record.category_id.clone(),
            material: record.material.clone(),
            description: record.description.clone(),
            image_urls: record.image_urls.clone(),
        }
    }

    fn to_payload(&self) -> Result<ProductPayload, ValidationError> {
        require_identifier("sku", "SKU", &self.sku)?;
        require_text("name", "Name", &self.name)?;
        let price = parse_non_negative_amount("price", "Price", &self.price)?;
        let stock = parse_count("stock", "Stock", &self.stock)?;

        Ok(ProductPayload {
            sku: self.sku.trim().to_string(),
            name: self.name.trim().to_string(),
            price,
            stock,
            category_id: self.category_id.trim().to_string(),
            material: self.material.trim().to_string(),
            description: self.description.trim().to_string(),
            image_urls: self.image_urls.clone(),
        })
    }

    fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    fn push_image_url(&mut self, url: String) {
        self.image_urls.push(url);
    }

    fn remove_image_url(&mut self, index: usize) -> Option<String> {
        (index < self.image_urls.len()).then(|| self.image_urls.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            sku: "RG-001".into(),
            name: "Solitaire ring".into(),
            price: "1299.90".into(),
            stock: "4".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_price_must_be_non_negative_number() {
        let mut d = draft();
        assert_eq!(d.to_payload().unwrap().price, 1299.90);

        d.price = "-5".into();
        assert_eq!(d.validate().unwrap_err().field, "price");

        d.price = "12,5".into();
        assert_eq!(d.validate().unwrap_err().field, "price");
    }

    #[test]
    fn test_stock_must_be_whole_number() {
        let mut d = draft();
        d.stock = "2.5".into();
        assert_eq!(d.validate().unwrap_err().field, "stock");
    }

    #[test]
    fn test_from_payload_keeps_assigned_id() {
        let payload = draft().to_payload().unwrap();
        let product = Product::from_payload("local-1".into(), &payload);
        assert_eq!(product.id, "local-1");
        assert_eq!(product.stock, 4);
        assert_eq!(ProductDraft::from_record(&product).price, "1299.9");
    }
}
