use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityRecord;
use crate::enums::order_status::OrderStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    /// Unit price at the time of purchase
    pub price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Customer order. The admin only reads orders and moves their status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_code: String,
    pub customer_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Sum of line totals; may differ from `total` when shipping or vouchers apply
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

impl EntityRecord for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.order_code
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

/// Body of `PUT /order/:id/status`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_order_with_items() {
        let json = r#"{
            "_id": "o1",
            "orderCode": "ORD-0001",
            "customerName": "Linh",
            "items": [
                {"productId": "p1", "name": "Ring", "quantity": 2, "price": 100.0},
                {"productId": "p2", "name": "Chain", "quantity": 1, "price": 50.5}
            ],
            "total": 250.5,
            "status": "shipping",
            "createdAt": "2024-05-01T10:00:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Shipping);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.items_total(), 250.5);
        assert!(order.phone.is_empty());
    }
}
