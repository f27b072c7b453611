//! Orders are read page by page and only their status is ever written.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use contracts::domain::a008_order::aggregate::{Order, OrderItem, OrderStatusUpdate};
use contracts::enums::order_status::OrderStatus;
use contracts::shared::pagination::{Page, PageRequest};

use crate::shared::api::{ApiClient, ApiError};
use crate::shared::config::{AppConfig, DataSource};
use crate::shared::storage::{load_json, save_json, KeyValueStore, LocalStorage};

/// Local storage key of the demo orders
pub const ORDERS_KEY: &str = "orders";

#[async_trait(?Send)]
pub trait OrderApi {
    async fn list_page(&self, request: PageRequest) -> Result<Page<Order>, ApiError>;

    async fn get(&self, id: &str) -> Result<Order, ApiError>;

    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order, ApiError>;
}

// ============================================================================
// REST
// ============================================================================

#[derive(Clone, Debug)]
pub struct RestOrderApi {
    client: ApiClient,
}

impl RestOrderApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

pub fn page_query(request: &PageRequest) -> Result<String, ApiError> {
    serde_qs::to_string(request).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl OrderApi for RestOrderApi {
    async fn list_page(&self, request: PageRequest) -> Result<Page<Order>, ApiError> {
        let path = format!("/order?{}", page_query(&request)?);
        self.client.get(&path).await
    }

    async fn get(&self, id: &str) -> Result<Order, ApiError> {
        self.client
            .get(&format!("/order/{}", urlencoding::encode(id)))
            .await
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order, ApiError> {
        self.client
            .put_json(
                &format!("/order/{}/status", urlencoding::encode(id)),
                &OrderStatusUpdate { status },
            )
            .await
    }
}

// ============================================================================
// Local demo store
// ============================================================================

#[derive(Clone, Debug)]
pub struct LocalOrderApi<S> {
    store: S,
}

impl<S: KeyValueStore> LocalOrderApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vec<Order>, ApiError> {
        Ok(load_json::<Vec<Order>, _>(&self.store, ORDERS_KEY)?.unwrap_or_default())
    }

    fn save(&self, orders: &[Order]) -> Result<(), ApiError> {
        save_json(&self.store, ORDERS_KEY, orders)?;
        Ok(())
    }

    pub fn seed(&self, orders: &[Order]) -> Result<(), ApiError> {
        self.save(orders)
    }
}

#[async_trait(?Send)]
impl<S: KeyValueStore> OrderApi for LocalOrderApi<S> {
    /// Newest first, like the backend
    async fn list_page(&self, request: PageRequest) -> Result<Page<Order>, ApiError> {
        let mut orders = self.load()?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(Page::slice(orders, request))
    }

    async fn get(&self, id: &str) -> Result<Order, ApiError> {
        self.load()?
            .into_iter()
            .find(|o| o.id == id)
            .ok_or_else(|| ApiError::not_found("Order"))
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order, ApiError> {
        let mut orders = self.load()?;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| ApiError::not_found("Order"))?;
        order.status = status;
        let updated = order.clone();
        self.save(&orders)?;
        log::debug!("Order {} -> {}", updated.order_code, status.code());
        Ok(updated)
    }
}

// ============================================================================
// Source selection
// ============================================================================

#[derive(Clone, Debug)]
pub enum OrderSource {
    Remote(RestOrderApi),
    Local(LocalOrderApi<LocalStorage>),
}

pub fn order_api(config: &AppConfig) -> OrderSource {
    match config.orders {
        DataSource::Remote => OrderSource::Remote(RestOrderApi::new(ApiClient::from_session(config))),
        DataSource::Local => OrderSource::Local(LocalOrderApi::new(LocalStorage)),
    }
}

impl OrderSource {
    pub fn is_local(&self) -> bool {
        matches!(self, OrderSource::Local(_))
    }
}

#[async_trait(?Send)]
impl OrderApi for OrderSource {
    async fn list_page(&self, request: PageRequest) -> Result<Page<Order>, ApiError> {
        match self {
            OrderSource::Remote(api) => api.list_page(request).await,
            OrderSource::Local(api) => api.list_page(request).await,
        }
    }

    async fn get(&self, id: &str) -> Result<Order, ApiError> {
        match self {
            OrderSource::Remote(api) => api.get(id).await,
            OrderSource::Local(api) => api.get(id).await,
        }
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order, ApiError> {
        match self {
            OrderSource::Remote(api) => api.update_status(id, status).await,
            OrderSource::Local(api) => api.update_status(id, status).await,
        }
    }
}

/// Overwrites the locally stored orders with generated demo orders
pub fn seed_demo_orders() -> Result<(), ApiError> {
    LocalOrderApi::new(LocalStorage).seed(&demo_orders())
}

pub fn demo_orders() -> Vec<Order> {
    let customers = [
        ("Anna Tran", "0901 234 567", "12 Hang Bac, Hanoi"),
        ("Minh Le", "0912 345 678", "48 Le Loi, Da Nang"),
        ("Linh Pham", "0987 654 321", "7 Nguyen Hue, Ho Chi Minh City"),
    ];
    let catalogue = [
        ("demo-1", "Solitaire diamond ring", 1299.0),
        ("demo-3", "Pearl pendant necklace", 359.0),
        ("demo-4", "Sapphire stud earrings", 629.0),
        ("demo-5", "Tennis bracelet", 1890.0),
    ];
    let statuses = OrderStatus::all();

    (0..24u32)
        .map(|n| {
            let (name, phone, address) = customers[n as usize % customers.len()];
            let (product_id, product, price) = catalogue[n as usize % catalogue.len()];
            let quantity = 1 + n % 2;
            let items = vec![OrderItem {
                product_id: product_id.to_string(),
                name: product.to_string(),
                quantity,
                price,
            }];
            let total: f64 = items.iter().map(OrderItem::line_total).sum();
            Order {
                id: format!("demo-order-{}", n + 1),
                order_code: format!("JW{:05}", 10_000 + n),
                customer_name: name.to_string(),
                phone: phone.to_string(),
                address: address.to_string(),
                items,
                total,
                status: statuses[n as usize % statuses.len()],
                created_at: Utc
                    .with_ymd_and_hms(2026, 1, 1 + n, 10, 30, 0)
                    .single(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;
    use futures::executor::block_on;

    fn seeded() -> LocalOrderApi<MemoryStore> {
        let api = LocalOrderApi::new(MemoryStore::new());
        api.seed(&demo_orders()).unwrap();
        api
    }

    #[test]
    fn test_page_query() {
        assert_eq!(page_query(&PageRequest::new(3, 10)).unwrap(), "page=3&limit=10");
    }

    #[test]
    fn test_local_pages_newest_first() {
        let api = seeded();
        let first = block_on(api.list_page(PageRequest::new(1, 10))).unwrap();
        assert_eq!(first.total, 24);
        assert_eq!(first.total_pages(), 3);
        assert_eq!(first.items.len(), 10);
        assert!(first.items[0].created_at > first.items[9].created_at);

        let last = block_on(api.list_page(PageRequest::new(3, 10))).unwrap();
        assert_eq!(last.items.len(), 4);
        assert!(!last.has_next());

        let beyond = block_on(api.list_page(PageRequest::new(9, 10))).unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 24);
    }

    #[test]
    fn test_local_status_update_is_persisted() {
        let api = seeded();
        let updated = block_on(api.update_status("demo-order-1", OrderStatus::Shipping)).unwrap();
        assert_eq!(updated.status, OrderStatus::Shipping);
        let reread = block_on(api.get("demo-order-1")).unwrap();
        assert_eq!(reread.status, OrderStatus::Shipping);
    }

    #[test]
    fn test_unknown_order_is_not_found() {
        let api = seeded();
        let err = block_on(api.update_status("missing", OrderStatus::Cancelled)).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(block_on(api.get("missing")).is_err());
    }

    #[test]
    fn test_empty_store_gives_empty_page() {
        let api = LocalOrderApi::new(MemoryStore::new());
        let page = block_on(api.list_page(PageRequest::default())).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages(), 0);
    }
}
