use contracts::domain::a008_order::aggregate::Order;
use contracts::enums::order_status::OrderStatus;
use contracts::shared::pagination::{Page, PageRequest};

use crate::domain::a008_order::api::OrderApi;
use crate::shared::api::ApiError;
use crate::shared::state::{ListStore, StateCell};

/// One page of orders as last confirmed by the backend
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPageState {
    pub list: ListStore<Order>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl OrderPageState {
    pub fn new(page_size: u32) -> Self {
        Self {
            list: ListStore::new(),
            page: 1,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.total.div_ceil(self.page_size as u64) as u32
    }

    pub fn apply_page(&mut self, page: Page<Order>) {
        self.page = page.page;
        self.total = page.total;
        self.list.replace_all(page.items);
    }
}

/// Loads pages and changes order status, applying only confirmed results
pub struct OrderPager<'a, A, C> {
    api: &'a A,
    cell: &'a C,
}

impl<'a, A, C> OrderPager<'a, A, C>
where
    A: OrderApi,
    C: StateCell<OrderPageState>,
{
    pub fn new(api: &'a A, cell: &'a C) -> Self {
        Self { api, cell }
    }

    pub async fn load(&self, page: u32) -> Result<(), ApiError> {
        let size = self.cell.inspect(|s| s.page_size);
        self.cell.modify(|s| s.list.set_loading(true));

        let mut result = self.api.list_page(PageRequest::new(page, size)).await;
        // The list shrank under us: fall back to the new last page
        if let Ok(loaded) = &result {
            if loaded.items.is_empty() && loaded.page > 1 && loaded.total > 0 {
                let last = loaded.total_pages();
                log::debug!("Order page {} is empty, loading page {}", loaded.page, last);
                result = self.api.list_page(PageRequest::new(last, size)).await;
            }
        }

        match result {
            Ok(loaded) => {
                self.cell.modify(|s| s.apply_page(loaded));
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    pub async fn set_status(&self, id: &str, status: OrderStatus) -> Result<Order, ApiError> {
        match self.api.update_status(id, status).await {
            Ok(order) => {
                let confirmed = order.clone();
                self.cell.modify(|s| s.list.apply_updated(confirmed));
                Ok(order)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn fail(&self, e: ApiError) -> ApiError {
        log::warn!("Orders: {}", e);
        let text = e.to_string();
        self.cell.modify(|s| {
            s.list.set_error(text);
        });
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_order::api::{demo_orders, LocalOrderApi};
    use crate::shared::storage::MemoryStore;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn api_with(orders: &[Order]) -> LocalOrderApi<MemoryStore> {
        let api = LocalOrderApi::new(MemoryStore::new());
        api.seed(orders).unwrap();
        api
    }

    #[test]
    fn test_load_applies_page_metadata() {
        let api = api_with(&demo_orders());
        let cell = RefCell::new(OrderPageState::new(10));
        block_on(OrderPager::new(&api, &cell).load(2)).unwrap();

        let state = cell.borrow();
        assert_eq!(state.page, 2);
        assert_eq!(state.total, 24);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.list.items().len(), 10);
        assert!(!state.list.is_loading());
    }

    #[test]
    fn test_page_past_the_end_falls_back_to_last() {
        let orders = demo_orders();
        let api = api_with(&orders[..12]);
        let cell = RefCell::new(OrderPageState::new(10));
        block_on(OrderPager::new(&api, &cell).load(5)).unwrap();

        let state = cell.borrow();
        assert_eq!(state.page, 2);
        assert_eq!(state.list.items().len(), 2);
    }

    #[test]
    fn test_status_change_patches_cached_row() {
        let api = api_with(&demo_orders());
        let cell = RefCell::new(OrderPageState::new(30));
        let pager = OrderPager::new(&api, &cell);
        block_on(pager.load(1)).unwrap();

        block_on(pager.set_status("demo-order-2", OrderStatus::Delivered)).unwrap();
        let state = cell.borrow();
        let row = state.list.get("demo-order-2").unwrap();
        assert_eq!(row.status, OrderStatus::Delivered);
        assert_eq!(state.list.message(), Some("Order \"JW10001\" updated"));
    }

    #[test]
    fn test_failed_status_change_keeps_row() {
        let api = api_with(&demo_orders());
        let cell = RefCell::new(OrderPageState::new(30));
        let pager = OrderPager::new(&api, &cell);
        block_on(pager.load(1)).unwrap();
        let before = cell.borrow().list.items().to_vec();

        assert!(block_on(pager.set_status("gone", OrderStatus::Cancelled)).is_err());
        let state = cell.borrow();
        assert_eq!(state.list.items(), before.as_slice());
        assert_eq!(state.list.error(), Some("Order not found"));
    }

    #[test]
    fn test_empty_store_has_no_pages() {
        let api = LocalOrderApi::new(MemoryStore::new());
        let cell = RefCell::new(OrderPageState::new(10));
        block_on(OrderPager::new(&api, &cell).load(1)).unwrap();
        assert_eq!(cell.borrow().total_pages(), 0);
        assert_eq!(cell.borrow().page, 1);
    }
}
