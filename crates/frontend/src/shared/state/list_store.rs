//! List Store: cached records of one entity type, mirroring the backend.
//!
//! The cache only changes after a confirmed response. A rejected request
//! leaves the items as they were and sets a transient error.

use contracts::domain::common::EntityRecord;

use super::StateCell;
use crate::shared::api::{ApiError, EntityApi};

#[derive(Debug, Clone, PartialEq)]
pub struct ListStore<R> {
    items: Vec<R>,
    loading: bool,
    error: Option<String>,
    error_seq: u64,
    message: Option<String>,
}

impl<R> Default for ListStore<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            error_seq: 0,
            message: None,
        }
    }
}

impl<R: EntityRecord> ListStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error_seq(&self) -> u64 {
        self.error_seq
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    // ============================================================================
    // Confirmed changes
    // ============================================================================

    pub fn replace_all(&mut self, items: Vec<R>) {
        self.items = items;
        self.loading = false;
    }

    pub fn apply_created(&mut self, record: R) {
        self.message = Some(format!("{} \"{}\" created", R::element_name(), record.title()));
        self.items.push(record);
    }

    /// Replaces the record with the same id; an unknown id leaves the list as is
    pub fn apply_updated(&mut self, record: R) {
        self.message = Some(format!("{} \"{}\" updated", R::element_name(), record.title()));
        if let Some(slot) = self.items.iter_mut().find(|r| r.id() == record.id()) {
            *slot = record;
        }
    }

    /// Removes by id; the message is set even when the id was not cached
    pub fn apply_deleted(&mut self, id: &str, message: Option<String>) {
        self.items.retain(|r| r.id() != id);
        self.message =
            Some(message.unwrap_or_else(|| format!("{} deleted", R::element_name())));
    }

    // ============================================================================
    // Transient feedback
    // ============================================================================

    /// Returns the sequence number to pass to [`Self::clear_error`]
    pub fn set_error(&mut self, error: impl Into<String>) -> u64 {
        self.error_seq += 1;
        self.error = Some(error.into());
        self.loading = false;
        self.error_seq
    }

    /// Clears the error only if no newer error replaced it
    pub fn clear_error(&mut self, seq: u64) {
        if self.error_seq == seq {
            self.error = None;
        }
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Runs CRUD requests and applies confirmed results to a [`ListStore`]
///
/// Each operation returns the error as well, so forms can show it inline.
pub struct ListController<'a, A, C> {
    api: &'a A,
    cell: &'a C,
}

impl<'a, A, C> ListController<'a, A, C>
where
    A: EntityApi,
    C: StateCell<ListStore<A::Record>>,
{
    pub fn new(api: &'a A, cell: &'a C) -> Self {
        Self { api, cell }
    }

    pub async fn fetch_all(&self) -> Result<(), ApiError> {
        self.cell.modify(|s| s.set_loading(true));
        match self.api.list().await {
            Ok(items) => {
                log::debug!("{}: {} loaded", A::Record::list_name(), items.len());
                self.cell.modify(|s| s.replace_all(items));
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    pub async fn create(&self, payload: &A::Payload) -> Result<A::Record, ApiError> {
        match self.api.create(payload).await {
            Ok(record) => {
                let confirmed = record.clone();
                self.cell.modify(|s| s.apply_created(confirmed));
                Ok(record)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    pub async fn update(&self, id: &str, payload: &A::Payload) -> Result<A::Record, ApiError> {
        match self.api.update(id, payload).await {
            Ok(record) => {
                let confirmed = record.clone();
                self.cell.modify(|s| s.apply_updated(confirmed));
                Ok(record)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        match self.api.delete(id).await {
            Ok(message) => {
                self.cell.modify(|s| s.apply_deleted(id, message));
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Deletes one by one; stops at the first failure
    pub async fn delete_many(&self, ids: &[String]) -> Result<usize, ApiError> {
        let mut deleted = 0;
        for id in ids {
            self.delete(id).await?;
            deleted += 1;
        }
        if deleted > 1 {
            self.cell.modify(|s| {
                s.set_message(Some(format!(
                    "{} {} deleted",
                    deleted,
                    A::Record::list_name().to_lowercase()
                )))
            });
        }
        Ok(deleted)
    }

    /// Last error sequence number, for delayed expiry
    pub fn error_seq(&self) -> u64 {
        self.cell.inspect(|s| s.error_seq())
    }

    fn fail(&self, e: ApiError) -> ApiError {
        log::warn!("{}: {}", A::Record::list_name(), e);
        let text = e.to_string();
        self.cell.modify(|s| {
            s.set_error(text);
        });
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::LocalEntityApi;
    use crate::shared::storage::MemoryStore;
    use async_trait::async_trait;
    use contracts::domain::a002_collection::aggregate::{Collection, CollectionPayload};
    use contracts::domain::a004_banner::aggregate::{Banner, BannerPayload};
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn banner(title: &str) -> BannerPayload {
        BannerPayload {
            title: title.into(),
            image_url: "https://cdn/b.jpg".into(),
            link_url: None,
            position: 1,
            active: true,
        }
    }

    type Banners = LocalEntityApi<Banner, BannerPayload, MemoryStore>;

    #[test]
    fn test_crud_updates_cache_from_confirmed_records() {
        let api = Banners::new(MemoryStore::new());
        let cell = RefCell::new(ListStore::<Banner>::new());
        let list = ListController::new(&api, &cell);

        let a = block_on(list.create(&banner("Summer"))).unwrap();
        let b = block_on(list.create(&banner("Winter"))).unwrap();
        assert_eq!(cell.borrow().items().len(), 2);

        block_on(list.update(&a.id, &banner("Summer sale"))).unwrap();
        assert_eq!(cell.borrow().items()[0].title, "Summer sale");
        assert_eq!(cell.borrow().message(), Some("Banner \"Summer sale\" updated"));

        block_on(list.delete(&b.id)).unwrap();
        assert_eq!(cell.borrow().items().len(), 1);

        cell.borrow_mut().replace_all(vec![]);
        block_on(list.fetch_all()).unwrap();
        assert_eq!(cell.borrow().items().len(), 1);
        assert!(!cell.borrow().is_loading());
    }

    #[test]
    fn test_delete_of_uncached_id_keeps_list_and_reports() {
        let mut store = ListStore::<Banner>::new();
        store.replace_all(vec![Banner {
            id: "b1".into(),
            title: "Top".into(),
            image_url: "https://cdn/1.jpg".into(),
            link_url: None,
            position: 0,
            active: true,
        }]);
        store.apply_deleted("zzz", Some("Deleted successfully".into()));
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.message(), Some("Deleted successfully"));
    }

    #[test]
    fn test_older_timer_does_not_clear_newer_error() {
        let mut store = ListStore::<Banner>::new();
        let first = store.set_error("Network error: offline");
        let second = store.set_error("Server error (HTTP 500)");
        store.clear_error(first);
        assert_eq!(store.error(), Some("Server error (HTTP 500)"));
        store.clear_error(second);
        assert_eq!(store.error(), None);
    }

    struct RejectingApi;

    #[async_trait(?Send)]
    impl EntityApi for RejectingApi {
        type Record = Collection;
        type Payload = CollectionPayload;

        async fn list(&self) -> Result<Vec<Collection>, ApiError> {
            Err(ApiError::Network("offline".into()))
        }

        async fn create(&self, _: &CollectionPayload) -> Result<Collection, ApiError> {
            Err(ApiError::Rejected {
                status: 409,
                message: "Collection ID exists".into(),
            })
        }

        async fn update(&self, _: &str, _: &CollectionPayload) -> Result<Collection, ApiError> {
            Err(ApiError::not_found("Collection"))
        }

        async fn delete(&self, _: &str) -> Result<Option<String>, ApiError> {
            Err(ApiError::Network("offline".into()))
        }
    }

    #[test]
    fn test_rejections_leave_cache_untouched() {
        let existing = Collection {
            id: "c1".into(),
            collection_id: "SPRING".into(),
            name: "Spring".into(),
            description: String::new(),
            image_urls: vec![],
            products: vec![],
            created_at: None,
        };
        let cell = RefCell::new(ListStore::new());
        cell.borrow_mut().replace_all(vec![existing.clone()]);
        let list = ListController::new(&RejectingApi, &cell);

        let payload = CollectionPayload {
            collection_id: "SPRING".into(),
            name: "Spring".into(),
            description: String::new(),
            image_urls: vec![],
            products: vec![],
        };
        let err = block_on(list.create(&payload)).unwrap_err();
        assert_eq!(err.to_string(), "Collection ID exists");
        assert!(block_on(list.delete("c1")).is_err());
        assert!(block_on(list.fetch_all()).is_err());

        let store = cell.borrow();
        assert_eq!(store.items(), [existing]);
        assert_eq!(store.error(), Some("Network error: offline"));
        assert!(!store.is_loading());
    }
}
