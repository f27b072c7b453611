use contracts::domain::common::EntityRecord;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api::EntityApi;
use crate::shared::list_utils::{filter_list, sort_list, Searchable, Sortable, SortState};
use crate::shared::state::{ListController, ListStore};

pub struct ListViewModel<A: EntityApi> {
    api: Arc<A>,
    pub store: RwSignal<ListStore<A::Record>>,
    pub selected: RwSignal<HashSet<String>>,
    pub sort: RwSignal<SortState>,
    pub search: RwSignal<String>,
    error_expiry: Option<Duration>,
}

impl<A: EntityApi> Clone for ListViewModel<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            store: self.store,
            selected: self.selected,
            sort: self.sort,
            search: self.search,
            error_expiry: self.error_expiry,
        }
    }
}

impl<A> ListViewModel<A>
where
    A: EntityApi + Send + Sync + 'static,
    A::Record: Send + Sync,
{
    pub fn new(api: A, default_sort: &str) -> Self {
        Self {
            api: Arc::new(api),
            store: RwSignal::new(ListStore::new()),
            selected: RwSignal::new(HashSet::new()),
            sort: RwSignal::new(SortState::new(default_sort)),
            search: RwSignal::new(String::new()),
            error_expiry: None,
        }
    }

    /// Errors disappear after `delay` unless a newer one replaced them
    pub fn with_error_expiry(mut self, delay: Duration) -> Self {
        self.error_expiry = Some(delay);
        self
    }

    pub fn api(&self) -> Arc<A> {
        Arc::clone(&self.api)
    }

    // ============================================================================
    // Commands
    // ============================================================================

    pub fn fetch(&self) {
        let this = self.clone();
        spawn_local(async move {
            let controller = ListController::new(this.api.as_ref(), &this.store);
            if controller.fetch_all().await.is_err() {
                this.schedule_error_expiry();
            }
        });
    }

    /// Create (no id) or update; the table is patched from the confirmed record
    pub async fn save(&self, id: Option<&str>, payload: &A::Payload) -> Result<A::Record, String> {
        let controller = ListController::new(self.api.as_ref(), &self.store);
        let result = match id {
            Some(id) => controller.update(id, payload).await,
            None => controller.create(payload).await,
        };
        if result.is_err() {
            self.schedule_error_expiry();
        }
        result.map_err(|e| e.to_string())
    }

    pub fn delete_selected(&self) {
        let ids: Vec<String> = self.selected.get_untracked().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        let prompt = format!(
            "Delete {} selected {}?",
            ids.len(),
            if ids.len() == 1 {
                A::Record::element_name().to_lowercase()
            } else {
                A::Record::list_name().to_lowercase()
            }
        );
        if !confirm(&prompt) {
            return;
        }

        let this = self.clone();
        spawn_local(async move {
            let controller = ListController::new(this.api.as_ref(), &this.store);
            match controller.delete_many(&ids).await {
                Ok(_) => this.selected.set(HashSet::new()),
                Err(_) => {
                    let gone: HashSet<String> = this.store.with_untracked(|s| {
                        ids.iter().filter(|id| s.get(id).is_none()).cloned().collect()
                    });
                    this.selected.update(|sel| sel.retain(|id| !gone.contains(id)));
                    this.schedule_error_expiry();
                }
            }
        });
    }

    pub fn dismiss_message(&self) {
        self.store.update(|s| s.set_message(None));
    }

    fn schedule_error_expiry(&self) {
        let Some(delay) = self.error_expiry else {
            return;
        };
        let store = self.store;
        let seq = store.with_untracked(|s| s.error_seq());
        spawn_local(async move {
            TimeoutFuture::new(delay.as_millis() as u32).await;
            store.update(|s| s.clear_error(seq));
        });
    }

    // ============================================================================
    // Selection
    // ============================================================================

    pub fn toggle_select(&self, id: String, checked: bool) {
        self.selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.with(|s| s.contains(id))
    }

    pub fn selected_count(&self) -> usize {
        self.selected.with(|s| s.len())
    }

    // ============================================================================
    // Queries (tracked)
    // ============================================================================

    pub fn error(&self) -> Signal<Option<String>> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.error().map(str::to_string)))
    }

    pub fn message(&self) -> Signal<Option<String>> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.message().map(str::to_string)))
    }

    pub fn is_loading(&self) -> bool {
        self.store.with(|s| s.is_loading())
    }

    pub fn len(&self) -> usize {
        self.store.with(|s| s.items().len())
    }

    pub fn find(&self, id: &str) -> Option<A::Record> {
        self.store.with_untracked(|s| s.get(id).cloned())
    }
}

impl<A> ListViewModel<A>
where
    A: EntityApi + Send + Sync + 'static,
    A::Record: Sortable + Searchable + Send + Sync,
{
    /// Cached records narrowed by the search box and sorted by the active column
    pub fn rows(&self) -> Vec<A::Record> {
        let items = self.store.with(|s| s.items().to_vec());
        let mut rows = filter_list(items, &self.search.get());
        let sort = self.sort.get();
        sort_list(&mut rows, &sort.field, sort.ascending);
        rows
    }

    pub fn all_selected(&self) -> bool {
        let rows = self.rows();
        !rows.is_empty() && self.selected.with(|s| rows.iter().all(|r| s.contains(r.id())))
    }

    /// Header checkbox: selects the visible rows or clears the selection
    pub fn set_all_selected(&self, checked: bool) {
        if checked {
            let ids: Vec<String> = self.rows().iter().map(|r| r.id().to_string()).collect();
            self.selected.update(|s| s.extend(ids));
        } else {
            self.selected.set(HashSet::new());
        }
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
