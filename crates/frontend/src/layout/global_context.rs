use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Open tabs and panel visibility of the main layout
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the tab named by `?active=` and keeps the query in sync
    pub fn init_router_integration(&self, default_key: &str, title_for: fn(&str) -> &'static str) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let key = active_from_query(&search).unwrap_or_else(|| default_key.to_string());
        self.open_tab(&key, title_for(&key));

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = active_query(&active_key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: {}", key);
        self.opened.update(|tabs| push_unique(tabs, key, title));
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if was_active {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

fn push_unique(tabs: &mut Vec<Tab>, key: &str, title: &str) {
    if !tabs.iter().any(|tab| tab.key == key) {
        tabs.push(Tab {
            key: key.to_string(),
            title: title.to_string(),
        });
    }
}

/// `?active=a001_category` -> `a001_category`
fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|k| !k.is_empty()).cloned()
}

fn active_query(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_query_round_trip() {
        assert_eq!(active_query("a008_order"), "?active=a008_order");
        assert_eq!(active_from_query("?active=a008_order").as_deref(), Some("a008_order"));
        assert_eq!(active_from_query(""), None);
        assert_eq!(active_from_query("?active="), None);
    }

    #[test]
    fn test_push_unique_keeps_first_title() {
        let mut tabs = vec![];
        push_unique(&mut tabs, "a001_category", "Categories");
        push_unique(&mut tabs, "a001_category", "Other");
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].title, "Categories");
    }
}
