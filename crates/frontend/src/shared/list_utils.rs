/// Search and sort helpers shared by all list screens
use leptos::prelude::*;
use std::cmp::Ordering;

/// Rows that can be narrowed by the search box
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Rows that can be sorted by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Current sort column of a table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

impl SortState {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: true,
        }
    }

    /// Same column flips direction, another column starts ascending
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive text comparison for string columns
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Case-insensitive substring check over several fields
pub fn contains_any(filter: &str, fields: &[&str]) -> bool {
    let needle = filter.trim().to_lowercase();
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

pub fn get_sort_indicator(sort: &SortState, field: &str) -> &'static str {
    if sort.field == field {
        if sort.ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(sort: &SortState, field: &str) -> &'static str {
    if sort.field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Sortable `<th>` bound to a [`SortState`] signal
#[component]
pub fn SortHeader(
    sort: RwSignal<SortState>,
    field: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            on:click=move |_| sort.update(|s| s.toggle(field))
        >
            {label}
            <span class=move || sort.with(|s| get_sort_class(s, field))>
                {move || sort.with(|s| get_sort_indicator(s, field))}
            </span>
        </th>
    }
}

/// Search box with a clear button; filtering happens on every keystroke
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            {crate::shared::icons::icon("search")}
            <input
                type="text"
                placeholder=placeholder
                class:search-input__field--active=move || !value.get().trim().is_empty()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=move |_| value.set(String::new())>
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        price: f64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => cmp_text(self.name, other.name),
                "price" => self.price.total_cmp(&other.price),
                _ => Ordering::Equal,
            }
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_any(filter, &[self.name])
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "pearl ring", price: 120.0 },
            Row { name: "Gold chain", price: 900.0 },
            Row { name: "amber pendant", price: 45.5 },
        ]
    }

    #[test]
    fn test_sort_by_text_and_number() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].name, "amber pendant");
        assert_eq!(items[2].name, "pearl ring");

        sort_list(&mut items, "price", false);
        assert_eq!(items[0].price, 900.0);
    }

    #[test]
    fn test_sort_state_toggle() {
        let mut sort = SortState::new("name");
        sort.toggle("name");
        assert!(!sort.ascending);
        sort.toggle("price");
        assert_eq!(sort, SortState::new("price"));
        assert_eq!(get_sort_indicator(&sort, "price"), " ▲");
        assert_eq!(get_sort_indicator(&sort, "name"), " ⇅");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        assert_eq!(filter_list(rows(), "GOLD").len(), 1);
        assert_eq!(filter_list(rows(), "  ").len(), 3);
        assert!(filter_list(rows(), "silver").is_empty());
    }
}
