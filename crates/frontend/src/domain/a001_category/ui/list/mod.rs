use contracts::domain::a001_category::aggregate::{Category, CategoryDraft};
use leptos::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::a001_category::api::category_api;
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::shared::config::use_config;
use crate::shared::crud::{open_form_modal, ListToolbar, ListViewModel, RowCheckbox, SelectAllCheckbox};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::list_utils::{cmp_text, contains_any, Searchable, SortHeader, Sortable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::upload::{RestImageUploader, UploadCoordinator};

impl Sortable for Category {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "category_id" => cmp_text(&self.category_id, &other.category_id),
            "name" => cmp_text(&self.name, &other.name),
            "subcategories" => self.subcategories.len().cmp(&other.subcategories.len()),
            "images" => self.image_urls.len().cmp(&other.image_urls.len()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for Category {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_any(filter, &[&self.category_id, &self.name, &self.description])
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let config = use_config();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    // Errors on this screen fade out after a few seconds
    let list = ListViewModel::new(category_api(&config), "name")
        .with_error_expiry(config.error_display);
    let uploads = Arc::new(UploadCoordinator::new(RestImageUploader::from_session(&config)));
    list.fetch();

    let open_form = {
        let list = list.clone();
        Callback::new(move |record: Option<Category>| {
            let list = list.clone();
            let uploads = uploads.clone();
            open_form_modal::<CategoryDraft, _>(modal_stack, 760, record, move |vm, close| {
                view! {
                    <CategoryDetails vm=vm list=list.clone() uploads=uploads.clone() on_close=close />
                }
                .into_any()
            });
        })
    };

    let sort = list.sort;
    let (l_head, l_rows, l_empty) = (list.clone(), list.clone(), list.clone());

    view! {
        <div class="content">
            <ListToolbar
                list=list
                title="Categories"
                subtitle="Catalog structure shown in the shop menu"
                new_label="New category"
                on_new=Callback::new(move |_| open_form.run(None))
            />

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SelectAllCheckbox list=l_head />
                            <th class="table__header-cell">"Image"</th>
                            <SortHeader sort=sort field="category_id" label="Category ID" />
                            <SortHeader sort=sort field="name" label="Name" />
                            <SortHeader sort=sort field="subcategories" label="Subcategories" />
                            <SortHeader sort=sort field="images" label="Images" />
                            <SortHeader sort=sort field="created_at" label="Created" />
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let list = l_rows.clone();
                            l_rows
                                .rows()
                                .into_iter()
                                .map(|row| {
                                    let (l_checked, l_select) = (list.clone(), list.clone());
                                    let id = row.id.clone();
                                    let selected = {
                                        let id = id.clone();
                                        move || l_checked.is_selected(&id)
                                    };
                                    let thumb = row.image_urls.first().cloned();
                                    let images = row.image_urls.len();
                                    let subcategories = row.subcategories.join(", ");
                                    let created = format_optional_datetime(row.created_at.as_ref());
                                    let (category_id, name) = (row.category_id.clone(), row.name.clone());
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--selected=selected
                                            on:click=move |_| open_form.run(Some(row.clone()))
                                        >
                                            <RowCheckbox list=l_select id=id />
                                            <td class="table__cell table__cell--thumb">
                                                {thumb.map(|url| view! { <img class="table__thumb" src=url alt="" /> })}
                                            </td>
                                            <td class="table__cell">{category_id}</td>
                                            <td class="table__cell">{name}</td>
                                            <td class="table__cell">{subcategories}</td>
                                            <td class="table__cell">{images}</td>
                                            <td class="table__cell">{created}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || l_empty.len() == 0 && !l_empty.is_loading()>
                    <div class="table__empty">"No categories yet"</div>
                </Show>
            </div>
        </div>
    }
}
