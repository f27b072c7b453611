use contracts::domain::a002_collection::aggregate::{Collection, CollectionDraft};
use leptos::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::a002_collection::api::collection_api;
use crate::domain::a002_collection::ui::details::CollectionDetails;
use crate::shared::config::use_config;
use crate::shared::crud::{open_form_modal, ListToolbar, ListViewModel, RowCheckbox, SelectAllCheckbox};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::list_utils::{cmp_text, contains_any, Searchable, SortHeader, Sortable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::upload::{RestImageUploader, UploadCoordinator};

impl Sortable for Collection {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "collection_id" => cmp_text(&self.collection_id, &other.collection_id),
            "name" => cmp_text(&self.name, &other.name),
            "products" => self.products.len().cmp(&other.products.len()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for Collection {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_any(filter, &[&self.collection_id, &self.name, &self.description])
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CollectionList() -> impl IntoView {
    let config = use_config();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let list = ListViewModel::new(collection_api(&config), "name");
    let uploads = Arc::new(UploadCoordinator::new(RestImageUploader::from_session(&config)));
    list.fetch();

    let open_form = {
        let list = list.clone();
        Callback::new(move |record: Option<Collection>| {
            let list = list.clone();
            let uploads = uploads.clone();
            open_form_modal::<CollectionDraft, _>(modal_stack, 760, record, move |vm, close| {
                view! {
                    <CollectionDetails vm=vm list=list.clone() uploads=uploads.clone() on_close=close />
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
                title="Collections"
                subtitle="Curated sets of products"
                new_label="New collection"
                on_new=Callback::new(move |_| open_form.run(None))
            />

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SelectAllCheckbox list=l_head />
                            <th class="table__header-cell">"Cover"</th>
                            <SortHeader sort=sort field="collection_id" label="Collection ID" />
                            <SortHeader sort=sort field="name" label="Name" />
                            <SortHeader sort=sort field="products" label="Products" />
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
                                    let cover = row.image_urls.first().cloned();
                                    let products = row.products.len();
                                    let created = format_optional_datetime(row.created_at.as_ref());
                                    let (collection_id, name) = (row.collection_id.clone(), row.name.clone());
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--selected=selected
                                            on:click=move |_| open_form.run(Some(row.clone()))
                                        >
                                            <RowCheckbox list=l_select id=id />
                                            <td class="table__cell table__cell--thumb">
                                                {cover.map(|url| view! { <img class="table__thumb" src=url alt="" /> })}
                                            </td>
                                            <td class="table__cell">{collection_id}</td>
                                            <td class="table__cell">{name}</td>
                                            <td class="table__cell">{products}</td>
                                            <td class="table__cell">{created}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || l_empty.len() == 0 && !l_empty.is_loading()>
                    <div class="table__empty">"No collections yet"</div>
                </Show>
            </div>
        </div>
    }
}
