use contracts::domain::a003_product::aggregate::{Product, ProductDraft};
use leptos::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::a003_product::api::{product_api, seed_demo_products};
use crate::domain::a003_product::ui::details::ProductDetails;
use crate::shared::config::use_config;
use crate::shared::crud::{confirm, open_form_modal, ListToolbar, ListViewModel, RowCheckbox, SelectAllCheckbox};
use crate::shared::date_utils::format_money;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, contains_any, Searchable, SortHeader, Sortable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::upload::{RestImageUploader, UploadCoordinator};

/// Stock at or below this is highlighted
const LOW_STOCK: u32 = 2;

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "sku" => cmp_text(&self.sku, &other.sku),
            "name" => cmp_text(&self.name, &other.name),
            "category_id" => cmp_text(&self.category_id, &other.category_id),
            "material" => cmp_text(&self.material, &other.material),
            "price" => self.price.partial_cmp(&other.price).unwrap_or(Ordering::Equal),
            "stock" => self.stock.cmp(&other.stock),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_any(
            filter,
            &[&self.sku, &self.name, &self.category_id, &self.material],
        )
    }
}

fn stock_class(stock: u32) -> &'static str {
    match stock {
        0 => "badge badge--danger",
        s if s <= LOW_STOCK => "badge badge--warning",
        _ => "badge badge--neutral",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let config = use_config();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let list = ListViewModel::new(product_api(&config), "name");
    let uploads = Arc::new(UploadCoordinator::new(RestImageUploader::from_session(&config)));
    let is_local = list.api().is_local();
    list.fetch();

    let open_form = {
        let list = list.clone();
        Callback::new(move |record: Option<Product>| {
            let list = list.clone();
            let uploads = uploads.clone();
            open_form_modal::<ProductDraft, _>(modal_stack, 760, record, move |vm, close| {
                view! {
                    <ProductDetails vm=vm list=list.clone() uploads=uploads.clone() on_close=close />
                }
                .into_any()
            });
        })
    };

    let l_seed = list.clone();
    let fill_demo = Callback::new(move |_: ()| {
        if !confirm("Replace the local products with demo data?") {
            return;
        }
        match seed_demo_products() {
            Ok(()) => l_seed.fetch(),
            Err(e) => log::error!("Failed to seed demo products: {}", e),
        }
    });
    let subtitle = if is_local { "Stored in this browser" } else { "Catalogue items" };

    let sort = list.sort;
    let (l_head, l_rows, l_empty) = (list.clone(), list.clone(), list.clone());

    view! {
        <div class="content">
            <ListToolbar
                list=list
                title="Products"
                subtitle=subtitle
                new_label="New product"
                on_new=Callback::new(move |_| open_form.run(None))
            >
                <Show when=move || is_local>
                    <button class="button button--secondary" on:click=move |_| fill_demo.run(())>
                        {icon("download")}
                        "Fill demo data"
                    </button>
                </Show>
            </ListToolbar>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SelectAllCheckbox list=l_head />
                            <SortHeader sort=sort field="sku" label="SKU" />
                            <SortHeader sort=sort field="name" label="Name" />
                            <SortHeader sort=sort field="category_id" label="Category" />
                            <SortHeader sort=sort field="material" label="Material" />
                            <SortHeader sort=sort field="price" label="Price" />
                            <SortHeader sort=sort field="stock" label="Stock" />
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
                                    let price = format_money(row.price);
                                    let stock = row.stock;
                                    let (sku, name, category, material) = (
                                        row.sku.clone(),
                                        row.name.clone(),
                                        row.category_id.clone(),
                                        row.material.clone(),
                                    );
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--selected=selected
                                            on:click=move |_| open_form.run(Some(row.clone()))
                                        >
                                            <RowCheckbox list=l_select id=id />
                                            <td class="table__cell">{sku}</td>
                                            <td class="table__cell">{name}</td>
                                            <td class="table__cell">{category}</td>
                                            <td class="table__cell">{material}</td>
                                            <td class="table__cell table__cell--number">{price}</td>
                                            <td class="table__cell table__cell--number">
                                                <span class=stock_class(stock)>{stock}</span>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || l_empty.len() == 0 && !l_empty.is_loading()>
                    <div class="table__empty">"No products yet"</div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_class_thresholds() {
        assert_eq!(stock_class(0), "badge badge--danger");
        assert_eq!(stock_class(LOW_STOCK), "badge badge--warning");
        assert_eq!(stock_class(LOW_STOCK + 1), "badge badge--neutral");
    }
}
