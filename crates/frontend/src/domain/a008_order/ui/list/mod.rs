mod state;

pub use state::{OrderPageState, OrderPager};

use contracts::domain::a008_order::aggregate::Order;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a008_order::api::{order_api, seed_demo_orders, OrderSource};
use crate::domain::a008_order::ui::details::OrderDetails;
use crate::shared::components::feedback::{ErrorBanner, MessageBanner};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::crud::confirm;
use crate::shared::date_utils::{format_money, format_optional_datetime};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_text, contains_any, filter_list, sort_list, SearchInput, Searchable, SortHeader, SortState,
    Sortable,
};
use crate::shared::modal_stack::{ModalFrameOptions, ModalStackService};

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "order_code" => cmp_text(&self.order_code, &other.order_code),
            "customer_name" => cmp_text(&self.customer_name, &other.customer_name),
            "items" => self.item_count().cmp(&other.item_count()),
            "total" => self.total.partial_cmp(&other.total).unwrap_or(Ordering::Equal),
            "status" => self.status.code().cmp(other.status.code()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for Order {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_any(
            filter,
            &[&self.order_code, &self.customer_name, &self.phone, &self.address],
        )
    }
}

pub fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge--warning",
        OrderStatus::Confirmed => "badge badge--info",
        OrderStatus::Shipping => "badge badge--info",
        OrderStatus::Delivered => "badge badge--success",
        OrderStatus::Cancelled => "badge badge--neutral",
    }
}

/// Paged orders screen state; sorting and search apply to the loaded page
#[derive(Clone)]
pub struct OrderListViewModel {
    api: Arc<OrderSource>,
    pub state: RwSignal<OrderPageState>,
    pub sort: RwSignal<SortState>,
    pub search: RwSignal<String>,
}

impl OrderListViewModel {
    pub fn new(api: OrderSource, page_size: u32) -> Self {
        let mut sort = SortState::new("created_at");
        sort.ascending = false;
        Self {
            api: Arc::new(api),
            state: RwSignal::new(OrderPageState::new(page_size)),
            sort: RwSignal::new(sort),
            search: RwSignal::new(String::new()),
        }
    }

    pub fn is_local(&self) -> bool {
        self.api.is_local()
    }

    pub fn load(&self, page: u32) {
        let this = self.clone();
        spawn_local(async move {
            // The error is already in the store
            let _ = OrderPager::new(this.api.as_ref(), &this.state).load(page).await;
        });
    }

    pub fn reload(&self) {
        self.load(self.state.with_untracked(|s| s.page));
    }

    pub async fn set_status(&self, id: &str, status: OrderStatus) -> Result<Order, String> {
        OrderPager::new(self.api.as_ref(), &self.state)
            .set_status(id, status)
            .await
            .map_err(|e| e.to_string())
    }

    pub fn rows(&self) -> Vec<Order> {
        let items = self.state.with(|s| s.list.items().to_vec());
        let mut rows = filter_list(items, &self.search.get());
        let sort = self.sort.get();
        sort_list(&mut rows, &sort.field, sort.ascending);
        rows
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.list.error().map(str::to_string)))
    }

    pub fn message(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.list.message().map(str::to_string)))
    }

    pub fn dismiss_message(&self) {
        self.state.update(|s| s.list.set_message(None));
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let config = use_config();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let vm = OrderListViewModel::new(order_api(&config), config.order_page_size);
    let is_local = vm.is_local();
    vm.load(1);

    let open_details = {
        let vm = vm.clone();
        Callback::new(move |order: Order| {
            let vm = vm.clone();
            let saving = RwSignal::new(false);
            modal_stack.push_with_guard(
                ModalFrameOptions::width(720).with_class("details-modal"),
                move || !saving.get_untracked(),
                move |handle| {
                    let on_close = Callback::new(move |_| handle.close());
                    view! {
                        <OrderDetails order=order.clone() vm=vm.clone() saving=saving on_close=on_close />
                    }
                    .into_any()
                },
            );
        })
    };

    let (vm_reload, vm_seed, vm_dismiss, vm_rows) = (vm.clone(), vm.clone(), vm.clone(), vm.clone());
    let state = vm.state;
    let sort = vm.sort;
    let search = vm.search;
    let error = vm.error();
    let message = vm.message();

    let fill_demo = Callback::new(move |_: ()| {
        if !confirm("Replace the local orders with demo data?") {
            return;
        }
        match seed_demo_orders() {
            Ok(()) => vm_seed.load(1),
            Err(e) => log::error!("Failed to seed demo orders: {}", e),
        }
    });

    view! {
        <div class="content">
            <PageHeader title="Orders" subtitle="Customer orders, newest first">
                <SearchInput value=search placeholder="Search this page..." />
                <Show when=move || is_local>
                    <button class="button button--secondary" on:click=move |_| fill_demo.run(())>
                        {icon("download")}
                        "Fill demo data"
                    </button>
                </Show>
                <button
                    class="button button--secondary"
                    on:click=move |_| vm_reload.reload()
                    disabled=move || state.with(|s| s.list.is_loading())
                >
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner error=error />
            <MessageBanner message=message on_dismiss=Callback::new(move |_| vm_dismiss.dismiss_message()) />

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortHeader sort=sort field="order_code" label="Order" />
                            <SortHeader sort=sort field="customer_name" label="Customer" />
                            <SortHeader sort=sort field="items" label="Items" />
                            <SortHeader sort=sort field="total" label="Total" />
                            <SortHeader sort=sort field="status" label="Status" />
                            <SortHeader sort=sort field="created_at" label="Placed" />
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            vm_rows
                                .rows()
                                .into_iter()
                                .map(|row| {
                                    let code = row.order_code.clone();
                                    let customer = row.customer_name.clone();
                                    let items = row.item_count();
                                    let total = format_money(row.total);
                                    let (badge_class, badge_text) =
                                        (status_class(row.status), row.status.display_name());
                                    let placed = format_optional_datetime(row.created_at.as_ref());
                                    view! {
                                        <tr class="table__row" on:click=move |_| open_details.run(row.clone())>
                                            <td class="table__cell table__cell--code">{code}</td>
                                            <td class="table__cell">{customer}</td>
                                            <td class="table__cell table__cell--number">{items}</td>
                                            <td class="table__cell table__cell--number">{total}</td>
                                            <td class="table__cell">
                                                <span class=badge_class>{badge_text}</span>
                                            </td>
                                            <td class="table__cell">{placed}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || state.with(|s| s.list.items().is_empty() && !s.list.is_loading()) && search.with(|q| q.is_empty())>
                    <div class="table__empty">"No orders"</div>
                </Show>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                total_count=Signal::derive(move || state.with(|s| s.total))
                on_page_change=Callback::new(move |page| vm.load(page))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_a_badge() {
        for status in OrderStatus::all() {
            assert!(status_class(status).starts_with("badge "));
        }
    }
}
