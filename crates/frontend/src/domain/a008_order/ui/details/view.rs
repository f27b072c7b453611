use contracts::domain::a008_order::aggregate::Order;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a008_order::ui::list::{status_class, OrderListViewModel};
use crate::shared::components::feedback::ErrorBanner;
use crate::shared::date_utils::{format_money, format_optional_datetime};
use crate::shared::icons::icon;

/// Read-only order with a status selector
#[component]
pub fn OrderDetails(
    order: Order,
    vm: OrderListViewModel,
    /// Set while the status request runs; the modal cannot be closed meanwhile
    saving: RwSignal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = order.id.clone();
    let current = order.status;
    let status = RwSignal::new(current);
    let error = RwSignal::new(None::<String>);

    let save = move |_| {
        let next = status.get_untracked();
        if next == current || saving.get_untracked() {
            return;
        }
        saving.set(true);
        error.set(None);
        let vm = vm.clone();
        let id = id.clone();
        spawn_local(async move {
            let result = vm.set_status(&id, next).await;
            saving.set(false);
            match result {
                Ok(_) => on_close.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let items_total = format_money(order.items_total());
    let total = format_money(order.total);
    let placed = format_optional_datetime(order.created_at.as_ref());
    let lines = order
        .items
        .iter()
        .map(|item| {
            let (name, product_id) = (item.name.clone(), item.product_id.clone());
            let (quantity, price, line) = (item.quantity, format_money(item.price), format_money(item.line_total()));
            view! {
                <tr class="table__row">
                    <td class="table__cell">{name}</td>
                    <td class="table__cell table__cell--muted">{product_id}</td>
                    <td class="table__cell table__cell--number">{quantity}</td>
                    <td class="table__cell table__cell--number">{price}</td>
                    <td class="table__cell table__cell--number">{line}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="details-container">
            <div class="details-header">
                <h2>{format!("Order {}", order.order_code)}</h2>
                <span class=status_class(current)>{current.display_name()}</span>
            </div>

            <div class="modal-actions-top details-actions">
                <select
                    class="form__select"
                    prop:disabled=move || saving.get()
                    on:change=move |ev| {
                        if let Some(next) = OrderStatus::from_code(&event_target_value(&ev)) {
                            status.set(next);
                        }
                    }
                >
                    {OrderStatus::all()
                        .into_iter()
                        .map(|s| {
                            view! {
                                <option value=s.code() prop:selected=move || status.get() == s>
                                    {s.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button
                    class="button button--primary"
                    on:click=save
                    disabled=move || saving.get() || status.get() == current
                >
                    {icon("save")}
                    {move || if saving.get() { "Saving..." } else { "Update status" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_close.run(()) disabled=move || saving.get()>
                    {icon("x")}
                    "Close"
                </button>
            </div>

            <ErrorBanner error=error />

            <div class="details-form">
                <dl class="details-grid">
                    <dt>"Customer"</dt>
                    <dd>{order.customer_name.clone()}</dd>
                    <dt>"Phone"</dt>
                    <dd>{order.phone.clone()}</dd>
                    <dt>"Address"</dt>
                    <dd>{order.address.clone()}</dd>
                    <dt>"Placed"</dt>
                    <dd>{placed}</dd>
                </dl>

                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Item"</th>
                            <th class="table__header-cell">"Product"</th>
                            <th class="table__header-cell">"Qty"</th>
                            <th class="table__header-cell">"Price"</th>
                            <th class="table__header-cell">"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>{lines}</tbody>
                </table>

                <div class="details-totals">
                    <div>"Items: " {items_total}</div>
                    <div class="details-totals__grand">"Total: " {total}</div>
                </div>
            </div>
        </div>
    }
}
