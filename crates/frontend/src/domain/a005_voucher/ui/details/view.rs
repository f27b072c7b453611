use contracts::domain::a005_voucher::aggregate::VoucherDraft;
use leptos::prelude::*;

use crate::domain::a005_voucher::api::VoucherApi;
use crate::shared::components::feedback::ErrorBanner;
use crate::shared::components::form_fields::{CheckboxField, FormActions, TextField};
use crate::shared::crud::{FormViewModel, ListViewModel};

#[component]
pub fn VoucherDetails(
    vm: FormViewModel<VoucherDraft>,
    list: ListViewModel<VoucherApi>,
    /// Times used so far, shown read-only when editing
    used_count: Option<u32>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = if vm.is_edit() { "Edit voucher" } else { "New voucher" };
    let (vm_gate, vm_busy, vm_save, vm_reset) = (vm.clone(), vm.clone(), vm.clone(), vm.clone());

    view! {
        <div class="details-container">
            <div class="details-header">
                <h2>{title}</h2>
                {used_count.map(|n| view! { <span class="badge badge--neutral">{format!("Used {n} times")}</span> })}
            </div>

            <FormActions
                can_submit=Signal::derive(move || vm_gate.can_submit())
                busy=Signal::derive(move || vm_busy.is_busy())
                on_save=Callback::new(move |_| vm_save.save(list.clone(), on_close))
                on_reset=Callback::new(move |_| vm_reset.reset())
                on_cancel=on_close
            />

            <ErrorBanner error=vm.error() />

            <div class="details-form">
                <TextField
                    label="Code"
                    required=true
                    placeholder="SPRING10"
                    value=vm.text(|d| &d.code)
                    on_input=vm.setter(|d, v| d.code = v)
                />
                <div class="form__row">
                    <TextField
                        label="Discount, %"
                        kind="number"
                        required=true
                        value=vm.text(|d| &d.discount_percent)
                        on_input=vm.setter(|d, v| d.discount_percent = v)
                    />
                    <TextField
                        label="Max uses"
                        kind="number"
                        placeholder="Unlimited"
                        value=vm.text(|d| &d.max_uses)
                        on_input=vm.setter(|d, v| d.max_uses = v)
                    />
                </div>
                <TextField
                    label="Expires"
                    kind="date"
                    value=vm.text(|d| &d.expires_at)
                    on_input=vm.setter(|d, v| d.expires_at = v)
                />
                <CheckboxField
                    label="Active"
                    checked=vm.flag(|d| d.active)
                    on_change=vm.setter(|d, v| d.active = v)
                />
            </div>
        </div>
    }
}
