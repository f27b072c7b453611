use contracts::domain::a006_discount::aggregate::DiscountDraft;
use leptos::prelude::*;

use crate::domain::a006_discount::api::DiscountApi;
use crate::shared::components::feedback::ErrorBanner;
use crate::shared::components::form_fields::{FormActions, TextField};
use crate::shared::crud::{FormViewModel, ListViewModel};

#[component]
pub fn DiscountDetails(
    vm: FormViewModel<DiscountDraft>,
    list: ListViewModel<DiscountApi>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = if vm.is_edit() { "Edit discount" } else { "New discount" };
    let (vm_gate, vm_busy, vm_save, vm_reset) = (vm.clone(), vm.clone(), vm.clone(), vm.clone());

    view! {
        <div class="details-container">
            <div class="details-header">
                <h2>{title}</h2>
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
                    label="Name"
                    required=true
                    value=vm.text(|d| &d.name)
                    on_input=vm.setter(|d, v| d.name = v)
                />
                <TextField
                    label="Percent"
                    kind="number"
                    required=true
                    value=vm.text(|d| &d.percent)
                    on_input=vm.setter(|d, v| d.percent = v)
                />
                <div class="form__row">
                    <TextField
                        label="Starts"
                        kind="date"
                        required=true
                        value=vm.text(|d| &d.start_date)
                        on_input=vm.setter(|d, v| d.start_date = v)
                    />
                    <TextField
                        label="Ends"
                        kind="date"
                        required=true
                        value=vm.text(|d| &d.end_date)
                        on_input=vm.setter(|d, v| d.end_date = v)
                    />
                </div>
                <TextField
                    label="Products"
                    placeholder="Comma separated product ids, empty for all"
                    value=vm.text(|d| &d.product_ids)
                    on_input=vm.setter(|d, v| d.product_ids = v)
                />
            </div>
        </div>
    }
}
