use contracts::domain::a003_product::aggregate::ProductDraft;
use leptos::prelude::*;
use std::sync::Arc;

use crate::domain::a003_product::api::ProductApi;
use crate::shared::components::feedback::ErrorBanner;
use crate::shared::components::form_fields::{FormActions, TextAreaField, TextField};
use crate::shared::crud::{DraftImages, FormViewModel, ListViewModel};
use crate::shared::upload::{RestImageUploader, UploadCoordinator};

#[component]
pub fn ProductDetails(
    vm: FormViewModel<ProductDraft>,
    list: ListViewModel<ProductApi>,
    uploads: Arc<UploadCoordinator<RestImageUploader>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = if vm.is_edit() { "Edit product" } else { "New product" };
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
                <div class="form__row">
                    <TextField
                        label="SKU"
                        required=true
                        placeholder="RG-001"
                        value=vm.text(|d| &d.sku)
                        on_input=vm.setter(|d, v| d.sku = v)
                    />
                    <TextField
                        label="Name"
                        required=true
                        value=vm.text(|d| &d.name)
                        on_input=vm.setter(|d, v| d.name = v)
                    />
                </div>
                <div class="form__row">
                    <TextField
                        label="Price"
                        kind="number"
                        required=true
                        value=vm.text(|d| &d.price)
                        on_input=vm.setter(|d, v| d.price = v)
                    />
                    <TextField
                        label="Stock"
                        kind="number"
                        required=true
                        value=vm.text(|d| &d.stock)
                        on_input=vm.setter(|d, v| d.stock = v)
                    />
                </div>
                <div class="form__row">
                    <TextField
                        label="Category ID"
                        value=vm.text(|d| &d.category_id)
                        on_input=vm.setter(|d, v| d.category_id = v)
                    />
                    <TextField
                        label="Material"
                        placeholder="18k white gold"
                        value=vm.text(|d| &d.material)
                        on_input=vm.setter(|d, v| d.material = v)
                    />
                </div>
                <TextAreaField
                    label="Description"
                    rows=4
                    value=vm.text(|d| &d.description)
                    on_input=vm.setter(|d, v| d.description = v)
                />
                <DraftImages vm=vm.clone() uploads=uploads />
            </div>
        </div>
    }
}
