use contracts::domain::a001_category::aggregate::CategoryDraft;
use leptos::prelude::*;
use std::sync::Arc;

use crate::domain::a001_category::api::CategoryApi;
use crate::shared::components::feedback::ErrorBanner;
use crate::shared::components::form_fields::{FormActions, TextAreaField, TextField};
use crate::shared::crud::{DraftImages, FormViewModel, ListViewModel};
use crate::shared::upload::{RestImageUploader, UploadCoordinator};

#[component]
pub fn CategoryDetails(
    vm: FormViewModel<CategoryDraft>,
    list: ListViewModel<CategoryApi>,
    uploads: Arc<UploadCoordinator<RestImageUploader>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = if vm.is_edit() { "Edit category" } else { "New category" };
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
                    label="Category ID"
                    required=true
                    placeholder="RINGS"
                    value=vm.text(|d| &d.category_id)
                    on_input=vm.setter(|d, v| d.category_id = v)
                />
                <TextField
                    label="Name"
                    required=true
                    value=vm.text(|d| &d.name)
                    on_input=vm.setter(|d, v| d.name = v)
                />
                <TextAreaField
                    label="Description"
                    value=vm.text(|d| &d.description)
                    on_input=vm.setter(|d, v| d.description = v)
                />
                <TextField
                    label="Subcategories"
                    placeholder="Comma separated category ids"
                    value=vm.text(|d| &d.subcategories)
                    on_input=vm.setter(|d, v| d.subcategories = v)
                />
                <DraftImages vm=vm.clone() uploads=uploads />
            </div>
        </div>
    }
}
