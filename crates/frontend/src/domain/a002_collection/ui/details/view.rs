use contracts::domain::a002_collection::aggregate::CollectionDraft;
use leptos::prelude::*;
use std::sync::Arc;

use crate::domain::a002_collection::api::CollectionApi;
use crate::shared::components::feedback::ErrorBanner;
use crate::shared::components::form_fields::{FormActions, TextAreaField, TextField};
use crate::shared::crud::{DraftImages, FormViewModel, ListViewModel};
use crate::shared::upload::{ImageList, RestImageUploader, UploadCoordinator};

#[component]
pub fn CollectionDetails(
    vm: FormViewModel<CollectionDraft>,
    list: ListViewModel<CollectionApi>,
    uploads: Arc<UploadCoordinator<RestImageUploader>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = if vm.is_edit() { "Edit collection" } else { "New collection" };
    let (vm_gate, vm_busy, vm_save, vm_reset) = (vm.clone(), vm.clone(), vm.clone(), vm.clone());
    let (vm_existing, vm_drop) = (vm.clone(), vm.clone());
    let has_existing = vm.is_edit();

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
                    label="Collection ID"
                    required=true
                    placeholder="SPRING-2026"
                    value=vm.text(|d| &d.collection_id)
                    on_input=vm.setter(|d, v| d.collection_id = v)
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
                    label="Products"
                    placeholder="Comma separated product ids"
                    value=vm.text(|d| &d.products)
                    on_input=vm.setter(|d, v| d.products = v)
                />
                <Show when=move || has_existing>
                    <div class="form__group">
                        <ImageList
                            title="Current images"
                            urls=Signal::derive({
                                let vm = vm_existing.clone();
                                move || vm.field(|d| d.existing_image_urls.clone())
                            })
                            on_remove=Callback::new({
                                let vm = vm_drop.clone();
                                move |i| vm.edit(|d| {
                                    d.remove_existing_image(i);
                                })
                            })
                        />
                    </div>
                </Show>
                <DraftImages vm=vm.clone() uploads=uploads label="New images" />
            </div>
        </div>
    }
}
