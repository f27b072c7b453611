use contracts::domain::a004_banner::aggregate::BannerDraft;
use leptos::prelude::*;

use crate::domain::a004_banner::api::BannerApi;
use crate::shared::components::feedback::ErrorBanner;
use crate::shared::components::form_fields::{CheckboxField, FormActions, TextField};
use crate::shared::crud::{FormViewModel, ListViewModel};

#[component]
pub fn BannerDetails(
    vm: FormViewModel<BannerDraft>,
    list: ListViewModel<BannerApi>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = if vm.is_edit() { "Edit banner" } else { "New banner" };
    let (vm_gate, vm_busy, vm_save, vm_reset) = (vm.clone(), vm.clone(), vm.clone(), vm.clone());
    let image_url = vm.text(|d| &d.image_url);

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
                    label="Title"
                    required=true
                    value=vm.text(|d| &d.title)
                    on_input=vm.setter(|d, v| d.title = v)
                />
                <TextField
                    label="Image URL"
                    kind="url"
                    required=true
                    placeholder="https://"
                    value=image_url
                    on_input=vm.setter(|d, v| d.image_url = v)
                />
                {move || {
                    let url = image_url.get();
                    (!url.trim().is_empty())
                        .then(|| view! { <img class="banner-preview" src=url alt="Preview" /> })
                }}
                <TextField
                    label="Link"
                    kind="url"
                    placeholder="Optional target page"
                    value=vm.text(|d| &d.link_url)
                    on_input=vm.setter(|d, v| d.link_url = v)
                />
                <TextField
                    label="Position"
                    kind="number"
                    value=vm.text(|d| &d.position)
                    on_input=vm.setter(|d, v| d.position = v)
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
