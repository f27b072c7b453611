use contracts::domain::a007_blog::aggregate::BlogPostDraft;
use leptos::prelude::*;

use crate::domain::a007_blog::api::BlogApi;
use crate::shared::components::feedback::ErrorBanner;
use crate::shared::components::form_fields::{CheckboxField, FormActions, TextAreaField, TextField};
use crate::shared::crud::{FormViewModel, ListViewModel};

#[component]
pub fn BlogPostDetails(
    vm: FormViewModel<BlogPostDraft>,
    list: ListViewModel<BlogApi>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = if vm.is_edit() { "Edit post" } else { "New post" };
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
                    label="Title"
                    required=true
                    value=vm.text(|d| &d.title)
                    on_input=vm.setter(|d, v| d.title = v)
                />
                <div class="form__row">
                    <TextField
                        label="Author"
                        value=vm.text(|d| &d.author)
                        on_input=vm.setter(|d, v| d.author = v)
                    />
                    <TextField
                        label="Thumbnail URL"
                        kind="url"
                        placeholder="https://"
                        value=vm.text(|d| &d.thumbnail_url)
                        on_input=vm.setter(|d, v| d.thumbnail_url = v)
                    />
                </div>
                <TextAreaField
                    label="Content"
                    rows=12
                    value=vm.text(|d| &d.content)
                    on_input=vm.setter(|d, v| d.content = v)
                />
                <CheckboxField
                    label="Published"
                    checked=vm.flag(|d| d.published)
                    on_change=vm.setter(|d, v| d.published = v)
                />
            </div>
        </div>
    }
}
