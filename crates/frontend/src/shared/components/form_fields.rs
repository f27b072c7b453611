//! Labelled inputs of the create/edit forms.
//!
//! Values stay text while editing; drafts parse them on submit.

use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// `text` unless given (`number`, `date`, `url`, ...)
    #[prop(optional)]
    kind: Option<&'static str>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                class="form__input"
                type=kind.unwrap_or("text")
                placeholder=placeholder
                prop:value=move || value.get()
                prop:disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <textarea
                class="form__textarea"
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group checkbox-group">
            <label class="form__checkbox-wrapper">
                <input
                    type="checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_change.run(event_target_checked(&ev))
                />
                <span class="form__checkbox-label">{label}</span>
            </label>
        </div>
    }
}

/// Save / reset / cancel row at the top of a form
///
/// Save is disabled while the submission gate is closed; reset and cancel
/// while uploads or the save request are still running.
#[component]
pub fn FormActions(
    #[prop(into)] can_submit: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    on_save: Callback<()>,
    on_reset: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-actions-top details-actions">
            <button
                class="button button--primary"
                on:click=move |_| on_save.run(())
                disabled=move || !can_submit.get()
            >
                {icon("save")}
                {move || if busy.get() && !can_submit.get() { "Please wait..." } else { "Save" }}
            </button>
            <button
                class="button button--secondary"
                on:click=move |_| on_reset.run(())
                disabled=move || busy.get()
            >
                {icon("refresh")}
                "Reset"
            </button>
            <button
                class="button button--ghost"
                on:click=move |_| on_cancel.run(())
                disabled=move || busy.get()
            >
                {icon("x")}
                "Cancel"
            </button>
        </div>
    }
}
