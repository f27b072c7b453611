use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api::ApiClient;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::use_config;
use crate::system::auth::context::use_auth;
use crate::system::auth::{api, storage};

/// Profile of the signed-in admin, refreshed from the backend on demand
#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let config = use_config();
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);

    let refresh = move |_| {
        let client = ApiClient::from_session(&config);
        loading.set(true);
        spawn_local(async move {
            match api::get_profile(&client).await {
                Ok(profile) => {
                    if let Err(e) = storage::browser_session().save_profile(&profile) {
                        log::warn!("{}", e);
                    }
                    set_auth_state.update(|s| s.profile = Some(profile));
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    let row = |label: &'static str, value: String| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <div class="form-value">{value}</div>
            </div>
        }
    };

    view! {
        <div class="content">
            <PageHeader title="Profile" subtitle="Signed-in administrator">
                <button class="button button--secondary" on:click=refresh disabled=move || loading.get()>
                    {crate::shared::icons::icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <div class="details-container">
                {move || match auth_state.get().profile {
                    Some(p) => view! {
                        <div class="details-form">
                            {row("Name", p.name)}
                            {row("Email", p.email)}
                            {row("Phone", p.phone.unwrap_or_else(|| "-".to_string()))}
                            {row("Role", p.role)}
                        </div>
                    }
                    .into_any(),
                    None => view! { <p>"Profile not loaded yet"</p> }.into_any(),
                }}
            </div>
        </div>
    }
}
