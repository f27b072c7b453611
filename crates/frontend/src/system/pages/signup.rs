use contracts::system::auth::{SignupRequest, MIN_PASSWORD_LEN};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api::ApiClient;
use crate::shared::config::use_config;
use crate::system::auth::api;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn SignupPage(on_login: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();
    let config = use_config();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = SignupRequest {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(e) = request.validate() {
            error_message.set(Some(e.to_string()));
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        let client = ApiClient::new(config.api_base.clone());
        spawn_local(async move {
            match api::signup(&client, &request).await {
                Ok(session) => do_login(set_auth_state, session),
                Err(e) => error_message.set(Some(format!("Signup failed: {}", e))),
            }
            is_loading.set(false);
        });
    };

    let text_input = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Jewelry Admin"</h1>
                <h2>"Create an admin account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    {text_input("name", "Name", "text", name)}
                    {text_input("email", "Email", "email", email)}
                    {text_input("password", "Password", "password", password)}
                    <small class="form-hint">
                        {format!("At least {MIN_PASSWORD_LEN} characters")}
                    </small>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Creating..." } else { "Sign up" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "Already registered? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            on_login.run(());
                        }>"Sign in"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
