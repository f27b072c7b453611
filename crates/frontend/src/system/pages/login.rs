use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api::ApiClient;
use crate::shared::config::use_config;
use crate::system::auth::api;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage(
    /// Switches the auth gate to the signup form
    on_signup: Callback<()>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let config = use_config();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(e) = request.validate() {
            set_error_message.set(Some(e.to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let client = ApiClient::new(config.api_base.clone());
        spawn_local(async move {
            match api::login(&client, &request).await {
                Ok(session) => do_login(set_auth_state, session),
                Err(e) => set_error_message.set(Some(format!("Login failed: {}", e))),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Jewelry Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@shop.example"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "No account yet? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            on_signup.run(());
                        }>"Create one"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
