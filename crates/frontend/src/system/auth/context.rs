use contracts::system::auth::{AdminProfile, AuthSession};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{api, storage};
use crate::shared::api::ApiClient;
use crate::shared::config::use_config;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub profile: Option<AdminProfile>,
}

impl AuthState {
    pub fn from_session(session: AuthSession) -> Self {
        Self {
            access_token: Some(session.access_token),
            profile: Some(session.admin),
        }
    }

    pub fn display_name(&self) -> String {
        self.profile
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Admin".to_string())
    }
}

/// Auth context provider component
///
/// The stored session is shown immediately; the profile is then refreshed
/// and an unauthorized answer signs the admin out.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let session = storage::browser_session();
    let initial = AuthState {
        access_token: session.access_token(),
        profile: session.profile(),
    };
    let (auth_state, set_auth_state) = signal(initial);
    let config = use_config();

    Effect::new(move |_| {
        let config = config.clone();
        spawn_local(async move {
            let Some(token) = storage::get_access_token() else {
                return;
            };
            let client = ApiClient::new(config.api_base.clone()).with_token(Some(token));
            match api::get_profile(&client).await {
                Ok(profile) => {
                    if let Err(e) = storage::browser_session().save_profile(&profile) {
                        log::warn!("{}", e);
                    }
                    set_auth_state.update(|s| s.profile = Some(profile));
                }
                Err(e) if e.is_unauthorized() => {
                    log::info!("stored session rejected, signing out");
                    storage::browser_session().clear();
                    set_auth_state.set(AuthState::default());
                }
                Err(e) => log::warn!("profile refresh failed: {}", e),
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Persists a fresh session and switches the app to the main layout
pub fn do_login(set_auth_state: WriteSignal<AuthState>, session: AuthSession) {
    if let Err(e) = storage::browser_session().save(&session) {
        log::warn!("session not persisted: {}", e);
    }
    log::info!("signed in as {}", session.admin.email);
    set_auth_state.set(AuthState::from_session(session));
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::browser_session().clear();
    set_auth_state.set(AuthState::default());
}
