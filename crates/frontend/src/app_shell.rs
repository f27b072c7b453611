//! Auth gate: login/signup for guests, the main layout for a signed-in admin.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::{tab_label_for_key, TabPage};
use crate::layout::Shell;
use crate::shared::modal_stack::ModalStackService;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::signup::SignupPage;
use leptos::prelude::*;

/// Sidebar plus tabbed content, synced with `?active=`
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    tabs_store.init_router_integration("d100_overview", tab_label_for_key);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let show_signup = RwSignal::new(false);

    let modals = use_context::<ModalStackService>();

    // Forms of a previous session must not survive a logout
    Effect::new(move |_| {
        if auth_state.with(|s| s.access_token.is_none()) {
            if let Some(modals) = modals {
                modals.clear();
            }
        }
    });

    let guest_view = move || {
        if show_signup.get() {
            view! { <SignupPage on_login=Callback::new(move |_| show_signup.set(false)) /> }.into_any()
        } else {
            view! { <LoginPage on_signup=Callback::new(move |_| show_signup.set(true)) /> }.into_any()
        }
    };

    view! {
        <RequireAuth fallback=guest_view>
            <MainLayout />
        </RequireAuth>
    }
}
