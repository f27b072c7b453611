//! Top bar: sidebar toggle, brand, signed-in admin and logout

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("panel-left")}
                </button>
                {icon("gem")}
                <span class="top-header__title">"Jewelry Admin"</span>
            </div>

            <div class="top-header__actions">
                <div
                    class="top-header__user"
                    title="Profile"
                    on:click=move |_| ctx.open_tab("sys_profile", "Profile")
                >
                    {icon("user")}
                    <span>{move || auth_state.with(|s| s.display_name())}</span>
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| {
                        ctx.opened.set(vec![]);
                        do_logout(set_auth_state);
                    }
                    title="Log out"
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
