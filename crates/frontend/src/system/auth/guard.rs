use leptos::prelude::*;

use super::context::use_auth;

/// Renders `children` only for a signed-in admin, `fallback` otherwise
#[component]
pub fn RequireAuth(
    #[prop(optional, into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.access_token.is_some())
            fallback=fallback
        >
            {children()}
        </Show>
    }
}
