use leptos::prelude::*;

/// Red banner shown while `error` holds a message
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|e| view! { <div class="error" role="alert">{e}</div> })
}

/// Green banner for confirmations ("Category deleted")
#[component]
pub fn MessageBanner(
    #[prop(into)] message: Signal<Option<String>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|m| {
            view! {
                <div class="message" role="status">
                    <span>{m}</span>
                    <button class="message__close" on:click=move |_| on_dismiss.run(())>"×"</button>
                </div>
            }
        })
    }
}
