use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabHeader(tab: TabData) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let key = tab.key.clone();
    let key_for_active = key.clone();
    let is_active = Memo::new(move |_| tabs_store.active.get().as_deref() == Some(key_for_active.as_str()));

    let key_for_click = key.clone();
    let on_click = move |_| tabs_store.activate_tab(&key_for_click);

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key);
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{tab.title}</span>
            <button class="tab-close" title="Close" on:click=on_close>"×"</button>
        </div>
    }
}

/// Headers of the open tabs
#[component]
pub fn TabStrip() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="tabs__strip">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=|tab: TabData| view! { <TabHeader tab=tab /> }
            />
        </div>
    }
}
