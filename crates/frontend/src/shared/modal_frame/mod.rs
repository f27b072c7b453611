use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus positioned surface; the content renders its own header and actions
#[component]
pub fn ModalFrame(
    /// Overlay click (or the host) asks to close
    on_close: Callback<()>,
    #[prop(optional)] close_on_overlay: Option<bool>,
    #[prop(optional)] z_index: Option<i32>,
    /// Extra class for `div.modal`
    #[prop(optional)]
    modal_class: Option<String>,
    /// Extra style for `div.modal`
    #[prop(optional)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let z_index = z_index.unwrap_or(1000);
    let pressed_on_overlay = RwSignal::new(false);

    let on_overlay = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    };

    // Press and release must both land on the overlay, so a text selection
    // dragged out of the dialog does not close it.
    let handle_mouse_down = move |ev: ev::MouseEvent| {
        pressed_on_overlay.set(on_overlay(&ev));
    };

    let handle_click = move |ev: ev::MouseEvent| {
        let should_close = close_on_overlay && pressed_on_overlay.get() && on_overlay(&ev);
        pressed_on_overlay.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = match modal_class.filter(|c| !c.is_empty()) {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };
    let surface_style = match modal_style.filter(|s| !s.is_empty()) {
        Some(style) => format!("position: relative; {style}"),
        None => "position: relative;".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_mouse_down
            on:click=handle_click
        >
            <div class=surface_class style=surface_style on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
