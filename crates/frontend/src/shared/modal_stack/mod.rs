//! Stack of modal dialogs rendered at the application root.
//!
//! Forms are opened as modals on top of their list screen. Escape and
//! overlay clicks close only the topmost modal, and a modal may veto closing
//! (for example while its images are still uploading).

use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;
type CloseGuard = Arc<dyn Fn() -> bool + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    frame: ModalFrameOptions,
    can_close: Option<CloseGuard>,
}

/// Size/class overrides of the modal surface
#[derive(Clone, Debug, Default)]
pub struct ModalFrameOptions {
    pub style: Option<String>,
    pub class: Option<String>,
}

impl ModalFrameOptions {
    pub fn width(px: u32) -> Self {
        Self {
            style: Some(format!(
                "max-width: min({px}px, 95vw); width: min({px}px, 95vw);"
            )),
            class: None,
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }
}

/// Lets the modal content close its own modal
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Runs `f` on the next tick, after the DOM event that triggered it is done
    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    pub fn len(&self) -> usize {
        self.stack.with(|s| s.len())
    }

    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_entry(ModalFrameOptions::default(), None, builder)
    }

    pub fn push_with_frame<F>(&self, frame: ModalFrameOptions, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_entry(frame, None, builder)
    }

    /// While `can_close` returns false, Escape and overlay clicks are ignored
    pub fn push_with_guard<F, G>(&self, frame: ModalFrameOptions, can_close: G, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
        G: Fn() -> bool + Send + Sync + 'static,
    {
        self.push_entry(frame, Some(Arc::new(can_close)), builder)
    }

    fn push_entry<F>(
        &self,
        frame: ModalFrameOptions,
        can_close: Option<CloseGuard>,
        builder: F,
    ) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder: Arc::new(builder),
                frame,
                can_close,
            })
        });

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| {
            svc.stack.update(|s| {
                s.pop();
            })
        });
    }

    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }

    fn top_can_close(&self) -> bool {
        self.stack
            .with_untracked(|s| s.last().and_then(|e| e.can_close.clone()))
            .map(|guard| guard())
            .unwrap_or(true)
    }
}

/// Renders the modal stack. Mounted once, at the application root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    Effect::new(move |_| {
        let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key_event.key() == "Escape" && svc.is_open() && svc.top_can_close() {
                svc.pop_deferred();
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
            // Lives as long as the app
            on_keydown.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()}
                key={|(_, entry)| entry.id}
                children=move |(idx, entry)| {
                    let z_index = 1000 + idx as i32;
                    let on_close = {
                        let id = entry.id;
                        let can_close = entry.can_close.clone();
                        Callback::new(move |_| {
                            if can_close.as_ref().map(|f| f()).unwrap_or(true) {
                                svc.close_deferred(id);
                            }
                        })
                    };
                    let content = (entry.builder)(ModalHandle { id: entry.id, svc });

                    view! {
                        <ModalFrame
                            z_index=z_index
                            on_close=on_close
                            modal_style=entry.frame.style.clone().unwrap_or_default()
                            modal_class=entry.frame.class.clone().unwrap_or_default()
                        >
                            {content}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
