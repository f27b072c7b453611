use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_environment();
    log::info!("backend: {}", config.api_base);
    provide_context(config);

    // Tabs and sidebar state of the main layout
    provide_context(AppGlobalContext::new());

    // Create/edit forms open as modals on top of their list
    provide_context(ModalStackService::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
        <ModalHost />
    }
}
