use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::cache::CacheService;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // App-wide stores. Everything below the root reaches them via context;
    // nothing in the app talks to a module-level singleton.
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());
    provide_context(ToastService::new());
    provide_context(CacheService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <ModalHost />
            <ToastHost />
        </AuthProvider>
    }
}
