use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::config;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new(config().ui.toast_timeout_ms));

    view! {
        <AuthProvider>
            <AppRoutes />
            <ToastHost />
        </AuthProvider>
    }
}
