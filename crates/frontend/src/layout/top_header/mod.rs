//! Application top bar: sidebar toggle, title and logout

use crate::layout::global_context::use_global_context;
use crate::shared::form::LOGIN_ROUTE;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();
    let navigate = use_navigate();

    let is_sidebar_visible = move || ctx.left_open.get();

    let logout = move |_| {
        log::info!("signing out");
        auth.sign_out();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Sembunyikan navigasi" } else { "Tampilkan navigasi" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Catalog Admin"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=logout title="Logout">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
