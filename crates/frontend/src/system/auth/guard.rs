use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;
use crate::shared::form::command::LOGIN_ROUTE;

/// Renders children only with a session; otherwise sends the user to the
/// login route.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! { <Redirect path=LOGIN_ROUTE /> }
        >
            {children()}
        </Show>
    }
}
