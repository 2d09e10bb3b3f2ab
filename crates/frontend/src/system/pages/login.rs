use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::service::app_client;
use crate::shared::toast::use_toasts;
use crate::system::auth::{api, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let auth = use_auth();
    let toasts = use_toasts();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        set_is_loading.set(true);

        spawn_local(async move {
            match api::login(&app_client(), email_val, password_val).await {
                Ok(response) => {
                    log::info!("signed in");
                    // Switches the root route over to the dashboard
                    auth.sign_in(&response.token);
                }
                Err(e) => toasts.error(e.user_message()),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h1>"Catalog Admin"</h1>
                    <h2>"Masuk"</h2>

                    <form on:submit=on_submit>
                        <div class="form__group">
                            <label class="form__label" for="email">"Email"</label>
                            <input
                                class="form__input"
                                type="email"
                                id="email"
                                name="email"
                                autocomplete="username"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="password">"Password"</label>
                            <input
                                class="form__input"
                                type="password"
                                id="password"
                                name="password"
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Loading..." } else { "Login" }}
                        </button>
                    </form>
                </div>
            </div>
        </PageFrame>
    }
}
