use super::{use_toasts, Toast};
use crate::shared::form::NotificationKind;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.items()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        NotificationKind::Success => "toast toast--success",
                        NotificationKind::Error => "toast toast--error",
                    };
                    let icon_name = match toast.kind {
                        NotificationKind::Success => "check",
                        NotificationKind::Error => "alert",
                    };
                    view! {
                        <div class=class>
                            {icon(icon_name)}
                            <span class="toast__text">{toast.text}</span>
                            <button class="toast__close" title="Tutup" on:click=move |_| toasts.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
