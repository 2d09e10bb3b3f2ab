//! Transient success/error notifications.
//!
//! `ToastService` lives in context; pages push [`Notification`]s into it
//! and `ToastHost` renders whatever is currently queued.

mod host;

pub use host::ToastHost;

use crate::shared::form::{Notification, NotificationKind};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    timeout_ms: u32,
}

impl ToastService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            timeout_ms,
        }
    }

    pub fn items(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn show(&self, notification: Notification) {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        log::debug!("toast #{} {:?}: {}", id, notification.kind, notification.text);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind: notification.kind,
                text: notification.text,
            })
        });

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(this.timeout_ms).await;
            this.dismiss(id);
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(Notification::success(text));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(Notification::error(text));
    }

    pub fn dismiss(&self, id: u64) {
        // The service may outlive the app root during teardown.
        let _ = self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}
