use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::rc::Rc;

use super::command::UiCommand;
use crate::shared::toast::{use_toasts, ToastService};
use crate::system::auth::context::{use_auth, AuthContext};

/// Performs [`UiCommand`]s: toasts, route changes and logout.
///
/// Must be created inside the router.
#[derive(Clone)]
pub struct UiDispatcher {
    toasts: ToastService,
    auth: AuthContext,
    navigate: Rc<dyn Fn(&str)>,
}

impl UiDispatcher {
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            toasts: use_toasts(),
            auth: use_auth(),
            navigate: Rc::new(move |path: &str| navigate(path, NavigateOptions::default())),
        }
    }

    pub fn toasts(&self) -> ToastService {
        self.toasts
    }

    pub fn navigate(&self, path: &str) {
        (self.navigate)(path);
    }

    pub fn run(&self, commands: Vec<UiCommand>) {
        for command in commands {
            match command {
                UiCommand::Notify(notification) => self.toasts.show(notification),
                UiCommand::Navigate(path) => self.navigate(&path),
                UiCommand::ClearSession => {
                    log::info!("session expired, signing out");
                    self.auth.sign_out();
                }
            }
        }
    }
}
