use leptos::prelude::*;

use super::storage::{CookieSession, SessionStore};

/// Reactive view of the session cookie.
///
/// The cookie stays the source of truth for the service client; this
/// signal only drives what the shell renders.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub token: RwSignal<Option<String>>,
}

impl AuthContext {
    /// Restore from the cookie
    pub fn from_cookie() -> Self {
        Self {
            token: RwSignal::new(CookieSession::from_config().token()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    pub fn sign_in(&self, token: &str) {
        CookieSession::from_config().set_token(token);
        self.token.set(Some(token.to_string()));
    }

    pub fn sign_out(&self) {
        CookieSession::from_config().clear();
        self.token.set(None);
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::from_cookie());
    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
