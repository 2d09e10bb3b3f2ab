use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

use crate::shared::config::config;

/// Where the bearer token lives between page loads.
///
/// The service client receives one of these at construction instead of
/// reaching for the cookie jar itself.
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear(&self);
}

/// Token kept in a single browser cookie
#[derive(Debug, Clone)]
pub struct CookieSession {
    name: String,
}

impl CookieSession {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Cookie named by `auth.token_cookie`
    pub fn from_config() -> Self {
        Self::new(config().auth.token_cookie.clone())
    }
}

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

impl SessionStore for CookieSession {
    fn token(&self) -> Option<String> {
        let cookies = html_document()?.cookie().ok()?;
        cookie_value(&cookies, &self.name)
    }

    fn set_token(&self, token: &str) {
        if let Some(doc) = html_document() {
            let cookie = format!(
                "{}={}; path=/; SameSite=Lax",
                self.name,
                urlencoding::encode(token)
            );
            if doc.set_cookie(&cookie).is_err() {
                log::warn!("failed to store session cookie '{}'", self.name);
            }
        }
    }

    fn clear(&self) {
        if let Some(doc) = html_document() {
            let cookie = format!(
                "{}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT; max-age=0",
                self.name
            );
            let _ = doc.set_cookie(&cookie);
        }
    }
}

/// Extract a cookie from a `document.cookie` string.
/// Empty values count as absent.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|value| !value.is_empty())
}

/// In-memory token slot; clones share the slot
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    token: Rc<RefCell<Option<String>>>,
}

impl MemorySession {
    pub fn with_token(token: &str) -> Self {
        let session = Self::default();
        session.set_token(token);
        session
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}
