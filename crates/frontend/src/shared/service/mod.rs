//! Generic REST client for the catalog collections.

pub mod client;
pub mod error;
pub mod resource;
pub mod transport;

#[cfg(test)]
pub mod testing;

pub use client::{mutation_message, Payload, ServiceClient};
pub use error::{ServiceError, ServiceResult};
pub use resource::Resource;
pub use transport::{GlooTransport, HttpTransport, Method};

use crate::shared::api_utils::api_base;
use crate::system::auth::storage::CookieSession;

/// Client used by the pages: browser fetch, cookie-held token
pub type AppClient = ServiceClient<GlooTransport, CookieSession>;

pub fn app_client() -> AppClient {
    ServiceClient::new(GlooTransport, CookieSession::from_config(), api_base())
}
