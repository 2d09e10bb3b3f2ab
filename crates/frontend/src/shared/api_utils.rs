//! API utilities for frontend-backend communication
//!
//! Resolves the base URL every service call is built on.

use crate::shared::config::config;

/// Get the base URL for API requests
///
/// Uses `api.base_url` when configured; otherwise derives it from the
/// current window location, the configured port and path prefix.
///
/// # Returns
/// - API base URL like "http://localhost:8000/api"
/// - The configured prefix alone if window is not available
pub fn api_base() -> String {
    let api = &config().api;
    let (protocol, hostname) = match web_sys::window() {
        Some(w) => {
            let location = w.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        }
        None => (String::new(), String::new()),
    };
    resolve_api_base(&api.base_url, &protocol, &hostname, api.port, &api.prefix)
}

/// Pure part of [`api_base`]
pub fn resolve_api_base(
    configured: &str,
    protocol: &str,
    hostname: &str,
    port: u16,
    prefix: &str,
) -> String {
    let configured = configured.trim();
    if !configured.is_empty() {
        return configured.trim_end_matches('/').to_string();
    }
    let prefix = prefix.trim_end_matches('/');
    if hostname.is_empty() {
        return prefix.to_string();
    }
    format!("{}//{}:{}{}", protocol, hostname, port, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_wins() {
        assert_eq!(
            resolve_api_base("https://api.example.com/v1/", "http:", "localhost", 8000, "/api"),
            "https://api.example.com/v1"
        );
    }

    #[test]
    fn test_derived_from_location() {
        assert_eq!(
            resolve_api_base("", "https:", "admin.local", 8000, "/api"),
            "https://admin.local:8000/api"
        );
    }

    #[test]
    fn test_no_window() {
        assert_eq!(resolve_api_base("", "", "", 8000, "/api/"), "/api");
    }
}
