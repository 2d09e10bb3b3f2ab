use once_cell::sync::Lazy;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute API base, e.g. `https://catalog.example.com/api`.
    /// Empty means "same host as the page, on `port`, under `prefix`".
    pub base_url: String,
    pub port: u16,
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthConfig {
    /// Name of the cookie holding the bearer token
    pub token_cookie: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub toast_timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    pub level: String,
}

impl LogConfig {
    pub fn level(&self) -> log::Level {
        log::Level::from_str(&self.level).unwrap_or(log::Level::Info)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 8000
prefix = "/api"

[auth]
token_cookie = "token"

[ui]
toast_timeout_ms = 4000

[log]
level = "debug"
"#;

/// Parse a configuration document and apply the build-time API override.
pub fn parse_config(source: &str, api_base_override: Option<&str>) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(source)?;
    if let Some(base) = api_base_override.map(str::trim).filter(|b| !b.is_empty()) {
        config.api.base_url = base.to_string();
    }
    Ok(config)
}

/// Load the embedded configuration.
///
/// `CATALOG_API_BASE`, when set while building, replaces `api.base_url`.
pub fn load_config() -> Result<Config, ConfigError> {
    parse_config(DEFAULT_CONFIG, option_env!("CATALOG_API_BASE"))
}

static CONFIG: Lazy<Config> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("{}; falling back to built-in defaults", e);
        fallback_config()
    }
});

fn fallback_config() -> Config {
    Config {
        api: ApiConfig {
            base_url: String::new(),
            port: 8000,
            prefix: "/api".to_string(),
        },
        auth: AuthConfig {
            token_cookie: "token".to_string(),
        },
        ui: UiConfig {
            toast_timeout_ms: 4000,
        },
        log: LogConfig {
            level: "info".to_string(),
        },
    }
}

/// Process-wide configuration, loaded on first access
pub fn config() -> &'static Config {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.auth.token_cookie, "token");
        assert_eq!(config.log.level(), log::Level::Debug);
    }

    #[test]
    fn test_api_base_override() {
        let config = parse_config(DEFAULT_CONFIG, Some(" https://api.example.com ")).unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com");

        let config = parse_config(DEFAULT_CONFIG, Some("")).unwrap();
        assert_eq!(config.api.base_url, "");
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let log = LogConfig {
            level: "loud".to_string(),
        };
        assert_eq!(log.level(), log::Level::Info);
    }

    #[test]
    fn test_broken_config_is_an_error() {
        assert!(parse_config("[api]\nport = \"x\"", None).is_err());
    }
}
