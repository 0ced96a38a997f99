use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::FrontendError;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000/search";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CACHE_CAPACITY: usize = 64;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;

/// Process-wide configuration, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub bind_addr: SocketAddr,
    /// `None` means requests to the backend never time out.
    pub backend_timeout: Option<Duration>,
    pub cache_capacity: usize,
    pub cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            backend_timeout: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config, FrontendError> {
        dotenv().ok(); // Load .env file if present
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from any variable source. Unset variables take
    /// their defaults; set but malformed ones are an error.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Config, FrontendError> {
        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| FrontendError::Config(format!("BIND_ADDR={bind_addr}: {e}")))?;

        let backend_timeout = match var("BACKEND_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(parse_number("BACKEND_TIMEOUT_SECS", &raw)?)),
            None => None,
        };

        let cache_capacity = match var("RESULTS_CACHE_CAPACITY") {
            Some(raw) => parse_number("RESULTS_CACHE_CAPACITY", &raw)? as usize,
            None => DEFAULT_CACHE_CAPACITY,
        };

        let cache_ttl = match var("RESULTS_CACHE_TTL_SECS") {
            Some(raw) => Duration::from_secs(parse_number("RESULTS_CACHE_TTL_SECS", &raw)?),
            None => Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        };

        Ok(Config {
            backend_url: var("SEARCH_BACKEND_URL")
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            bind_addr,
            backend_timeout,
            cache_capacity,
            cache_ttl,
        })
    }
}

fn parse_number(key: &str, raw: &str) -> Result<u64, FrontendError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| FrontendError::Config(format!("{key}={raw}: {e}")))
}

#[test]
fn test_parse_number() {
    assert_eq!(parse_number("X", " 42 ").unwrap(), 42);
    assert!(parse_number("X", "-1").is_err());
    assert!(parse_number("X", "ten").is_err());
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    assert!(config.backend_timeout.is_none());
    assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
}

#[cfg(test)]
fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: std::collections::HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_from_vars() {
    let config = Config::from_vars(vars(&[
        ("SEARCH_BACKEND_URL", "http://search.internal:5000/search"),
        ("BIND_ADDR", "0.0.0.0:8080"),
        ("BACKEND_TIMEOUT_SECS", "5"),
        ("RESULTS_CACHE_CAPACITY", "8"),
    ]))
    .unwrap();
    assert_eq!(config.backend_url, "http://search.internal:5000/search");
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
    assert_eq!(config.backend_timeout, Some(Duration::from_secs(5)));
    assert_eq!(config.cache_capacity, 8);
    assert_eq!(config.cache_ttl, Duration::from_secs(DEFAULT_CACHE_TTL_SECS));
}

#[test]
fn test_malformed_config_is_an_error() {
    let err = Config::from_vars(vars(&[("BIND_ADDR", "not an address")])).unwrap_err();
    assert!(matches!(err, FrontendError::Config(ref message) if message.starts_with("BIND_ADDR=")));

    assert!(Config::from_vars(vars(&[("RESULTS_CACHE_TTL_SECS", "soon")])).is_err());
}
