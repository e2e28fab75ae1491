// src/config.rs

use std::net::SocketAddr;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_RENTCAST_BASE_URL: &str = "https://api.rentcast.io/v1";
pub const DEFAULT_MAX_WORKERS: usize = 8;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Runtime settings, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// RentCast key. `None` routes every search to the sample listings.
    pub rentcast_api_key: Option<String>,
    pub rentcast_base_url: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rentcast_api_key: None,
            rentcast_base_url: DEFAULT_RENTCAST_BASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: DEFAULT_MAX_WORKERS,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Bad values fall back to the
    /// defaults instead of aborting startup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let rentcast_api_key = lookup("RENTCAST_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let rentcast_base_url = lookup("RENTCAST_BASE_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or(defaults.rentcast_base_url);

        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), defaults.bind_addr);

        let max_workers = parse_or("MAX_WORKERS", lookup("MAX_WORKERS"), defaults.max_workers)
            .max(1);

        let http_timeout = Duration::from_secs(parse_or(
            "HTTP_TIMEOUT_SECS",
            lookup("HTTP_TIMEOUT_SECS"),
            DEFAULT_HTTP_TIMEOUT_SECS,
        ));

        Self {
            rentcast_api_key,
            rentcast_base_url,
            bind_addr,
            max_workers,
            http_timeout,
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, fallback: T) -> T {
    match raw {
        None => fallback,
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                warn!(key, value = %raw, "ignoring unparsable setting, using default");
                fallback
            }
        },
    }
}
