//! Centralized configuration (environment variables + defaults).

use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://records.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a positive integer, got {value}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Runtime settings for the server and tooling binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub max_connections: u32,
}

impl ServiceConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidAddr {
            var: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidNumber {
                    var: "DB_MAX_CONNECTIONS",
                    value: v,
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            bind_addr,
            database_url,
            max_connections,
        })
    }
}

/// Log filter directive (`RUST_LOG` syntax).
pub fn log_filter() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ServiceConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:5000".parse().unwrap());
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn reads_overrides() {
        let cfg = ServiceConfig::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("DB_MAX_CONNECTIONS", "2"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert_eq!(cfg.max_connections, 2);
    }

    #[test]
    fn rejects_bad_values() {
        let err = ServiceConfig::from_lookup(lookup_from(&[("BIND_ADDR", "nope")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));

        let err =
            ServiceConfig::from_lookup(lookup_from(&[("DB_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }
}
