//! Service settings from the process environment (and `.env` when present).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/customers";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl ServiceConfig {
    /// Reads `DATABASE_URL`, `BIND_ADDRESS`, `DATABASE_MAX_CONNECTIONS` and
    /// `DATABASE_ACQUIRE_TIMEOUT_SECS`, falling back to defaults for unset keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let bind = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into());
        let bind_address = bind.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            key: "BIND_ADDRESS",
            message: e.to_string(),
        })?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => match v.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DATABASE_MAX_CONNECTIONS",
                        message: format!("expected a positive integer, got '{}'", v),
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let acquire_secs = match lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Some(v) => v.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: "DATABASE_ACQUIRE_TIMEOUT_SECS",
                message: e.to_string(),
            })?,
            None => DEFAULT_ACQUIRE_TIMEOUT_SECS,
        };

        Ok(ServiceConfig {
            database_url,
            bind_address,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ServiceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.bind_address, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(cfg.max_connections, 5);
        assert_eq!(cfg.acquire_timeout, Duration::from_secs(5));
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = ServiceConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db:5432/crm"),
            ("BIND_ADDRESS", "127.0.0.1:9000"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("DATABASE_ACQUIRE_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(cfg.database_url, "postgres://db:5432/crm");
        assert_eq!(cfg.bind_address.port(), 9000);
        assert_eq!(cfg.max_connections, 12);
        assert_eq!(cfg.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let err = ServiceConfig::from_lookup(lookup(&[("DATABASE_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_MAX_CONNECTIONS", .. }));
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        let err = ServiceConfig::from_lookup(lookup(&[("BIND_ADDRESS", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDRESS", .. }));
    }
}
