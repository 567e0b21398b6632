//! Shred API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                   | Default    |
//! |----------------------------|------------|
//! | `SHRED_HTTP_PORT`          | `8088`     |
//! | `SHRED_BIND_ADDR`          | `0.0.0.0`  |
//! | `SHRED_DATABASE_PATH`      | `shred.db` |
//! | `SHRED_DB_MAX_CONNECTIONS` | `5`        |
//! | `SHRED_RUN_MIGRATIONS`     | `true`     |

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use shred_db::DbConfig;

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiConfig {
    /// HTTP listen port
    pub http_port: u16,

    /// Address to bind to
    pub bind_addr: IpAddr,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Pool ceiling, at least 1
    pub db_max_connections: u32,

    /// Run embedded migrations at startup
    pub run_migrations: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            http_port: 8088,
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            database_path: PathBuf::from("shred.db"),
            db_max_connections: 5,
            run_migrations: true,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_source(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            http_port: parse_or(&lookup, "SHRED_HTTP_PORT", defaults.http_port)?,
            bind_addr: parse_or(&lookup, "SHRED_BIND_ADDR", defaults.bind_addr)?,
            database_path: lookup("SHRED_DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            db_max_connections: parse_or(
                &lookup,
                "SHRED_DB_MAX_CONNECTIONS",
                defaults.db_max_connections,
            )?,
            run_migrations: parse_or(&lookup, "SHRED_RUN_MIGRATIONS", defaults.run_migrations)?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "SHRED_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }

    /// Socket address the HTTP server listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }

    /// Pool configuration for [`shred_db::Database::new`].
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
            .max_connections(self.db_max_connections)
            .min_connections(1)
            .run_migrations(self.run_migrations)
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_source(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8088");
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("SHRED_HTTP_PORT", "9000"),
            ("SHRED_BIND_ADDR", "127.0.0.1"),
            ("SHRED_DATABASE_PATH", "/var/lib/shred/catalog.db"),
            ("SHRED_DB_MAX_CONNECTIONS", "12"),
            ("SHRED_RUN_MIGRATIONS", "false"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.database_path, PathBuf::from("/var/lib/shred/catalog.db"));

        let db = config.db_config();
        assert_eq!(db.max_connections, 12);
        assert!(!db.run_migrations);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let err = from_pairs(&[("SHRED_HTTP_PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for SHRED_HTTP_PORT");

        let err = from_pairs(&[("SHRED_DB_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(name) if name == "SHRED_DB_MAX_CONNECTIONS"));

        assert!(from_pairs(&[("SHRED_RUN_MIGRATIONS", "maybe")]).is_err());
    }
}
