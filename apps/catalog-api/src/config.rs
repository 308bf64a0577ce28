//! Catalog API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults that suit local development.

use std::env;
use std::path::PathBuf;

/// Catalog API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// SQLite database file path
    pub database_path: PathBuf,

    /// Address the HTTP server binds to
    pub http_host: String,

    /// HTTP server port
    pub http_port: u16,

    /// Maximum connections in the database pool
    pub db_max_connections: u32,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "catalog.db".to_string())
                .into(),

            http_host: env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,

            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,
        };

        Ok(config)
    }

    /// The host:port string the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Environment variables are process-global and the test harness runs
    /// tests on parallel threads, so every test here takes this lock and
    /// starts from a cleared slate.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] = [
        "DATABASE_PATH",
        "HTTP_HOST",
        "HTTP_PORT",
        "DB_MAX_CONNECTIONS",
    ];

    fn with_clean_env<T>(f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for var in VARS {
            env::remove_var(var);
        }
        f()
    }

    #[test]
    fn test_defaults_when_env_is_unset() {
        with_clean_env(|| {
            let config = ApiConfig::load().unwrap();

            assert_eq!(config.database_path, PathBuf::from("catalog.db"));
            assert_eq!(config.http_host, "0.0.0.0");
            assert_eq!(config.http_port, 8080);
            assert_eq!(config.db_max_connections, 5);
            assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        });
    }

    #[test]
    fn test_env_values_override_defaults() {
        with_clean_env(|| {
            env::set_var("DATABASE_PATH", "/tmp/store.db");
            env::set_var("HTTP_HOST", "127.0.0.1");
            env::set_var("HTTP_PORT", "9090");
            env::set_var("DB_MAX_CONNECTIONS", "12");

            let config = ApiConfig::load().unwrap();

            assert_eq!(config.database_path, PathBuf::from("/tmp/store.db"));
            assert_eq!(config.bind_addr(), "127.0.0.1:9090");
            assert_eq!(config.db_max_connections, 12);
        });
    }

    #[test]
    fn test_unparsable_port_fails_load() {
        with_clean_env(|| {
            env::set_var("HTTP_PORT", "abc");

            let err = ApiConfig::load().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue(ref var) if var == "HTTP_PORT"));

            // u16 overflow fails the same way as a non-numeric value
            env::set_var("HTTP_PORT", "70000");
            assert!(ApiConfig::load().is_err());
        });
    }

    #[test]
    fn test_negative_pool_size_fails_load() {
        with_clean_env(|| {
            env::set_var("DB_MAX_CONNECTIONS", "-1");

            let err = ApiConfig::load().unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue(ref var) if var == "DB_MAX_CONNECTIONS")
            );
        });
    }
}
