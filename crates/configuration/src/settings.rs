use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

/// Where the HTTP listener binds and what it serves besides the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Directory served at `/` for anything the API routes don't match.
    pub static_dir: PathBuf,
}

/// The SQL dialect spoken by the storage backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Postgres,
    Sqlite,
}

/// Contains parameters for the database connection pool.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub dialect: Dialect,
    /// The connection string. Usually supplied through the `DSN` variable.
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub filter: String,
    /// When set, logs are also written to a daily-rotated file in this directory.
    pub directory: Option<PathBuf>,
}

// --- Default Implementations ---
// These allow any section to be omitted from config.toml.

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8989,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            dialect: Dialect::Postgres,
            url: String::new(),
            max_connections: 10,
            acquire_timeout_secs: 5,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            directory: None,
        }
    }
}

impl ServerSettings {
    /// Parses `host:port` into a socket address.
    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::ValidationError(format!("invalid server address: {}", e)))
    }
}

impl DatabaseSettings {
    /// Settings for a private in-memory SQLite database.
    pub fn sqlite_in_memory() -> Self {
        Self {
            dialect: Dialect::Sqlite,
            url: "sqlite::memory:".to_string(),
            // Every connection to `sqlite::memory:` opens its own database.
            max_connections: 1,
            ..Self::default()
        }
    }
}

impl Settings {
    /// Rejects settings the service cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "database url is empty; set DSN or database.url".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        self.server.addr()?;
        Ok(())
    }
}
