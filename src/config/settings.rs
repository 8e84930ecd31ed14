//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port, shutdown)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// Repository backend selection
    pub storage: StorageSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Log output configuration
    pub telemetry: TelemetrySettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,

    /// Seconds to wait for in-flight requests after a shutdown signal
    pub shutdown_timeout_secs: u64,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL
    #[serde(default)]
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,

    /// Apply `migrations/` on startup
    pub run_migrations: bool,
}

/// Where the repositories keep their data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

/// Repository backend configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackend,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins; `*` allows any
    pub allowed_origins: Vec<String>,
}

/// Log output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    /// Emit JSON log lines instead of the human-readable format
    pub json: bool,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the postgres backend is selected without a database URL.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.shutdown_timeout_secs", 10)?
            .set_default("database.url", "")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("database.run_migrations", true)?
            .set_default("storage.backend", "postgres")?
            .set_default("cors.allowed_origins", vec!["*"])?
            .set_default("telemetry.json", false)?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("storage.backend", std::env::var("STORAGE_BACKEND").ok())?
            .build()?
            .try_deserialize()
            .and_then(Self::validate)
    }

    /// Reject combinations that cannot start.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.storage.backend == StorageBackend::Postgres && self.database.url.trim().is_empty() {
            return Err(ConfigError::Message(
                "database.url (or DATABASE_URL) is required for the postgres storage backend"
                    .into(),
            ));
        }
        Ok(self)
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// In-memory settings for tests and local runs without a database.
    pub fn in_memory() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".into(),
                port: 0,
                shutdown_timeout_secs: 1,
            },
            database: DatabaseSettings {
                url: String::new(),
                max_connections: 1,
                min_connections: 0,
                acquire_timeout: 1,
                run_migrations: false,
            },
            storage: StorageSettings {
                backend: StorageBackend::Memory,
            },
            cors: CorsSettings {
                allowed_origins: vec!["*".into()],
            },
            telemetry: TelemetrySettings { json: false },
            environment: "test".into(),
        }
    }
}

impl DatabaseSettings {
    /// Get the connection URL.
    pub fn connection_url(&self) -> &str {
        &self.url
    }
}
