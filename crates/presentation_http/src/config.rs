//! Application configuration
//!
//! Defaults, an optional `config.toml`, and `WEATHERVANE_*` environment
//! overrides, in that order of precedence (later wins). Sections are
//! separated with a double underscore so snake_case keys survive intact,
//! e.g. `WEATHERVANE_REFRESH__INTERVAL_SECS=120`.

use integration_meteo::MeteoConfig;
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Graceful shutdown timeout in seconds
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            shutdown_timeout_secs: Some(30),
        }
    }
}

/// Forecast refresh task configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Seconds between refresh passes over the registry (default: 900)
    #[serde(default = "default_refresh_interval")]
    pub interval_secs: u64,
}

const fn default_refresh_interval() -> u64 {
    15 * 60
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_refresh_interval(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Open-Meteo client configuration
    #[serde(default)]
    pub meteo: MeteoConfig,

    /// Refresh task configuration
    #[serde(default)]
    pub refresh: RefreshConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config.toml`, and
    /// `WEATHERVANE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when a source fails to parse or deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with_env(Self::env_source())
    }

    /// Environment source for overrides (e.g., `WEATHERVANE_SERVER__PORT`)
    ///
    /// The section separator is `__` so snake_case field names like
    /// `interval_secs` are not split into nested keys.
    fn env_source() -> config::Environment {
        config::Environment::with_prefix("WEATHERVANE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(env: config::Environment) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("meteo.base_url", "https://api.open-meteo.com/v1")?
            .set_default("refresh.interval_secs", 900)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            .add_source(env);

        let config = builder.build()?;
        config.try_deserialize()
    }
}
