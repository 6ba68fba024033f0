//! Service configuration.
//!
//! Layered sources, later overriding earlier: `config/default.toml`,
//! `config/local.toml`, then environment variables with the `BUSCADOR__`
//! prefix (e.g. `BUSCADOR__SEARCH__API_KEY`). A `.env` file is honored for
//! local development.

use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            search: SearchConfig::default(),
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; empty means no cross-origin access.
    pub cors_origins: Vec<String>,
    /// Request body size limit in bytes.
    pub max_request_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: Vec::new(),
            max_request_body_size: 1024 * 1024,
        }
    }
}

/// Connection settings for the managed search index.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Service endpoint, e.g. `https://<service>.search.windows.net`.
    pub endpoint: String,
    pub index_name: String,
    pub api_key: String,
    pub api_version: String,
    /// Provider-side suggester used for autocomplete and suggest.
    pub suggester_name: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            index_name: "productos-index".to_string(),
            api_key: String::new(),
            api_version: "2023-11-01".to_string(),
            suggester_name: "sg".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_min_size: u32,
    pub pool_max_size: u32,
    pub pool_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            pool_min_size: 0,
            pool_max_size: 10,
            pool_timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON-formatted log lines.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "buscador=info,tower_http=info".to_string(),
            json: false,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("BUSCADOR")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Fail fast on settings the service cannot run without.
    pub fn validate(&self) -> Result<(), String> {
        if self.search.endpoint.is_empty() {
            return Err("search.endpoint is not configured".to_string());
        }
        if url::Url::parse(&self.search.endpoint).is_err() {
            return Err(format!(
                "search.endpoint is not a valid URL: {}",
                self.search.endpoint
            ));
        }
        if self.search.index_name.is_empty() {
            return Err("search.index_name is not configured".to_string());
        }
        if self.search.api_key.is_empty() {
            return Err("search.api_key is not configured".to_string());
        }
        if self.search.suggester_name.is_empty() {
            return Err("search.suggester_name is not configured".to_string());
        }
        if self.database.url.is_empty() {
            return Err("database.url is not configured".to_string());
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server.host/server.port: {e}"))
    }
}
