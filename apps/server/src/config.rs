//! Service configuration.
//!
//! Loaded from an optional `config/default` file, then overridden from the
//! environment with the `CONCORD` prefix and `__` separator, e.g.
//! `CONCORD__SERVER__PORT=8080` or
//! `CONCORD__UPSTREAM__CONCEPT_SEARCH_URL=http://concept-search-api:8080`.

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use url::Url;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub system_code: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the concept search API.
    pub concept_search_url: String,
    /// Base URL of the public concordances API.
    pub public_concordances_url: String,
    /// Timeout for each outbound upstream call, in seconds.
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            system_code: "internal-concordances".to_string(),
            name: "internal-concordances".to_string(),
            description: "UPP Internal Concordances".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            concept_search_url: "http://concept-search-api:8080".to_string(),
            public_concordances_url: "http://public-concordances-api:8080".to_string(),
            timeout_seconds: 8,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("CONCORD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Reject unusable configuration before any listener or client is built.
    pub fn validate(&self) -> Result<(), String> {
        Url::parse(&self.upstream.concept_search_url)
            .map_err(|e| format!("invalid concept search URL: {e}"))?;
        Url::parse(&self.upstream.public_concordances_url)
            .map_err(|e| format!("invalid public concordances URL: {e}"))?;

        if self.upstream.timeout_seconds == 0 {
            return Err("upstream timeout must be greater than zero".to_string());
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid listen host {}: {e}", self.server.host))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}
