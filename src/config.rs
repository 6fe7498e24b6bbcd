//! # Configuration
//!
//! Layered process configuration built with the `config` crate.
//!
//! Sources, later ones win:
//!
//! 1. built-in defaults
//! 2. `EK_PROXY__<SECTION>__<KEY>` environment variables
//!    (e.g. `EK_PROXY__UPSTREAM__PAGE_SIZE=500`)
//! 3. the deployment variables `WECLAPP_BASE_URL`, `WECLAPP_API_KEY` and `PORT`
//!
//! A `.env` file is read by the binary through `dotenvy` before loading.
//!
//! `upstream.base_url` and `upstream.api_token` are required; loading fails
//! with [`ConfigError::Missing`] naming the variable to set.
//!
//! # Examples
//!
//! ```
//! use article_ek_proxy::config::AppConfig;
//!
//! let builder = config::Config::builder()
//!     .set_override("upstream.base_url", "https://acme.weclapp.com/webapp/api/v1/").unwrap()
//!     .set_override("upstream.api_token", "secret").unwrap();
//! let config = AppConfig::from_builder(builder).unwrap();
//!
//! assert_eq!(config.upstream.base_url, "https://acme.weclapp.com/webapp/api/v1");
//! assert_eq!(config.server.port, 3000);
//! ```

use crate::application::services::article_enrichment::EnrichmentConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment};
use serde::Deserialize;
use std::net::SocketAddr;
use thiserror::Error;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;
/// Default upstream request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Largest page the ERP serves in one call.
pub const MAX_PAGE_SIZE: u32 = 1000;
/// Prefix of the structured environment variables.
pub const ENV_PREFIX: &str = "EK_PROXY";

/// Error raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting is not set.
    #[error("missing required setting `{key}` (set {env})")]
    Missing {
        /// Setting key.
        key: &'static str,
        /// Environment variable that provides it.
        env: &'static str,
    },

    /// A setting has an unusable value.
    #[error("invalid setting `{key}`: {message}")]
    Invalid {
        /// Setting key.
        key: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// The sources could not be read or deserialized.
    #[error("configuration error: {0}")]
    Source(#[from] config::ConfigError),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if host and port do not form an address.
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Invalid {
                key: "server.host",
                message: format!("{}:{} is not a socket address: {}", self.host, self.port, e),
            })
    }
}

/// Validated upstream ERP settings.
#[derive(Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Provider name expected in the URL path.
    pub provider: String,
    /// API base URL without trailing slash.
    pub base_url: String,
    /// Static API token sent as `AuthenticationToken`.
    pub api_token: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Page size of list calls (1..=1000).
    pub page_size: u32,
    /// Optional field projection for the article list (`properties=`).
    pub article_properties: Option<String>,
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .field("page_size", &self.page_size)
            .field("article_properties", &self.article_properties)
            .finish()
    }
}

/// Complete, validated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Upstream ERP.
    pub upstream: UpstreamConfig,
    /// Enrichment behavior.
    pub enrichment: EnrichmentConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    server: ServerConfig,
    upstream: RawUpstream,
    enrichment: EnrichmentConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawUpstream {
    provider: String,
    base_url: Option<String>,
    api_token: Option<String>,
    timeout_ms: u64,
    page_size: u32,
    article_properties: Option<String>,
}

impl Default for RawUpstream {
    fn default() -> Self {
        Self {
            provider: "weclapp".to_string(),
            base_url: None,
            api_token: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            page_size: MAX_PAGE_SIZE,
            article_properties: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if base URL or token are not set and
    /// `ConfigError::Invalid` / `ConfigError::Source` for malformed values.
    pub fn load() -> ConfigResult<Self> {
        let builder = Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("enrichment.product_groups")
                    .try_parsing(true),
            )
            .set_override_option("upstream.base_url", std::env::var("WECLAPP_BASE_URL").ok())?
            .set_override_option("upstream.api_token", std::env::var("WECLAPP_API_KEY").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?;

        Self::from_builder(builder)
    }

    /// Builds and validates configuration from an arbitrary builder.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::load`].
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> ConfigResult<Self> {
        let raw: RawConfig = builder.build()?.try_deserialize()?;
        raw.validate()
    }
}

impl RawConfig {
    fn validate(self) -> ConfigResult<AppConfig> {
        let base_url = required(self.upstream.base_url, "upstream.base_url", "WECLAPP_BASE_URL")?;
        let api_token = required(self.upstream.api_token, "upstream.api_token", "WECLAPP_API_KEY")?;

        let base_url = base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| ConfigError::Invalid {
            key: "upstream.base_url",
            message: format!("{} is not a URL: {}", base_url, e),
        })?;

        if !(1..=MAX_PAGE_SIZE).contains(&self.upstream.page_size) {
            return Err(ConfigError::Invalid {
                key: "upstream.page_size",
                message: format!(
                    "{} is outside 1..={}",
                    self.upstream.page_size, MAX_PAGE_SIZE
                ),
            });
        }
        if self.upstream.provider.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "upstream.provider",
                message: "must not be empty".to_string(),
            });
        }
        if self.enrichment.concurrency == 0 {
            return Err(ConfigError::Invalid {
                key: "enrichment.concurrency",
                message: "must be at least 1".to_string(),
            });
        }

        Ok(AppConfig {
            server: self.server,
            upstream: UpstreamConfig {
                provider: self.upstream.provider,
                base_url,
                api_token,
                timeout_ms: self.upstream.timeout_ms,
                page_size: self.upstream.page_size,
                article_properties: self
                    .upstream
                    .article_properties
                    .filter(|p| !p.trim().is_empty()),
            },
            enrichment: self.enrichment,
        })
    }
}

fn required(value: Option<String>, key: &'static str, env: &'static str) -> ConfigResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing { key, env })
}
