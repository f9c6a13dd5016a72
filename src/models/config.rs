use serde::Deserialize;
use std::path::Path;

/// Error loading the configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Cache lifetime advertised on rendered cards, in seconds
    #[serde(default = "default_cache_seconds")]
    pub cache_seconds: u32,

    /// Upstream statistics API
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Card defaults applied when a request leaves an option unset
    #[serde(default)]
    pub card: CardDefaults,
}

fn default_bind_addr() -> String {
    "0.0.0.0:9000".to_string()
}

fn default_cache_seconds() -> u32 {
    1800 // 30 minutes
}

/// Configuration for the upstream GraphQL endpoint
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UpstreamConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    "https://leetcode.cn/graphql/".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("statcard/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Server-wide card defaults
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CardDefaults {
    #[serde(default = "default_theme")]
    pub default_theme: String,

    #[serde(default = "default_locale")]
    pub default_locale: String,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for CardDefaults {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
            default_locale: default_locale(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load configuration, falling back to defaults when the file is
    /// absent or broken. `BIND_ADDR` overrides the configured address.
    pub fn load(path: Option<&Path>) -> Self {
        let mut config = match path {
            Some(path) => match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        endpoint = %config.upstream.endpoint,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to load config, using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        };

        if let Ok(addr) = std::env::var("BIND_ADDR") {
            config.bind_addr = addr;
        }

        config
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            cache_seconds: default_cache_seconds(),
            upstream: UpstreamConfig::default(),
            card: CardDefaults::default(),
        }
    }
}
