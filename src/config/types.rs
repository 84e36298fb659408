// Configuration type definitions

use serde::Deserialize;

use crate::format::OutputFormat;

/// Default Random User Generator endpoint
pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api/";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_nationality() -> String {
    "us".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_users() -> u32 {
    100
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Room for a full 5000-user generator payload
pub const DEFAULT_MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Upstream user generator section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value of the `nat` query parameter
    #[serde(default = "default_nationality")]
    pub nationality: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Users requested when the caller does not say
    #[serde(default = "default_users")]
    pub default_users: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: default_base_url(),
            nationality: default_nationality(),
            timeout_secs: default_timeout_secs(),
            default_users: default_users(),
        }
    }
}

/// HTTP service section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Largest accepted `PUT` body
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: default_bind_address(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// Report output section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Logging section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// env_logger filter; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
