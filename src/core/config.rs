//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Security and authentication configuration.
    pub security: SecurityConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for request authentication.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Bearer token required on HTTP requests.
    /// If None, authentication is disabled.
    pub bearer_token: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "math-operations".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`. The bearer token
    /// is also read from the bare `BEARER_TOKEN` variable.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Load the bearer token
        if let Ok(token) =
            std::env::var("MCP_BEARER_TOKEN").or_else(|_| std::env::var("BEARER_TOKEN"))
        {
            config.security.bearer_token = Some(token);
            info!("Bearer authentication enabled");
        } else {
            warn!(
                "MCP_BEARER_TOKEN not set - HTTP requests will not be authenticated. \
                 Set MCP_BEARER_TOKEN (or BEARER_TOKEN) to require a bearer token."
            );
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_bearer_token_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_BEARER_TOKEN", "test_token_12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.security.bearer_token.as_deref(),
            Some("test_token_12345")
        );
        unsafe {
            std::env::remove_var("MCP_BEARER_TOKEN");
        }
    }

    #[test]
    fn test_bearer_token_bare_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_BEARER_TOKEN");
            std::env::set_var("BEARER_TOKEN", "bare_token");
        }
        let config = Config::from_env();
        assert_eq!(config.security.bearer_token.as_deref(), Some("bare_token"));
        unsafe {
            std::env::remove_var("BEARER_TOKEN");
        }
    }

    #[test]
    fn test_bearer_token_absent_disables_auth() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_BEARER_TOKEN");
            std::env::remove_var("BEARER_TOKEN");
        }
        let config = Config::from_env();
        assert!(config.security.bearer_token.is_none());
    }

    #[test]
    fn test_bearer_token_redacted_in_debug() {
        let security = SecurityConfig {
            bearer_token: Some("super_secret_token".to_string()),
        };
        let debug_str = format!("{:?}", security);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }

    #[test]
    fn test_default_server_name() {
        let config = Config::default();
        assert_eq!(config.server.name, "math-operations");
    }
}
