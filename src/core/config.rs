//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

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

    /// Authentication and identity credentials.
    pub credentials: CredentialsConfig,

    /// Outbound web fetch configuration.
    pub fetch: FetchConfig,
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

/// Authentication and identity credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Bearer token required by the HTTP transport.
    pub auth_token: Option<String>,

    /// Owner phone number returned by the validate tool,
    /// in {country_code}{number} format (e.g., 919876543210).
    pub owner_number: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[REDACTED]"))
            .field(
                "owner_number",
                &self.owner_number.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Configuration for outbound web fetches and searches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// User-agent sent on every outbound request.
    pub user_agent: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            auth_token: None,
            owner_number: None,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "LegalSahayak/1.0 (Autonomous)".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "legal-sahayak-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            fetch: FetchConfig::default(),
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
    /// Server-level variables are prefixed with `MCP_` (e.g.
    /// `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`). Credentials use the bare
    /// `AUTH_TOKEN` and `MY_NUMBER` names.
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

        if let Ok(token) = std::env::var("AUTH_TOKEN") {
            config.credentials.auth_token = Some(token);
        }

        if let Ok(number) = std::env::var("MY_NUMBER") {
            config.credentials.owner_number = Some(number);
        }

        if let Ok(user_agent) = std::env::var("MCP_FETCH_USER_AGENT") {
            config.fetch.user_agent = user_agent;
        }

        if let Ok(timeout) = std::env::var("MCP_FETCH_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.fetch.timeout_secs = secs,
                Err(_) => warn!(
                    "Invalid MCP_FETCH_TIMEOUT_SECS value '{}', keeping {}s",
                    timeout, config.fetch.timeout_secs
                ),
            }
        }

        config
    }

    /// Validate that required configuration is present.
    ///
    /// The server refuses to start without its bearer token and owner
    /// number, matching the behavior clients depend on.
    pub fn validate(&self) -> Result<()> {
        if self.credentials.auth_token.as_deref().unwrap_or("").is_empty() {
            return Err(Error::config("Please set AUTH_TOKEN in your environment"));
        }
        if self.credentials.owner_number.as_deref().unwrap_or("").is_empty() {
            return Err(Error::config("Please set MY_NUMBER in your environment"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("AUTH_TOKEN", "test_token_12345");
            std::env::set_var("MY_NUMBER", "919876543210");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.auth_token.as_deref(),
            Some("test_token_12345")
        );
        assert_eq!(
            config.credentials.owner_number.as_deref(),
            Some("919876543210")
        );
        assert!(config.validate().is_ok());
        unsafe {
            std::env::remove_var("AUTH_TOKEN");
            std::env::remove_var("MY_NUMBER");
        }
    }

    #[test]
    fn test_validate_requires_credentials() {
        let config = Config::default();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.credentials.auth_token = Some("token".to_string());
        assert!(config.validate().is_err());

        config.credentials.owner_number = Some("919876543210".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            auth_token: Some("super_secret_token".to_string()),
            owner_number: Some("919876543210".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
        assert!(!debug_str.contains("919876543210"));
    }

    #[test]
    fn test_fetch_defaults() {
        let config = Config::default();
        assert_eq!(config.fetch.timeout_secs, 30);
        assert!(config.fetch.user_agent.contains("LegalSahayak"));
    }

    #[test]
    fn test_fetch_timeout_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_FETCH_TIMEOUT_SECS", "10");
        }
        let config = Config::from_env();
        assert_eq!(config.fetch.timeout_secs, 10);
        unsafe {
            std::env::remove_var("MCP_FETCH_TIMEOUT_SECS");
        }
    }
}
