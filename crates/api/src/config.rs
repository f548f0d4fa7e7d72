//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `API_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//! - `HELIUS_RPC_URL` - Blockchain RPC endpoint queried for token balances
//! - `COMPANY_TOKEN_ADDRESS` - Mint address of the tracked token
//!
//! ## Optional
//! - `API_HOST` - Bind address (default: 127.0.0.1)
//! - `API_PORT` - Listen port (default: 3000)
//! - `FEES_EARNED` - Informational fee figure (default: "0")
//! - `FEES_DISTRIBUTED` - Informational fee figure (default: "0")
//! - `DISTRIBUTION_WALLET` - Revenue distribution wallet (default: "")
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Balance oracle configuration
    pub oracle: OracleConfig,
    /// Informational fee figures
    pub fees: FeesConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Balance oracle (blockchain RPC) configuration.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// RPC endpoint URL
    pub rpc_url: String,
    /// Mint address of the tracked token
    pub token_mint: String,
}

/// Informational fee figures, displayed as-is.
///
/// Fee collection itself happens on an external marketplace; these are
/// operator-maintained numbers.
#[derive(Debug, Clone, Default)]
pub struct FeesConfig {
    /// Total trading fees earned
    pub earned: String,
    /// Total fees distributed to holders
    pub distributed: String,
    /// Wallet the distributions are paid from
    pub distribution_wallet: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("API_DATABASE_URL")?;
        let host = get_env_or_default("API_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("API_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("API_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("API_PORT".to_string(), e.to_string()))?;

        let oracle = OracleConfig::from_env()?;
        let fees = FeesConfig::from_env();
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            database_url,
            host,
            port,
            oracle,
            fees,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl OracleConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            rpc_url: get_required_env("HELIUS_RPC_URL")?,
            token_mint: get_required_env("COMPANY_TOKEN_ADDRESS")?,
        })
    }
}

impl FeesConfig {
    fn from_env() -> Self {
        Self {
            earned: get_env_or_default("FEES_EARNED", "0"),
            distributed: get_env_or_default("FEES_DISTRIBUTED", "0"),
            distribution_wallet: get_env_or_default("DISTRIBUTION_WALLET", ""),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    // Try primary key first (e.g., API_DATABASE_URL)
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    // Fallback to generic DATABASE_URL
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
