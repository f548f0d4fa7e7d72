//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ApiConfig;
use crate::oracle::{BalanceOracle, OracleError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources: the database pool (created once at startup, drained at
/// shutdown), the oracle client, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    pool: PgPool,
    oracle: BalanceOracle,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - API configuration
    /// * `pool` - `PostgreSQL` connection pool
    ///
    /// # Errors
    ///
    /// Returns an error if the oracle HTTP client cannot be built.
    pub fn new(config: ApiConfig, pool: PgPool) -> Result<Self, OracleError> {
        let oracle = BalanceOracle::new(&config.oracle)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                oracle,
            }),
        })
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the balance oracle client.
    #[must_use]
    pub fn oracle(&self) -> &BalanceOracle {
        &self.inner.oracle
    }
}
