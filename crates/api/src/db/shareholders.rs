//! Shareholder repository for database operations.
//!
//! The registry's upsert is deliberately read-then-write (find, then insert
//! or update): the value written is always a freshly fetched balance, so a
//! concurrent verification for the same wallet can at worst apply a slightly
//! stale balance, never a corrupt one. A concurrent duplicate insert trips
//! the unique index and surfaces as `Conflict`; verification is safe to
//! retry.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use fantasy_products_core::{ShareholderId, WalletAddress};

use super::RepositoryError;
use crate::models::Shareholder;

/// Database row for a shareholder.
#[derive(Debug, sqlx::FromRow)]
struct ShareholderRow {
    id: i32,
    wallet_address: String,
    token_balance: f64,
    joined_at: DateTime<Utc>,
    last_verified: DateTime<Utc>,
}

impl TryFrom<ShareholderRow> for Shareholder {
    type Error = RepositoryError;

    fn try_from(row: ShareholderRow) -> Result<Self, Self::Error> {
        let wallet_address = WalletAddress::parse(&row.wallet_address).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid wallet address in database: {e}"))
        })?;

        Ok(Self {
            id: ShareholderId::new(row.id),
            wallet_address,
            token_balance: row.token_balance,
            joined_at: row.joined_at,
            last_verified: row.last_verified,
        })
    }
}

/// Repository for shareholder database operations.
pub struct ShareholderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShareholderRepository<'a> {
    /// Create a new shareholder repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look up a shareholder by wallet address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored address is invalid.
    pub async fn find_by_wallet(
        &self,
        wallet: &WalletAddress,
    ) -> Result<Option<Shareholder>, RepositoryError> {
        let row: Option<ShareholderRow> = sqlx::query_as(
            r"
            SELECT id, wallet_address, token_balance, joined_at, last_verified
            FROM shareholder
            WHERE wallet_address = $1
            ",
        )
        .bind(wallet.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(Shareholder::try_from).transpose()
    }

    /// Insert a first-time shareholder.
    ///
    /// `joined_at` and `last_verified` are both set to now by the database.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the wallet is already recorded.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(
        &self,
        wallet: &WalletAddress,
        token_balance: f64,
    ) -> Result<Shareholder, RepositoryError> {
        let row: ShareholderRow = sqlx::query_as(
            r"
            INSERT INTO shareholder (wallet_address, token_balance)
            VALUES ($1, $2)
            RETURNING id, wallet_address, token_balance, joined_at, last_verified
            ",
        )
        .bind(wallet.as_str())
        .bind(token_balance)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("wallet already recorded".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Shareholder::try_from(row)
    }

    /// Refresh an existing shareholder's balance.
    ///
    /// Updates `token_balance` and `last_verified`; `joined_at` is preserved.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the wallet has no record.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update_balance(
        &self,
        wallet: &WalletAddress,
        token_balance: f64,
    ) -> Result<Shareholder, RepositoryError> {
        let row: Option<ShareholderRow> = sqlx::query_as(
            r"
            UPDATE shareholder
            SET token_balance = $2,
                last_verified = now()
            WHERE wallet_address = $1
            RETURNING id, wallet_address, token_balance, joined_at, last_verified
            ",
        )
        .bind(wallet.as_str())
        .bind(token_balance)
        .fetch_optional(self.pool)
        .await?;

        row.map(Shareholder::try_from)
            .transpose()?
            .ok_or(RepositoryError::NotFound)
    }

    /// List every shareholder, newest-joined first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored address is invalid.
    pub async fn list_all(&self) -> Result<Vec<Shareholder>, RepositoryError> {
        let rows: Vec<ShareholderRow> = sqlx::query_as(
            r"
            SELECT id, wallet_address, token_balance, joined_at, last_verified
            FROM shareholder
            ORDER BY joined_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Shareholder::try_from).collect()
    }
}
