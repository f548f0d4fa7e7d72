//! Holder registry: balance verification and recording.
//!
//! `verify_and_record` is the write path of the shareholder registry: ask
//! the oracle for the wallet's current balance, reject wallets that hold
//! nothing, and upsert the record keyed by wallet address. Repeated calls
//! converge on the latest confirmed balance, so verification is always safe
//! to retry.

use sqlx::PgPool;

use fantasy_products_core::WalletAddress;

use crate::db::{RepositoryError, ShareholderRepository};
use crate::models::Shareholder;
use crate::oracle::{BalanceOracle, OracleError};

/// Errors that can occur during verification.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The oracle confirmed the wallet holds none of the tracked token.
    ///
    /// A domain rejection, not a dependency failure: nothing is written and
    /// the caller is told to acquire tokens first.
    #[error("no tokens found in wallet")]
    NoHoldings,

    /// The balance could not be confirmed.
    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// Reading or writing the registry failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Outcome of a successful verification.
#[derive(Debug)]
pub struct Verification {
    /// The stored record, with the freshly applied balance.
    pub shareholder: Shareholder,
    /// True on first verification, false on a refresh.
    pub newly_verified: bool,
}

impl Verification {
    /// Human-readable outcome message for the API response.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        if self.newly_verified {
            "Successfully verified as shareholder"
        } else {
            "You are already a verified shareholder"
        }
    }
}

/// The holder registry: oracle plus shareholder storage.
pub struct HolderRegistry<'a> {
    pool: &'a PgPool,
    oracle: &'a BalanceOracle,
}

impl<'a> HolderRegistry<'a> {
    /// Create a registry over the shared pool and oracle client.
    #[must_use]
    pub const fn new(pool: &'a PgPool, oracle: &'a BalanceOracle) -> Self {
        Self { pool, oracle }
    }

    /// Verify a wallet's holdings and record them.
    ///
    /// On first verification a record is created with
    /// `joined_at = last_verified = now`; afterwards only the balance and
    /// `last_verified` move, `joined_at` is preserved.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NoHoldings`] if the oracle confirms a zero
    ///   balance; nothing is written.
    /// - [`RegistryError::Oracle`] if the balance could not be confirmed.
    /// - [`RegistryError::Repository`] if storage fails.
    pub async fn verify_and_record(
        &self,
        wallet: &WalletAddress,
    ) -> Result<Verification, RegistryError> {
        let balance = self.oracle.token_balance(wallet).await?;

        if balance <= 0.0 {
            return Err(RegistryError::NoHoldings);
        }

        let repo = ShareholderRepository::new(self.pool);

        let verification = match repo.find_by_wallet(wallet).await? {
            Some(_) => {
                let shareholder = repo.update_balance(wallet, balance).await?;
                Verification {
                    shareholder,
                    newly_verified: false,
                }
            }
            None => {
                let shareholder = repo.insert(wallet, balance).await?;
                Verification {
                    shareholder,
                    newly_verified: true,
                }
            }
        };

        tracing::info!(
            wallet = %wallet,
            balance = verification.shareholder.token_balance,
            newly_verified = verification.newly_verified,
            "shareholder verified"
        );

        Ok(verification)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use fantasy_products_core::ShareholderId;

    use super::*;

    #[test]
    fn test_outcome_messages() {
        let shareholder = Shareholder {
            id: ShareholderId::new(1),
            wallet_address: WalletAddress::parse("ABC").expect("valid address"),
            token_balance: 1.0,
            joined_at: Utc::now(),
            last_verified: Utc::now(),
        };

        let fresh = Verification {
            shareholder: shareholder.clone(),
            newly_verified: true,
        };
        assert_eq!(fresh.message(), "Successfully verified as shareholder");

        let repeat = Verification {
            shareholder,
            newly_verified: false,
        };
        assert_eq!(repeat.message(), "You are already a verified shareholder");
    }
}
