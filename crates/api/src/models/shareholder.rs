//! Shareholder domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use fantasy_products_core::{ShareholderId, WalletAddress};

/// A verified token holder.
///
/// One record per wallet address. `token_balance` is the last balance the
/// oracle confirmed; zero is never stored because verification rejects empty
/// wallets before writing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shareholder {
    /// Unique record ID.
    pub id: ShareholderId,
    /// The holder's wallet address.
    pub wallet_address: WalletAddress,
    /// Last-observed balance of the tracked token.
    pub token_balance: f64,
    /// When the wallet first verified. Never changes afterwards.
    pub joined_at: DateTime<Utc>,
    /// When the wallet last verified.
    pub last_verified: DateTime<Utc>,
}
