//! Revenue-share leaderboard derivation.
//!
//! Pure ranking over the full shareholder list. The output shape is fixed:
//! exactly 25 rank slots, the trailing ones empty when fewer holders exist,
//! because the client renders placeholder rows up to rank 25.

use std::cmp::Ordering;

use serde::Serialize;

use fantasy_products_core::WalletAddress;

use crate::models::Shareholder;

/// Fixed total supply of the tracked token, used as the share denominator.
///
/// Display-only approximation: each holder's share is expressed against the
/// full supply, not against the sum of verified balances.
pub const TOTAL_SUPPLY: f64 = 1_000_000_000.0;

/// Number of rank slots the leaderboard always carries.
pub const LEADERBOARD_SLOTS: usize = 25;

/// A ranked holder entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedHolder {
    /// The holder's wallet address.
    pub wallet_address: WalletAddress,
    /// Verified balance of the tracked token.
    pub token_balance: f64,
    /// Balance as a percentage of [`TOTAL_SUPPLY`].
    pub share: f64,
}

/// One leaderboard slot; `holder` is null past the available holder count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSlot {
    /// 1-based rank.
    pub rank: usize,
    /// The holder at this rank, if any.
    pub holder: Option<RankedHolder>,
}

/// Rank holders by balance into exactly 25 slots.
///
/// Sorting is stable: ties in `token_balance` keep the input order, so the
/// result is deterministic whenever the upstream listing is.
#[must_use]
pub fn rank(holders: &[Shareholder]) -> Vec<LeaderboardSlot> {
    let mut sorted: Vec<&Shareholder> = holders.iter().collect();
    sorted.sort_by(|a, b| {
        b.token_balance
            .partial_cmp(&a.token_balance)
            .unwrap_or(Ordering::Equal)
    });

    let mut ranked = sorted.into_iter().map(|holder| RankedHolder {
        wallet_address: holder.wallet_address.clone(),
        token_balance: holder.token_balance,
        share: holder.token_balance / TOTAL_SUPPLY * 100.0,
    });

    (1..=LEADERBOARD_SLOTS)
        .map(|rank| LeaderboardSlot {
            rank,
            holder: ranked.next(),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{DateTime, Utc};
    use fantasy_products_core::ShareholderId;

    use super::*;

    fn timestamp() -> DateTime<Utc> {
        "2026-08-01T00:00:00Z".parse().unwrap()
    }

    fn holder(id: i32, wallet: &str, balance: f64) -> Shareholder {
        Shareholder {
            id: ShareholderId::new(id),
            wallet_address: WalletAddress::parse(wallet).unwrap(),
            token_balance: balance,
            joined_at: timestamp(),
            last_verified: timestamp(),
        }
    }

    #[test]
    fn test_sorted_descending_by_balance() {
        let holders = vec![
            holder(1, "low", 10.0),
            holder(2, "high", 9000.0),
            holder(3, "mid", 400.0),
        ];

        let slots = rank(&holders);
        let wallets: Vec<&str> = slots
            .iter()
            .filter_map(|s| s.holder.as_ref())
            .map(|h| h.wallet_address.as_str())
            .collect();
        assert_eq!(wallets, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_always_twenty_five_slots() {
        let slots = rank(&[holder(1, "only", 5.0)]);
        assert_eq!(slots.len(), LEADERBOARD_SLOTS);
        assert!(slots[0].holder.is_some());
        assert!(slots[1..].iter().all(|s| s.holder.is_none()));
        assert_eq!(slots[24].rank, 25);

        let empty = rank(&[]);
        assert_eq!(empty.len(), LEADERBOARD_SLOTS);
        assert!(empty.iter().all(|s| s.holder.is_none()));
    }

    #[test]
    fn test_truncates_past_twenty_five() {
        let holders: Vec<Shareholder> = (0..40)
            .map(|i| holder(i, &format!("wallet{i}"), f64::from(1000 - i)))
            .collect();

        let slots = rank(&holders);
        assert_eq!(slots.len(), LEADERBOARD_SLOTS);
        assert!(slots.iter().all(|s| s.holder.is_some()));
        // Rank 25 holds the 25th-largest balance
        let last = slots[24].holder.as_ref().unwrap();
        assert!((last.token_balance - 976.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_share_is_percent_of_total_supply() {
        let slots = rank(&[holder(1, "w", 500.0)]);
        let entry = slots[0].holder.as_ref().unwrap();
        assert!((entry.share - 500.0 / TOTAL_SUPPLY * 100.0).abs() < f64::EPSILON);
        assert!((entry.share - 0.000_05).abs() < 1e-12);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let holders = vec![
            holder(1, "first", 100.0),
            holder(2, "second", 100.0),
            holder(3, "third", 100.0),
        ];

        let slots = rank(&holders);
        let wallets: Vec<&str> = slots
            .iter()
            .filter_map(|s| s.holder.as_ref())
            .map(|h| h.wallet_address.as_str())
            .collect();
        assert_eq!(wallets, vec!["first", "second", "third"]);
    }
}
