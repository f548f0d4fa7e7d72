//! Wallet address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`WalletAddress`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum WalletAddressError {
    /// The input string is empty (or whitespace only).
    #[error("wallet address cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("wallet address must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A wallet address on the external ledger.
///
/// The address is treated as an opaque identifier: the registry never derives
/// anything from its contents, and the oracle forwards it verbatim. Parsing
/// only rejects inputs that could never identify a wallet.
///
/// ## Constraints
///
/// - Must not be empty after trimming surrounding whitespace
/// - Length: at most 128 characters
///
/// ## Examples
///
/// ```
/// use fantasy_products_core::WalletAddress;
///
/// assert!(WalletAddress::parse("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU").is_ok());
/// assert!(WalletAddress::parse("").is_err());
/// assert!(WalletAddress::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Maximum length of a wallet address.
    pub const MAX_LENGTH: usize = 128;

    /// Parse a `WalletAddress` from a string.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty (after trimming) or longer
    /// than 128 characters.
    pub fn parse(s: &str) -> Result<Self, WalletAddressError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(WalletAddressError::Empty);
        }

        if trimmed.len() > Self::MAX_LENGTH {
            return Err(WalletAddressError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WalletAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for WalletAddress {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for WalletAddress {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<'_, sqlx::Postgres>>::decode(value)?;
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for WalletAddress {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'_, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let addr = WalletAddress::parse("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU").unwrap();
        assert_eq!(addr.as_str(), "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let addr = WalletAddress::parse("  ABC  ").unwrap();
        assert_eq!(addr.as_str(), "ABC");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            WalletAddress::parse(""),
            Err(WalletAddressError::Empty)
        ));
        assert!(matches!(
            WalletAddress::parse("   "),
            Err(WalletAddressError::Empty)
        ));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "x".repeat(WalletAddress::MAX_LENGTH + 1);
        assert!(matches!(
            WalletAddress::parse(&long),
            Err(WalletAddressError::TooLong { .. })
        ));
    }

    #[test]
    fn test_max_length_accepted() {
        let max = "x".repeat(WalletAddress::MAX_LENGTH);
        assert!(WalletAddress::parse(&max).is_ok());
    }

    #[test]
    fn test_display() {
        let addr = WalletAddress::parse("ABC").unwrap();
        assert_eq!(addr.to_string(), "ABC");
    }
}
