//! Balance oracle client.
//!
//! Queries the external blockchain RPC endpoint for a wallet's holding of
//! the tracked token via a single `getTokenAccountsByOwner` call, requesting
//! parsed account data.
//!
//! A successful response with no matching token account (or a null
//! `uiAmount`) is a *confirmed* zero balance. Transport failures, RPC error
//! objects, and responses missing the expected shape are reported as errors
//! so callers can tell "holds nothing" apart from "could not confirm".

use serde::Deserialize;
use thiserror::Error;

use fantasy_products_core::WalletAddress;

use crate::config::OracleConfig;

/// Request timeout for a single balance query. No retries are attempted.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Errors that can occur when querying the balance oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// RPC endpoint answered with a non-success status.
    #[error("RPC endpoint returned status {status}")]
    Status { status: u16 },

    /// RPC endpoint returned a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Response did not have the expected shape.
    #[error("malformed RPC response: {0}")]
    Malformed(String),
}

/// Client for the external token balance oracle.
#[derive(Clone)]
pub struct BalanceOracle {
    client: reqwest::Client,
    rpc_url: String,
    token_mint: String,
}

impl BalanceOracle {
    /// Create a new oracle client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &OracleConfig) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            rpc_url: config.rpc_url.clone(),
            token_mint: config.token_mint.clone(),
        })
    }

    /// Query the wallet's current balance of the tracked token.
    ///
    /// Issues one best-effort JSON-RPC call; no retries.
    ///
    /// # Errors
    ///
    /// Returns `OracleError` when the balance could not be confirmed:
    /// transport failure, RPC error, or unexpected response shape.
    /// `Ok(0.0)` always means the oracle confirmed the wallet holds nothing.
    pub async fn token_balance(&self, wallet: &WalletAddress) -> Result<f64, OracleError> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getTokenAccountsByOwner",
            "params": [
                wallet.as_str(),
                { "mint": self.token_mint },
                { "encoding": "jsonParsed" }
            ]
        });

        let response = self.client.post(&self.rpc_url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(OracleError::Status {
                status: status.as_u16(),
            });
        }

        let envelope: RpcEnvelope = response
            .json()
            .await
            .map_err(|e| OracleError::Malformed(e.to_string()))?;

        balance_from_envelope(envelope)
    }
}

impl std::fmt::Debug for BalanceOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // rpc_url may embed an API key; keep it out of logs
        f.debug_struct("BalanceOracle")
            .field("rpc_url", &"[REDACTED]")
            .field("token_mint", &self.token_mint)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Response shape
// =============================================================================

#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    result: Option<RpcResult>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResult {
    value: Vec<TokenAccountEntry>,
}

#[derive(Debug, Deserialize)]
struct TokenAccountEntry {
    account: TokenAccount,
}

#[derive(Debug, Deserialize)]
struct TokenAccount {
    data: TokenAccountData,
}

#[derive(Debug, Deserialize)]
struct TokenAccountData {
    parsed: ParsedAccountData,
}

#[derive(Debug, Deserialize)]
struct ParsedAccountData {
    info: TokenAccountInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenAccountInfo {
    token_amount: TokenAmount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenAmount {
    /// Decimal amount; null for accounts the RPC cannot express as a float.
    ui_amount: Option<f64>,
}

/// Extract the balance from a decoded RPC envelope.
///
/// The first matching token account wins, matching the upstream behavior.
fn balance_from_envelope(envelope: RpcEnvelope) -> Result<f64, OracleError> {
    if let Some(err) = envelope.error {
        return Err(OracleError::Rpc {
            code: err.code,
            message: err.message,
        });
    }

    let Some(result) = envelope.result else {
        return Err(OracleError::Malformed(
            "response carries neither result nor error".to_owned(),
        ));
    };

    // No token account for this mint: the wallet verifiably holds nothing.
    // A null uiAmount is likewise reported as zero by the RPC.
    Ok(result
        .value
        .into_iter()
        .next()
        .and_then(|entry| entry.account.data.parsed.info.token_amount.ui_amount)
        .unwrap_or(0.0))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn decode(json: serde_json::Value) -> RpcEnvelope {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_balance_from_holdings() {
        let envelope = decode(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "context": { "slot": 12345 },
                "value": [{
                    "pubkey": "TokenAccount111",
                    "account": {
                        "data": {
                            "parsed": {
                                "info": {
                                    "tokenAmount": {
                                        "amount": "500000000000",
                                        "decimals": 9,
                                        "uiAmount": 500.0,
                                        "uiAmountString": "500"
                                    }
                                },
                                "type": "account"
                            },
                            "program": "spl-token"
                        },
                        "lamports": 2039280
                    }
                }]
            }
        }));

        let balance = balance_from_envelope(envelope).unwrap();
        assert!((balance - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_value_is_confirmed_zero() {
        let envelope = decode(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "value": [] }
        }));

        let balance = balance_from_envelope(envelope).unwrap();
        assert!(balance.abs() < f64::EPSILON);
    }

    #[test]
    fn test_null_ui_amount_is_confirmed_zero() {
        let envelope = decode(serde_json::json!({
            "result": {
                "value": [{
                    "account": {
                        "data": {
                            "parsed": {
                                "info": { "tokenAmount": { "uiAmount": null } }
                            }
                        }
                    }
                }]
            }
        }));

        let balance = balance_from_envelope(envelope).unwrap();
        assert!(balance.abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_matching_account_wins() {
        let envelope = decode(serde_json::json!({
            "result": {
                "value": [
                    {
                        "account": {
                            "data": {
                                "parsed": {
                                    "info": { "tokenAmount": { "uiAmount": 42.5 } }
                                }
                            }
                        }
                    },
                    {
                        "account": {
                            "data": {
                                "parsed": {
                                    "info": { "tokenAmount": { "uiAmount": 7.0 } }
                                }
                            }
                        }
                    }
                ]
            }
        }));

        let balance = balance_from_envelope(envelope).unwrap();
        assert!((balance - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rpc_error_is_not_zero() {
        let envelope = decode(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32602, "message": "Invalid param: WrongSize" }
        }));

        let err = balance_from_envelope(envelope).unwrap_err();
        assert!(matches!(err, OracleError::Rpc { code: -32602, .. }));
    }

    #[test]
    fn test_missing_result_is_malformed() {
        let envelope = decode(serde_json::json!({ "jsonrpc": "2.0", "id": 1 }));

        let err = balance_from_envelope(envelope).unwrap_err();
        assert!(matches!(err, OracleError::Malformed(_)));
    }
}
