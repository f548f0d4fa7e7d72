//! Shareholder route handlers.

use axum::{
    Json,
    extract::State,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use fantasy_products_core::WalletAddress;

use crate::db::ShareholderRepository;
use crate::error::{AppError, Result};
use crate::models::Shareholder;
use crate::services::HolderRegistry;
use crate::state::AppState;

/// Request body for wallet verification.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    #[serde(default)]
    pub wallet_address: Option<String>,
}

/// Response for a successful verification.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub message: &'static str,
    pub shareholder: Shareholder,
}

/// Response for the shareholder listing.
#[derive(Debug, Serialize)]
pub struct ListShareholdersResponse {
    pub success: bool,
    pub shareholders: Vec<Shareholder>,
}

/// Verify a wallet's token holdings and record it as a shareholder.
///
/// POST /shareholders
///
/// # Errors
///
/// Returns 400 if the address is missing/empty or the wallet verifiably
/// holds nothing; 502 if the oracle could not confirm a balance; 500 if
/// storage fails.
#[instrument(skip(state, body), fields(wallet = body.wallet_address.as_deref().unwrap_or("")))]
pub async fn verify(
    State(state): State<AppState>,
    Json(body): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>> {
    let raw = body
        .wallet_address
        .ok_or_else(|| AppError::BadRequest("Wallet address is required".to_string()))?;

    let wallet =
        WalletAddress::parse(&raw).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let registry = HolderRegistry::new(state.pool(), state.oracle());
    let verification = registry.verify_and_record(&wallet).await?;

    Ok(Json(VerifyResponse {
        success: true,
        message: verification.message(),
        shareholder: verification.shareholder,
    }))
}

/// List every recorded shareholder, newest-joined first.
///
/// GET /shareholders
///
/// # Errors
///
/// Returns 500 if the store fails.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<ListShareholdersResponse>> {
    let repo = ShareholderRepository::new(state.pool());
    let shareholders = repo.list_all().await?;

    Ok(Json(ListShareholdersResponse {
        success: true,
        shareholders,
    }))
}
