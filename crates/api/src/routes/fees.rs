//! Fee figures route handler.
//!
//! Trading fees are collected on the external marketplace; the platform only
//! republishes operator-maintained figures from configuration.

use axum::{
    Json,
    extract::State,
};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;

/// Response carrying the informational fee figures.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeesResponse {
    pub success: bool,
    pub fees_earned: String,
    pub fees_distributed: String,
    pub distribution_wallet: String,
}

/// Show the informational fee figures.
///
/// GET /fees
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<FeesResponse> {
    let fees = &state.config().fees;

    Json(FeesResponse {
        success: true,
        fees_earned: fees.earned.clone(),
        fees_distributed: fees.distributed.clone(),
        distribution_wallet: fees.distribution_wallet.clone(),
    })
}
