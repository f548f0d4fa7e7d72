//! Leaderboard route handler.

use axum::{
    Json,
    extract::State,
};
use serde::Serialize;
use tracing::instrument;

use crate::db::ShareholderRepository;
use crate::error::Result;
use crate::leaderboard::{self, LeaderboardSlot};
use crate::state::AppState;

/// Response for the leaderboard view.
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub success: bool,
    /// Always exactly 25 slots; trailing slots have a null holder.
    pub leaderboard: Vec<LeaderboardSlot>,
}

/// Show the top-25 holder ranking.
///
/// GET /leaderboard
///
/// # Errors
///
/// Returns 500 if the store fails.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<LeaderboardResponse>> {
    let repo = ShareholderRepository::new(state.pool());
    let holders = repo.list_all().await?;

    Ok(Json(LeaderboardResponse {
        success: true,
        leaderboard: leaderboard::rank(&holders),
    }))
}
