//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health             - Liveness check
//! GET  /health/ready       - Readiness check (verifies database)
//!
//! # Products
//! POST /products           - Submit a product concept
//! GET  /products           - Full listing, newest first
//!                            (?filter=recent|pending|approved&page=N for a
//!                            derived gallery page)
//!
//! # Shareholders
//! POST /shareholders       - Verify a wallet and record its balance
//! GET  /shareholders       - Full listing, newest-joined first
//!
//! # Derived views
//! GET  /leaderboard        - Top-25 holder ranking (25 slots, fixed)
//! GET  /fees               - Informational fee figures
//! ```

pub mod fees;
pub mod leaderboard;
pub mod products;
pub mod shareholders;

use axum::{
    Router,
    routing::get,
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/", get(products::list).post(products::create))
}

/// Create the shareholder routes router.
pub fn shareholder_routes() -> Router<AppState> {
    Router::new().route("/", get(shareholders::list).post(shareholders::verify))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/shareholders", shareholder_routes())
        .route("/leaderboard", get(leaderboard::show))
        .route("/fees", get(fees::show))
}
