//! Product domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use fantasy_products_core::ProductId;

/// A submitted fantasy product concept.
///
/// Created through the public API with `approved = false` and an empty
/// contract address; both are only ever changed by the operator CLI once a
/// product is curated and its token contract exists. A product is never
/// deleted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Short display title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// The hand-drawn concept, as a self-contained data-URL string.
    pub drawing: String,
    /// Whether an operator has approved this product.
    pub approved: bool,
    /// Token contract address; empty until the operator sets it.
    /// Non-empty implies a trading link can be rendered.
    pub contract_address: String,
    /// When the product was submitted.
    pub created_at: DateTime<Utc>,
}
