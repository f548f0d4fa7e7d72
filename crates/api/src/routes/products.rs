//! Product route handlers.
//!
//! Submissions arrive with the drawing already encoded as a data-URL string;
//! the server stores it verbatim and never inspects the image data.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use fantasy_products_core::ProductId;

use crate::catalog::{self, ProductFilter};
use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::Product;
use crate::state::AppState;

/// Request body for a product submission.
///
/// Fields are optional at the serde level so a missing field yields the
/// documented 400 message instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub drawing: Option<String>,
}

/// Response for a successful submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductResponse {
    pub success: bool,
    pub product_id: ProductId,
}

/// Query parameters for the product listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub filter: Option<String>,
    pub page: Option<usize>,
}

/// Response for the product listing.
///
/// `page`/`page_count` are present only when a derived gallery page was
/// requested; the bare listing returns every product.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsResponse {
    pub success: bool,
    pub products: Vec<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
}

/// Submit a new product concept.
///
/// POST /products
///
/// # Errors
///
/// Returns 400 if title, description, or drawing is missing or empty;
/// 500 if the store rejects the insert.
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<CreateProductResponse>)> {
    let (title, description, drawing) = match (
        non_empty(body.title),
        non_empty(body.description),
        non_empty(body.drawing),
    ) {
        (Some(t), Some(d), Some(dr)) => (t, d, dr),
        _ => {
            return Err(AppError::BadRequest(
                "Title, description, and drawing are required".to_string(),
            ));
        }
    };

    let repo = ProductRepository::new(state.pool());
    let product_id = repo.create(&title, &description, &drawing).await?;

    tracing::info!(%product_id, title = %title, "product submitted");

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            success: true,
            product_id,
        }),
    ))
}

/// List products.
///
/// GET /products returns the full list, newest first. With `?filter=` and/or
/// `?page=` the gallery derivation runs server-side: the filtered list is
/// re-sorted and cut into pages of 9, and an absent `page` means page 1 (the
/// filter just changed, so the view starts over).
///
/// # Errors
///
/// Returns 400 for an unknown filter name; 500 if the store fails.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListProductsResponse>> {
    let repo = ProductRepository::new(state.pool());
    let products = repo.list_all().await?;

    if query.filter.is_none() && query.page.is_none() {
        return Ok(Json(ListProductsResponse {
            success: true,
            products,
            page: None,
            page_count: None,
        }));
    }

    let filter = match query.filter.as_deref() {
        Some(name) => name
            .parse::<ProductFilter>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?,
        None => ProductFilter::default(),
    };

    let derived = catalog::page(products, filter, query.page.unwrap_or(1));

    Ok(Json(ListProductsResponse {
        success: true,
        products: derived.items,
        page: Some(derived.page),
        page_count: Some(derived.page_count),
    }))
}

/// Treat `None` and whitespace-only strings alike.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
