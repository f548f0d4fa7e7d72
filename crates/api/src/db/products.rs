//! Product repository for database operations.
//!
//! Queries are written with runtime-checked `query_as` so the workspace
//! builds without a live database.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use fantasy_products_core::ProductId;

use super::RepositoryError;
use crate::models::Product;

/// Database row for a product.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    title: String,
    description: String,
    drawing: String,
    approved: bool,
    contract_address: String,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            title: row.title,
            description: row.description,
            drawing: row.drawing,
            approved: row.approved,
            contract_address: row.contract_address,
            created_at: row.created_at,
        }
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new product submission.
    ///
    /// The record starts unapproved with an empty contract address; both are
    /// only ever changed by the operator CLI.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        title: &str,
        description: &str,
        drawing: &str,
    ) -> Result<ProductId, RepositoryError> {
        let row: (i32,) = sqlx::query_as(
            r"
            INSERT INTO product (title, description, drawing)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(title)
        .bind(description)
        .bind(drawing)
        .fetch_one(self.pool)
        .await?;

        Ok(ProductId::new(row.0))
    }

    /// List every product, newest first.
    ///
    /// The ordering is a read-time sort, not a storage invariant.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r"
            SELECT id, title, description, drawing, approved, contract_address, created_at
            FROM product
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r"
            SELECT id, title, description, drawing, approved, contract_address, created_at
            FROM product
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Approve a product, optionally attaching its token contract address.
    ///
    /// This is the out-of-band curation step; no HTTP route reaches it.
    /// Passing `None` leaves the contract address untouched, so a product
    /// can be approved before its contract exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this ID.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn approve(
        &self,
        id: ProductId,
        contract_address: Option<&str>,
    ) -> Result<Product, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r"
            UPDATE product
            SET approved = TRUE,
                contract_address = COALESCE($2, contract_address)
            WHERE id = $1
            RETURNING id, title, description, drawing, approved, contract_address, created_at
            ",
        )
        .bind(id.as_i32())
        .bind(contract_address)
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::from).ok_or(RepositoryError::NotFound)
    }
}
