//! Product curation commands.
//!
//! Approval is an operator-only action: the public API never mutates
//! `approved` or `contract_address`, so curation goes through this command
//! against the database directly.

use fantasy_products_api::db::ProductRepository;
use fantasy_products_core::ProductId;

use super::{CommandError, connect};

/// List all products with their approval state.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or the query fails.
pub async fn list() -> Result<(), CommandError> {
    let pool = connect().await?;
    let repo = ProductRepository::new(&pool);
    let products = repo.list_all().await?;

    #[allow(clippy::print_stdout)]
    {
        println!("{:>5}  {:<10}  {:<8}  {:<44}  created", "id", "title", "state", "contract");
        for product in &products {
            let state = if product.approved { "approved" } else { "pending" };
            let contract = if product.contract_address.is_empty() {
                "-"
            } else {
                &product.contract_address
            };
            println!(
                "{:>5}  {:<10}  {:<8}  {:<44}  {}",
                product.id,
                product.title,
                state,
                contract,
                product.created_at.format("%Y-%m-%d %H:%M"),
            );
        }
        println!("{} product(s)", products.len());
    }

    Ok(())
}

/// Approve a product, optionally attaching its token contract address.
///
/// # Errors
///
/// Returns `CommandError` if the product does not exist or the update fails.
pub async fn approve(id: i32, contract: Option<&str>) -> Result<(), CommandError> {
    let pool = connect().await?;
    let repo = ProductRepository::new(&pool);
    let product = repo.approve(ProductId::new(id), contract).await?;

    tracing::info!(
        id = %product.id,
        title = %product.title,
        contract = %product.contract_address,
        "product approved"
    );

    #[allow(clippy::print_stdout)]
    {
        if product.contract_address.is_empty() {
            println!("Approved product {} ({}); no contract attached yet", product.id, product.title);
        } else {
            println!(
                "Approved product {} ({}) with contract {}",
                product.id, product.title, product.contract_address
            );
        }
    }

    Ok(())
}
