//! Seed command for local development.

use fantasy_products_api::db::ProductRepository;

use super::{CommandError, connect};

/// 1x1 transparent PNG, the smallest valid stand-in for a canvas export.
const PLACEHOLDER_DRAWING: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Sample submissions: (title, description).
const SAMPLES: &[(&str, &str)] = &[
    ("Sky Anchor", "Keeps your house from drifting off on windy nights"),
    ("Dream Jar", "Bottles one dream per night for later replay"),
    ("Cloud Sofa", "A couch that rains only on people you dislike"),
    ("Moon Ladle", "Scoops moonlight straight into your soup"),
    ("Echo Pen", "Writes down everything you meant to say"),
];

/// Insert sample products for local development.
///
/// Safe to run repeatedly; each run inserts a fresh batch.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;
    let repo = ProductRepository::new(&pool);

    for (title, description) in SAMPLES {
        let id = repo.create(title, description, PLACEHOLDER_DRAWING).await?;
        tracing::info!(%id, title, "seeded product");
    }

    #[allow(clippy::print_stdout)]
    {
        println!("Seeded {} products", SAMPLES.len());
    }

    Ok(())
}
