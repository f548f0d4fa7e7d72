//! Fantasy Products CLI - Database migrations and curation tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! fp-cli migrate
//!
//! # List products with their approval state
//! fp-cli product list
//!
//! # Approve a product and attach its token contract
//! fp-cli product approve 7 --contract 9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM
//!
//! # Seed the database with sample products
//! fp-cli seed
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `product list` / `product approve` - Curate submissions (the approval
//!   path deliberately has no HTTP endpoint)
//! - `seed` - Seed database with sample products

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "fp-cli")]
#[command(author, version, about = "Fantasy Products CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Curate product submissions
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Seed the database with sample products
    Seed,
}

#[derive(Subcommand)]
enum ProductAction {
    /// List all products with their approval state
    List,
    /// Approve a product, optionally attaching its token contract address
    Approve {
        /// Product ID
        id: i32,

        /// Token contract address; omit to approve before the contract exists
        #[arg(short, long)]
        contract: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Product { action } => match action {
            ProductAction::List => commands::product::list().await?,
            ProductAction::Approve { id, contract } => {
                commands::product::approve(id, contract.as_deref()).await?;
            }
        },
        Commands::Seed => commands::seed::run().await?,
    }
    Ok(())
}
