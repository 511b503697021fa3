//! Stonefruit - client-side storefront.
//!
//! # Usage
//!
//! ```bash
//! # List the product catalog
//! stonefruit products
//!
//! # Work with the cart (persisted between invocations)
//! stonefruit cart add 3
//! stonefruit cart update 3 2
//! stonefruit cart remove 3
//! stonefruit cart show
//!
//! # Review and place the order
//! stonefruit checkout --name "Ada Lovelace" --address "1 Analytical Way"
//! ```
//!
//! # Environment Variables
//!
//! - `STONEFRUIT_API_BASE_URL` - Base URL of the backend API (required)
//! - `STONEFRUIT_STORAGE_DIR` - Directory for the local cart snapshot

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use stonefruit_shop::config::ShopConfig;
use stonefruit_shop::error::Result;

mod commands;

#[derive(Parser)]
#[command(name = "stonefruit")]
#[command(author, version, about = "Stonefruit storefront client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalog
    Products,
    /// Inspect or modify the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Review and place the order
    Checkout {
        /// Customer name
        #[arg(short, long)]
        name: String,

        /// Delivery address
        #[arg(short, long)]
        address: String,

        /// Place the order without the interactive confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents and total
    Show,
    /// Add one unit of a product to the cart
    Add {
        /// Product id from the catalog
        product_id: i64,
    },
    /// Set the quantity of a cart line (must be at least 1)
    Update {
        product_id: i64,
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        product_id: i64,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stonefruit=info,stonefruit_shop=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ShopConfig::from_env()?;

    match cli.command {
        Commands::Products => commands::products::list(&config).await,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&config),
            CartAction::Add { product_id } => commands::cart::add(&config, product_id).await,
            CartAction::Update {
                product_id,
                quantity,
            } => commands::cart::update(&config, product_id, quantity),
            CartAction::Remove { product_id } => commands::cart::remove(&config, product_id),
        },
        Commands::Checkout { name, address, yes } => {
            commands::checkout::run(&config, &name, &address, yes).await
        }
    }
}
