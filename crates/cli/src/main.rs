//! Shopfront CLI - Terminal storefront.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! shopfront products --search coffee --sort desc
//! shopfront products --category gadgets
//! shopfront categories
//!
//! # Manage the cart (persisted between runs)
//! shopfront add 2
//! shopfront increase 2
//! shopfront decrease 2
//! shopfront cart
//! shopfront clear
//!
//! # Place the order
//! shopfront checkout
//!
//! # Interactive session (filters stay active between commands)
//! shopfront shell
//! ```
//!
//! # Commands
//!
//! - `products` - List products matching a search, category and sort order
//! - `categories` - List category names
//! - `cart` - Show the cart and its totals
//! - `add`, `increase`, `decrease`, `clear` - Change the cart
//! - `checkout` - Empty the cart and print a confirmation
//! - `shell` - Read commands from stdin until `quit`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};
use shopfront_core::{ProductId, SortDirection};
use shopfront_storefront::{ProductQuery, Storefront, StorefrontConfig, parse_category};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;

use commands::CliError;

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about = "Shopfront terminal storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Case-insensitive text to look for in product names
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only show this category ("All Products" shows everything)
        #[arg(short, long, default_value = "")]
        category: String,

        /// Price order (`asc` or `desc`)
        #[arg(long, default_value = "asc")]
        sort: SortDirection,
    },
    /// List product categories
    Categories,
    /// Show the cart
    Cart,
    /// Add a product to the cart
    Add {
        /// Product id
        id: String,
    },
    /// Add one unit of a product already in the cart
    Increase {
        /// Product id
        id: String,
    },
    /// Remove one unit of a product in the cart
    Decrease {
        /// Product id
        id: String,
    },
    /// Empty the cart
    Clear,
    /// Place the order
    Checkout,
    /// Interactive session
    Shell,
}

fn main() {
    // Initialize tracing with EnvFilter, logging to stderr so stdout stays clean
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfront_storefront=info,shopfront_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = StorefrontConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let mut store = Storefront::from_config(&config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Products {
            search,
            category,
            sort,
        } => {
            let listing = store.apply_query(ProductQuery {
                search,
                category: parse_category(&category),
                sort,
            });
            render::listing(&mut out, &listing)?;
        }
        Commands::Categories => render::categories(&mut out, &store.categories())?,
        Commands::Cart => render::cart(&mut out, &store.cart_summary())?,
        Commands::Add { id } => commands::cart::add(&mut store, &ProductId::new(id), &mut out)?,
        Commands::Increase { id } => {
            commands::cart::increase(&mut store, &ProductId::new(id), &mut out)?;
        }
        Commands::Decrease { id } => {
            commands::cart::decrease(&mut store, &ProductId::new(id), &mut out)?;
        }
        Commands::Clear => commands::cart::clear(&mut store, &mut out)?,
        Commands::Checkout => commands::cart::checkout(&mut store, &mut out)?,
        Commands::Shell => {
            let stdin = std::io::stdin();
            commands::shell::run(&mut store, stdin.lock(), &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
