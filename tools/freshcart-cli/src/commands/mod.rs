//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

/// Catalog subcommands.
#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List every product.
    List,

    /// Search products.
    Search(SearchArgs),
}

/// Arguments for catalog search.
#[derive(Args, Default)]
pub struct SearchArgs {
    /// Text to match against name and brand.
    #[arg(short, long)]
    pub text: Option<String>,

    /// Category slug ("all" for every category).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Required tag (repeatable).
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Brand name.
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Minimum price.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Only products that can be ordered.
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order (relevance, price_asc, price_desc, name_asc, name_desc, rating).
    #[arg(short, long, default_value = "relevance")]
    pub sort: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

/// Cart subcommands.
#[derive(Subcommand)]
pub enum CartCommand {
    /// Replay a cart script and show the resulting cart.
    Run {
        /// Path to the JSON cart script.
        script: String,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Path to the JSON cart script.
    pub script: String,

    /// Order date (YYYY-MM-DD), defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,

    /// Initialize a new config file.
    Init {
        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
