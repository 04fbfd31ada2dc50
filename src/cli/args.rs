//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// market-cart - Shopping cart with persistent snapshots
///
/// Adds, increments and decrements cart items, keeping the cart in a local
/// key-value store between runs.
#[derive(Parser, Debug)]
#[command(name = "market-cart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "MARKET_CART_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of the file-backed store (overrides storage.dir)
    #[arg(long, global = true, env = "MARKET_CART_STORAGE_DIR")]
    pub storage_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add one unit of a product to the cart
    Add(AddArgs),

    /// Increase the quantity of a cart item by one
    Inc(ItemArgs),

    /// Decrease the quantity of a cart item by one, removing it at zero
    Dec(ItemArgs),

    /// Show the cart contents
    List(ListArgs),

    /// Remove every item from the cart
    Clear,

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Product identifier
    #[arg(long)]
    pub id: String,

    /// Display name
    #[arg(long)]
    pub title: String,

    /// Display image reference
    #[arg(long, default_value = "")]
    pub image_url: String,

    /// Unit price
    #[arg(long)]
    pub price: f64,
}

/// Arguments for commands that target one cart item
#[derive(Parser, Debug)]
pub struct ItemArgs {
    /// Product identifier
    pub id: String,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., storage.key)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Output format for list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one item per line)
    Plain,
}
