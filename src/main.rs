//! market-cart CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use market_cart::cli::{Cli, Commands};
use market_cart::config::{Config, ConfigManager};
use market_cart::error::CartResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> CartResult<()> {
    let cli = Cli::parse();

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };

    let mut config = config_manager.load().await?;
    init_logging(cli.verbose, &config);

    if let Some(dir) = cli.storage_dir {
        debug!("Storage dir overridden: {}", dir.display());
        config.storage.dir = Some(dir);
    }

    match cli.command {
        Commands::Add(args) => market_cart::cli::commands::add(args, &config).await,
        Commands::Inc(args) => market_cart::cli::commands::increment(args, &config).await,
        Commands::Dec(args) => market_cart::cli::commands::decrement(args, &config).await,
        Commands::List(args) => market_cart::cli::commands::list(args, &config).await,
        Commands::Clear => market_cart::cli::commands::clear(&config).await,
        Commands::Config(args) => {
            market_cart::cli::commands::config(args, &config, &config_manager).await
        }
    }
}

/// 0 = warn, 1 = info, 2+ = debug; logs go to stderr
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::new("market_cart=warn"),
        1 => EnvFilter::new("market_cart=info"),
        _ => EnvFilter::new("market_cart=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
