//! CLI command implementations

pub mod add;
pub mod adjust;
pub mod clear;
pub mod config;
pub mod list;

pub use add::execute as add;
pub use adjust::{decrement, increment};
pub use clear::execute as clear;
pub use config::execute as config;
pub use list::execute as list;

use crate::cart::CartStore;
use crate::config::{Config, ConfigManager};
use crate::error::CartResult;
use crate::storage::FileStore;
use std::sync::Arc;
use tracing::debug;

/// Open the cart on the configured file store and restore its snapshot
async fn open_cart(config: &Config) -> CartStore<FileStore> {
    let dir = ConfigManager::storage_dir(config);
    debug!("Using cart storage at {}", dir.display());

    let mut store = CartStore::with_key(Arc::new(FileStore::new(dir)), &config.storage.key);
    store.restore().await;
    store
}

/// Retry a failed snapshot write once, surfacing the error this time
async fn ensure_persisted(store: &mut CartStore<FileStore>) -> CartResult<()> {
    if store.persist_failed() {
        store.flush().await?;
    }
    Ok(())
}

/// Format a price with the configured currency symbol
fn format_price(config: &Config, amount: f64) -> String {
    format!("{}{:.2}", config.display.currency, amount)
}
