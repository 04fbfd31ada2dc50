//! Cart store: in-memory state plus snapshot persistence
//!
//! The store restores its contents once at startup (the snapshot key is
//! cleared after reading) and writes the whole cart back under the same key
//! after every mutation.

use crate::cart::item::{CartItem, NewCartItem};
use crate::cart::state::{AddOutcome, CartState};
use crate::error::{CartError, CartResult};
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Storage key holding the cart snapshot
pub const DEFAULT_CART_KEY: &str = "market:cartproducts";

/// Owns the cart and keeps a single persisted snapshot of it
pub struct CartStore<S: KeyValueStore> {
    state: CartState,
    storage: Arc<S>,
    key: String,
    persist_failed: bool,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create an empty store using the default snapshot key
    pub fn new(storage: Arc<S>) -> Self {
        Self::with_key(storage, DEFAULT_CART_KEY)
    }

    /// Create an empty store using a custom snapshot key
    pub fn with_key(storage: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            state: CartState::new(),
            storage,
            key: key.into(),
            persist_failed: false,
        }
    }

    /// Create a store and restore the persisted snapshot into it
    pub async fn open(storage: Arc<S>) -> Self {
        let mut store = Self::new(storage);
        store.restore().await;
        store
    }

    /// Load the persisted snapshot into memory and clear it from storage.
    ///
    /// A missing or undecodable snapshot leaves the cart empty. If the
    /// storage read itself fails the key is left in place for a later run.
    /// Failures are logged, never returned.
    pub async fn restore(&mut self) {
        let content = match self.storage.get(&self.key).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read cart snapshot {}: {}", self.key, e);
                return;
            }
        };

        match content.map(|c| serde_json::from_str::<CartState>(&c)) {
            Some(Ok(state)) => {
                info!(
                    "Restored {} cart item(s) from {} storage",
                    state.len(),
                    self.storage.backend_name()
                );
                self.state = state;
            }
            Some(Err(e)) => warn!("Ignoring unreadable cart snapshot {}: {}", self.key, e),
            None => debug!("No cart snapshot under {}", self.key),
        }

        if let Err(e) = self.storage.remove(&self.key).await {
            warn!("Failed to clear cart snapshot {}: {}", self.key, e);
        }
    }

    /// Current cart contents
    pub fn products(&self) -> &[CartItem] {
        self.state.items()
    }

    /// Current cart state, including totals
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Snapshot key this store writes to
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Add one unit of a product and persist the cart.
    ///
    /// A non-finite price is rejected before the cart is touched.
    pub async fn add_to_cart(&mut self, item: NewCartItem) -> CartResult<AddOutcome> {
        item.validate()?;

        let id = item.id.clone();
        let outcome = self.state.add(item);
        debug!("add_to_cart {}: {:?}", id, outcome);
        self.persist_logged().await;
        Ok(outcome)
    }

    /// Add one unit to an existing item and persist the cart.
    ///
    /// An unknown id leaves the cart unchanged but still rewrites the
    /// snapshot. Returns whether an item matched.
    pub async fn increment(&mut self, id: &str) -> bool {
        let matched = self.state.increment(id);
        debug!("increment {}: matched={}", id, matched);
        self.persist_logged().await;
        matched
    }

    /// Remove one unit from an item and persist the cart.
    ///
    /// Removing the last unit drops the item. Returns whether an item
    /// matched.
    pub async fn decrement(&mut self, id: &str) -> bool {
        let matched = self.state.decrement(id);
        debug!("decrement {}: matched={}", id, matched);
        self.persist_logged().await;
        matched
    }

    /// Empty the cart and persist the empty snapshot
    pub async fn clear(&mut self) {
        self.state.clear();
        debug!("cleared cart");
        self.persist_logged().await;
    }

    /// Whether the most recent snapshot write failed
    pub fn persist_failed(&self) -> bool {
        self.persist_failed
    }

    /// Write the current cart to storage, returning any failure
    pub async fn flush(&mut self) -> CartResult<()> {
        let result = self.write_snapshot().await;
        self.persist_failed = result.is_err();
        result
    }

    async fn persist_logged(&mut self) {
        if let Err(e) = self.flush().await {
            warn!("Failed to persist cart snapshot {}: {}", self.key, e);
        }
    }

    async fn write_snapshot(&self) -> CartResult<()> {
        // serde_json writes NaN and infinity as null, which would not decode
        if let Some(item) = self.products().iter().find(|item| !item.price.is_finite()) {
            return Err(CartError::InvalidPrice {
                id: item.id.clone(),
                price: item.price,
            });
        }

        let content = serde_json::to_string(&self.state)?;
        self.storage.set(&self.key, &content).await?;
        debug!("Persisted {} cart item(s) to {}", self.state.len(), self.key);
        Ok(())
    }

}
