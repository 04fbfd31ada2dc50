//! Shared consumer handle for a cart store
//!
//! The application builds one `CartStore`, wraps it in a `CartHandle`, and
//! hands clones of the handle to every consumer. Operations are serialized
//! through a single async mutex, and each persist completes before the next
//! mutation starts.

use crate::cart::item::{CartItem, NewCartItem};
use crate::cart::state::AddOutcome;
use crate::cart::store::CartStore;
use crate::error::CartResult;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Cloneable handle to a shared `CartStore`
pub struct CartHandle<S: KeyValueStore> {
    inner: Arc<Mutex<CartStore<S>>>,
}

impl<S: KeyValueStore> Clone for CartHandle<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore> CartHandle<S> {
    /// Wrap an existing store
    pub fn new(store: CartStore<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Open a store on `storage`, restore its snapshot, and wrap it
    pub async fn open(storage: Arc<S>) -> Self {
        Self::new(CartStore::open(storage).await)
    }

    /// Owned copy of the current cart contents
    pub async fn products(&self) -> Vec<CartItem> {
        self.inner.lock().await.products().to_vec()
    }

    pub async fn add_to_cart(&self, item: NewCartItem) -> CartResult<AddOutcome> {
        self.inner.lock().await.add_to_cart(item).await
    }

    pub async fn increment(&self, id: &str) -> bool {
        self.inner.lock().await.increment(id).await
    }

    pub async fn decrement(&self, id: &str) -> bool {
        self.inner.lock().await.decrement(id).await
    }

    pub async fn clear(&self) {
        self.inner.lock().await.clear().await
    }

    pub async fn flush(&self) -> CartResult<()> {
        self.inner.lock().await.flush().await
    }
}
