//! market-cart - Shopping cart state container
//!
//! Holds cart line items in memory, exposes add/increment/decrement, and
//! keeps one persisted snapshot of the cart in a key-value store.
//!
//! ```rust,ignore
//! use market_cart::{CartHandle, MemoryStore, NewCartItem};
//! use std::sync::Arc;
//!
//! let cart = CartHandle::open(Arc::new(MemoryStore::new())).await;
//! cart.add_to_cart(NewCartItem::new("A", "Mug", "http://img/mug.png", 10.0)).await?;
//! cart.decrement("A").await;
//! assert!(cart.products().await.is_empty());
//! ```

pub mod cart;
pub mod cli;
pub mod config;
pub mod error;
pub mod storage;
pub mod ui;

pub use cart::{AddOutcome, CartHandle, CartItem, CartState, CartStore, NewCartItem};
pub use error::{CartError, CartResult};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
