//! Shopping cart module

pub mod handle;
pub mod item;
pub mod state;
pub mod store;

pub use handle::CartHandle;
pub use item::{CartItem, NewCartItem};
pub use state::{AddOutcome, CartState};
pub use store::{CartStore, DEFAULT_CART_KEY};
