//! Cart line items

use crate::error::{CartError, CartResult};
use serde::{Deserialize, Serialize};

/// One distinct product in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier, unique within a cart
    pub id: String,

    /// Display name
    pub title: String,

    /// Display image reference
    pub image_url: String,

    /// Unit price, in whatever currency unit the caller uses
    pub price: f64,

    /// Number of units, always at least 1 inside a cart
    pub quantity: u32,
}

impl CartItem {
    /// Price of all units of this item
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A product descriptor without a quantity, as passed to `add_to_cart`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCartItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
}

impl NewCartItem {
    /// Create a new descriptor
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
        }
    }

    /// Reject prices that cannot round-trip through a JSON snapshot
    pub fn validate(&self) -> CartResult<()> {
        if !self.price.is_finite() {
            return Err(CartError::InvalidPrice {
                id: self.id.clone(),
                price: self.price,
            });
        }
        Ok(())
    }

    /// Turn the descriptor into a cart item holding a single unit
    pub fn into_item(self) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity: 1,
        }
    }
}
