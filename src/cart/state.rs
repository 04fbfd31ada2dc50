//! In-memory cart contents and the pure operations over them
//!
//! Nothing here performs I/O; `CartStore` pairs these operations with
//! persistence.

use crate::cart::item::{CartItem, NewCartItem};
use serde::{Deserialize, Serialize};

/// Result of adding a descriptor to the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The id was new and the item was appended with quantity 1
    Inserted,
    /// The id was already present and its quantity went up by one
    Incremented,
}

/// Ordered cart contents, unique by item id
///
/// Serialized as a plain JSON array; decoding goes through
/// `CartState::from_items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from a decoded snapshot.
    ///
    /// Zero-quantity entries are dropped and repeated ids are folded into
    /// their first occurrence, so a hand-edited snapshot cannot break the
    /// cart invariants.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut state = Self::new();

        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match state.position(&item.id) {
                Some(idx) => {
                    let existing = &mut state.items[idx];
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => state.items.push(item),
            }
        }

        state
    }

    /// Items in insertion order
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of distinct items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item quantities
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of all item subtotals
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Add one unit of a product.
    ///
    /// An existing item keeps its title, image and price; only its quantity
    /// changes. The descriptor's other fields are discarded.
    pub fn add(&mut self, item: NewCartItem) -> AddOutcome {
        match self.position(&item.id) {
            Some(idx) => {
                let existing = &mut self.items[idx];
                existing.quantity = existing.quantity.saturating_add(1);
                AddOutcome::Incremented
            }
            None => {
                self.items.push(item.into_item());
                AddOutcome::Inserted
            }
        }
    }

    /// Add one unit to the item with `id`; returns false if no item matched
    pub fn increment(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(idx) => {
                let item = &mut self.items[idx];
                item.quantity = item.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Remove one unit from the item with `id`; the last unit removes the
    /// item. Returns false if no item matched.
    pub fn decrement(&mut self, id: &str) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };

        if self.items[idx].quantity < 2 {
            self.items.remove(idx);
        } else {
            self.items[idx].quantity -= 1;
        }
        true
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl From<Vec<CartItem>> for CartState {
    fn from(items: Vec<CartItem>) -> Self {
        Self::from_items(items)
    }
}

impl From<CartState> for Vec<CartItem> {
    fn from(state: CartState) -> Self {
        state.items
    }
}
