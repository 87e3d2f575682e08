//! The quote cart.
//!
//! Customers collect products here before submitting a quote request. The
//! cart is the one piece of client state with real mutation logic, so it
//! lives as a plain model with unit tests and the UI layer only persists it.

use api::models::QuoteItem;
use serde::{Deserialize, Serialize};

use crate::backend::{Scope, Store};

const CART_KEY: &str = "quotedesk.cart";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub image: Option<String>,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn load(store: &Store) -> Self {
        store.get_json(Scope::Local, CART_KEY).unwrap_or_default()
    }

    pub fn save(&self, store: &Store) {
        store.put_json(Scope::Local, CART_KEY, self);
    }

    /// Add a line; an existing line for the same product absorbs the quantity.
    pub fn add(&mut self, line: CartLine) {
        if line.quantity == 0 {
            return;
        }
        match self
            .lines
            .iter_mut()
            .find(|l| l.product_id == line.product_id)
        {
            Some(existing) => existing.quantity += line.quantity,
            None => self.lines.push(line),
        }
    }

    /// Set a line's quantity; zero removes the line.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines, shown on the header badge.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// The payload shape the quote endpoint expects.
    pub fn to_quote_items(&self) -> Vec<QuoteItem> {
        self.lines
            .iter()
            .map(|l| QuoteItem {
                product_id: l.product_id.clone(),
                product_name: l.name.clone(),
                quantity: l.quantity,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, quantity: u32) -> CartLine {
        CartLine {
            product_id: id.into(),
            name: format!("product {id}"),
            image: None,
            quantity,
        }
    }

    #[test]
    fn test_add_merges_same_product() {
        let mut cart = Cart::default();
        cart.add(line("p1", 10));
        cart.add(line("p2", 5));
        cart.add(line("p1", 15));

        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.lines[0].quantity, 25);
        assert_eq!(cart.item_count(), 30);
    }

    #[test]
    fn test_add_ignores_zero_quantity() {
        let mut cart = Cart::default();
        cart.add(line("p1", 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::default();
        cart.add(line("p1", 10));
        cart.set_quantity("p1", 4);
        assert_eq!(cart.lines[0].quantity, 4);
        cart.set_quantity("p1", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_persistence_round_trip() {
        let store = Store::in_memory();
        let mut cart = Cart::default();
        cart.add(line("p1", 3));
        cart.save(&store);

        let loaded = Cart::load(&store);
        assert_eq!(loaded, cart);

        cart.clear();
        cart.save(&store);
        assert!(Cart::load(&store).is_empty());
    }

    #[test]
    fn test_to_quote_items() {
        let mut cart = Cart::default();
        cart.add(line("p1", 3));
        let items = cart.to_quote_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, "p1");
        assert_eq!(items[0].quantity, 3);
    }
}
