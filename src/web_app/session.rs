// web_app/session.rs - Local per-session state
//
// Cart, favorites, and the login flag live only as long as the browser
// tab. Nothing is persisted and no id is checked against the catalog.
// The search descriptor is not here: the search page owns it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub quantity: u32,
}

/// Everything one visitor can change
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    cart: Vec<CartLine>,
    favorites: BTreeSet<String>,
    logged_in: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            cart: Vec::new(),
            favorites: BTreeSet::new(),
            logged_in: false,
        }
    }

    /// Add one unit of a product; returns the new total item count
    pub fn add_to_cart(&mut self, product_id: &str) -> usize {
        match self
            .cart
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            Some(line) => line.quantity += 1,
            None => self.cart.push(CartLine {
                product_id: product_id.to_string(),
                quantity: 1,
            }),
        }

        let count = self.cart_item_count();
        tracing::info!(session = %self.id, "Add to cart: {} ({} items in cart)", product_id, count);
        count
    }

    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    pub fn cart_item_count(&self) -> usize {
        self.cart.iter().map(|line| line.quantity as usize).sum()
    }

    /// Flip favorite membership; returns whether it is now a favorite
    pub fn toggle_favorite(&mut self, product_id: &str) -> bool {
        let now_favorite = if self.favorites.remove(product_id) {
            false
        } else {
            self.favorites.insert(product_id.to_string());
            true
        };

        tracing::info!(
            session = %self.id,
            "Toggle favorite: {} -> {}",
            product_id,
            now_favorite
        );
        now_favorite
    }

    pub fn is_favorite(&self, product_id: &str) -> bool {
        self.favorites.contains(product_id)
    }

    pub fn favorites(&self) -> impl Iterator<Item = &str> {
        self.favorites.iter().map(String::as_str)
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// There is no authentication; this only flips the header button
    pub fn toggle_login(&mut self) -> bool {
        self.logged_in = !self.logged_in;
        tracing::info!(session = %self.id, "Logged in: {}", self.logged_in);
        self.logged_in
    }
}
