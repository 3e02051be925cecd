//! The owned cart store.

use crate::cart::{CartCommand, CartItem, CartState, LineItem};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::nutrition::Nutrition;
use tracing::debug;

/// Single-writer owner of a [`CartState`].
///
/// Commands are applied as whole-state replacements: the next state is
/// computed first and swapped in only if the command succeeded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// Create an empty cart priced in USD.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart priced in `currency`.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            state: CartState::empty(currency),
        }
    }

    /// Apply a command.
    pub fn dispatch(&mut self, command: CartCommand) -> Result<(), CommerceError> {
        let next = self.state.apply(&command)?;
        debug!(
            command = command.as_str(),
            items = next.unique_item_count(),
            total_cents = next.total().amount_cents,
            "cart updated"
        );
        self.state = next;
        Ok(())
    }

    /// Add `quantity` units of a product.
    ///
    /// Returns an error if:
    /// - Quantity is not positive
    /// - The descriptor fails validation or is priced in another currency
    /// - The merged quantity or a total no longer fits in an `i64`
    pub fn add_item(&mut self, item: CartItem, quantity: i64) -> Result<(), CommerceError> {
        self.dispatch(CartCommand::AddItem { item, quantity })
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, item: CartItem) -> Result<(), CommerceError> {
        self.add_item(item, 1)
    }

    /// Set a line's quantity. A quantity of zero or below removes the line.
    ///
    /// Returns `Ok(false)` without touching the cart when `id` is unknown.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<bool, CommerceError> {
        if !self.contains(id) {
            debug!(product_id = %id, quantity, "update for product not in cart ignored");
            return Ok(false);
        }
        self.dispatch(CartCommand::UpdateQuantity {
            id: id.clone(),
            quantity,
        })?;
        Ok(true)
    }

    /// Remove a line. Returns `false` when `id` is unknown.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        if !self.contains(id) {
            debug!(product_id = %id, "remove for product not in cart ignored");
            return false;
        }
        self.state = self.state.without(id);
        debug!(product_id = %id, total_cents = self.state.total().amount_cents, "item removed");
        true
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.state = CartState::empty(self.state.currency());
        debug!("cart cleared");
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Read-once copy of the current state, e.g. for checkout.
    pub fn snapshot(&self) -> CartState {
        self.state.clone()
    }

    pub fn items(&self) -> &[LineItem] {
        self.state.items()
    }

    pub fn total(&self) -> Money {
        self.state.total()
    }

    pub fn currency(&self) -> Currency {
        self.state.currency()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn total_item_count(&self) -> i64 {
        self.state.total_item_count()
    }

    pub fn unique_item_count(&self) -> usize {
        self.state.unique_item_count()
    }

    pub fn nutrition_totals(&self) -> Nutrition {
        self.state.nutrition_totals()
    }

    pub fn find_item(&self, id: &ProductId) -> Option<&LineItem> {
        self.state.find_item(id)
    }

    fn contains(&self, id: &ProductId) -> bool {
        self.state.find_item(id).is_some()
    }
}
