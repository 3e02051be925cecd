//! Cart state and its transition function.
//!
//! `CartState::apply` is a pure function from the current state and a
//! command to the next state. It never mutates `self`, so a rejected command
//! leaves the caller holding the untouched previous state.

use crate::cart::{CartItem, LineItem};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::nutrition::Nutrition;
use serde::{Deserialize, Serialize};

/// A cart mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartCommand {
    /// Add `quantity` units of a product, merging with an existing line.
    AddItem { item: CartItem, quantity: i64 },
    /// Set a line's quantity exactly. Zero or below removes the line.
    UpdateQuantity { id: ProductId, quantity: i64 },
    /// Remove a line.
    RemoveItem { id: ProductId },
    /// Empty the cart.
    ClearCart,
}

impl CartCommand {
    /// Add a single unit.
    pub fn add(item: CartItem) -> Self {
        CartCommand::AddItem { item, quantity: 1 }
    }

    pub fn update(id: impl Into<ProductId>, quantity: i64) -> Self {
        CartCommand::UpdateQuantity {
            id: id.into(),
            quantity,
        }
    }

    pub fn remove(id: impl Into<ProductId>) -> Self {
        CartCommand::RemoveItem { id: id.into() }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CartCommand::AddItem { .. } => "add_item",
            CartCommand::UpdateQuantity { .. } => "update_quantity",
            CartCommand::RemoveItem { .. } => "remove_item",
            CartCommand::ClearCart => "clear_cart",
        }
    }
}

/// Line items plus their cached total.
///
/// `total` is private and only ever produced by summing the line totals, so
/// it cannot drift from `items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartState {
    items: Vec<LineItem>,
    total: Money,
    currency: Currency,
}

impl CartState {
    /// An empty cart in the given currency.
    pub fn empty(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            total: Money::zero(currency),
            currency,
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn total_item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Per-nutrient sum of `value * quantity`.
    pub fn nutrition_totals(&self) -> Nutrition {
        self.items.iter().map(LineItem::nutrition_total).sum()
    }

    pub fn find_item(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Compute the state that results from `command`.
    pub fn apply(&self, command: &CartCommand) -> Result<CartState, CommerceError> {
        match command {
            CartCommand::AddItem { item, quantity } => self.adding(item, *quantity),
            CartCommand::UpdateQuantity { id, quantity } => {
                if *quantity <= 0 {
                    Ok(self.without(id))
                } else {
                    self.updating(id, *quantity)
                }
            }
            CartCommand::RemoveItem { id } => Ok(self.without(id)),
            CartCommand::ClearCart => Ok(CartState::empty(self.currency)),
        }
    }

    fn adding(&self, item: &CartItem, quantity: i64) -> Result<CartState, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        item.validate()?;
        if item.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: item.price.currency.code().to_string(),
            });
        }

        let mut items = self.items.clone();
        match items.iter_mut().find(|i| i.id() == &item.id) {
            // First write wins: only the quantity of an existing line changes.
            Some(existing) => {
                let new_quantity = existing
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CommerceError::Overflow)?;
                *existing = existing.with_quantity(new_quantity)?;
            }
            None => items.push(LineItem::new(item.clone(), quantity)?),
        }
        self.with_items(items)
    }

    fn updating(&self, id: &ProductId, quantity: i64) -> Result<CartState, CommerceError> {
        let Some(position) = self.items.iter().position(|i| i.id() == id) else {
            return Ok(self.clone());
        };

        let mut items = self.items.clone();
        items[position] = items[position].with_quantity(quantity)?;
        self.with_items(items)
    }

    pub(crate) fn without(&self, id: &ProductId) -> CartState {
        let items: Vec<LineItem> = self
            .items
            .iter()
            .filter(|i| i.id() != id)
            .cloned()
            .collect();
        // Line totals are non-negative and their full sum already fit in an
        // i64, so any subset sum fits too.
        let total = Money::new(
            items.iter().map(|i| i.total_price.amount_cents).sum(),
            self.currency,
        );
        CartState {
            items,
            total,
            currency: self.currency,
        }
    }

    fn with_items(&self, items: Vec<LineItem>) -> Result<CartState, CommerceError> {
        let total = Money::try_sum(items.iter().map(|i| &i.total_price), self.currency)
            .ok_or(CommerceError::Overflow)?;
        Ok(CartState {
            items,
            total,
            currency: self.currency,
        })
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::empty(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn item(id: &str, cents: i64) -> CartItem {
        CartItem::new(id, format!("Product {}", id), usd(cents))
    }

    fn add(state: &CartState, item: CartItem, quantity: i64) -> CartState {
        state
            .apply(&CartCommand::AddItem { item, quantity })
            .unwrap()
    }

    #[test]
    fn test_add_update_remove_scenario() {
        let s = CartState::default();

        let s = add(&s, item("a", 1000), 1);
        assert_eq!(s.items().len(), 1);
        assert_eq!(s.total(), usd(1000));

        let s = add(&s, item("a", 1000), 2);
        assert_eq!(s.find_item(&"a".into()).unwrap().quantity, 3);
        assert_eq!(s.total(), usd(3000));

        let s = s.apply(&CartCommand::update("a", 1)).unwrap();
        assert_eq!(s.find_item(&"a".into()).unwrap().quantity, 1);
        assert_eq!(s.total(), usd(1000));

        let s = s.apply(&CartCommand::remove("a")).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.total(), usd(0));
    }

    #[test]
    fn test_two_products_total_and_count() {
        let s = add(&CartState::default(), item("b", 1500), 1);
        let s = add(&s, item("c", 500), 4);
        assert_eq!(s.total(), usd(3500));
        assert_eq!(s.total_item_count(), 5);
        assert_eq!(s.unique_item_count(), 2);
    }

    #[test]
    fn test_add_same_id_twice_merges() {
        let s = add(&CartState::default(), item("x", 100), 1);
        let s = add(&s, item("x", 100), 1);
        assert_eq!(s.items().len(), 1);
        assert_eq!(s.items()[0].quantity, 2);
    }

    #[test]
    fn test_first_write_wins_for_descriptive_fields() {
        let s = add(&CartState::default(), item("x", 100).with_image("first"), 1);
        let later = CartItem::new("x", "Renamed", usd(999)).with_image("second");
        let s = add(&s, later, 1);

        let line = s.find_item(&"x".into()).unwrap();
        assert_eq!(line.name(), "Product x");
        assert_eq!(line.price(), usd(100));
        assert_eq!(line.item.image, "first");
        assert_eq!(s.total(), usd(200));
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let s = add(&CartState::default(), item("a", 100), 1);
        for quantity in [0, -1, -3] {
            let result = s.apply(&CartCommand::AddItem {
                item: item("b", 100),
                quantity,
            });
            assert_eq!(result, Err(CommerceError::InvalidQuantity(quantity)));
        }
        assert_eq!(s.items().len(), 1);
    }

    #[test]
    fn test_update_to_zero_or_negative_removes() {
        let s = add(&CartState::default(), item("a", 100), 2);
        let s = add(&s, item("b", 50), 1);

        let zero = s.apply(&CartCommand::update("a", 0)).unwrap();
        assert!(zero.find_item(&"a".into()).is_none());
        assert_eq!(zero.total(), usd(50));

        let negative = s.apply(&CartCommand::update("a", -3)).unwrap();
        assert!(negative.find_item(&"a".into()).is_none());
        assert_eq!(negative.total(), usd(50));
    }

    #[test]
    fn test_update_sets_exact_quantity() {
        let s = add(&CartState::default(), item("a", 100), 5);
        let s = s.apply(&CartCommand::update("a", 2)).unwrap();
        assert_eq!(s.items()[0].quantity, 2);
        assert_eq!(s.total(), usd(200));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let s = add(&CartState::default(), item("a", 100), 1);
        assert_eq!(s.apply(&CartCommand::remove("nonexistent")).unwrap(), s);
        assert_eq!(s.apply(&CartCommand::update("nonexistent", 4)).unwrap(), s);
        assert_eq!(s.apply(&CartCommand::update("nonexistent", 0)).unwrap(), s);
    }

    #[test]
    fn test_clear_resets() {
        let s = add(&CartState::default(), item("a", 100), 3);
        let s = add(&s, item("b", 250), 1);
        let cleared = s.apply(&CartCommand::ClearCart).unwrap();
        assert!(cleared.is_empty());
        assert_eq!(cleared.total(), usd(0));
        assert_eq!(cleared.currency(), Currency::USD);
    }

    #[test]
    fn test_quantities_are_uncapped() {
        let s = add(&CartState::default(), item("a", 100), 1);

        let s = s.apply(&CartCommand::update("a", 10_000)).unwrap();
        assert_eq!(s.items()[0].quantity, 10_000);
        assert_eq!(s.total(), usd(1_000_000));

        let s = add(&s, item("a", 100), 5);
        assert_eq!(s.items()[0].quantity, 10_005);
        assert_eq!(s.total(), usd(1_000_500));
    }

    #[test]
    fn test_update_overflowing_line_total_is_rejected() {
        let s = add(&CartState::default(), item("a", 100), 1);
        let result = s.apply(&CartCommand::update("a", i64::MAX));
        assert_eq!(result, Err(CommerceError::Overflow));
        assert_eq!(s.items()[0].quantity, 1);
    }

    #[test]
    fn test_total_overflow_is_reported() {
        let s = add(&CartState::default(), item("a", i64::MAX / 2), 1);
        let result = s.apply(&CartCommand::AddItem {
            item: item("b", i64::MAX / 2),
            quantity: 2,
        });
        assert_eq!(result, Err(CommerceError::Overflow));
    }

    #[test]
    fn test_currency_mismatch() {
        let s = CartState::default();
        let eur = CartItem::new("e", "Euro cheese", Money::new(100, Currency::EUR));
        assert!(matches!(
            s.apply(&CartCommand::add(eur)),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_nutrition_totals() {
        let banana = item("1", 299).with_nutrition(Nutrition::new(89.0, 1.1, 22.8, 0.3));
        let avocado = item("2", 499).with_nutrition(Nutrition::new(234.0, 2.9, 12.8, 21.4));
        let s = add(&CartState::default(), banana, 2);
        let s = add(&s, avocado, 1);

        let totals = s.nutrition_totals();
        assert!((totals.calories - 412.0).abs() < 1e-9);
        assert!((totals.protein - 5.1).abs() < 1e-9);
        assert!((totals.carbs - 58.4).abs() < 1e-9);
        assert!((totals.fats - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_command_serde_tag() {
        let json = serde_json::to_value(CartCommand::update("a", 2)).unwrap();
        assert_eq!(json["type"], "update_quantity");
        let back: CartCommand = serde_json::from_value(json).unwrap();
        assert_eq!(back, CartCommand::update("a", 2));
    }
}
