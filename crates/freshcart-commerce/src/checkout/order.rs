//! Order payload and checkout summary.

use crate::cart::{CartState, LineItem};
use crate::error::CommerceError;
use crate::money::Money;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One line of an order submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price as a decimal amount.
    pub price: f64,
    pub quantity: i64,
}

impl From<&LineItem> for OrderItem {
    fn from(line: &LineItem) -> Self {
        Self {
            name: line.item.name.clone(),
            description: line.item.description.clone(),
            price: line.price().to_decimal(),
            quantity: line.quantity,
        }
    }
}

/// Order submission body: `{date, total_amount, items}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderPayload {
    /// Order date as a `YYYYMMDD` integer.
    pub date: i64,
    /// Cart total as a decimal amount.
    pub total_amount: f64,
    pub items: Vec<OrderItem>,
}

impl OrderPayload {
    /// Build the payload from a cart snapshot.
    pub fn from_cart(cart: &CartState, date: NaiveDate) -> Self {
        Self {
            date: encode_date(date),
            total_amount: cart.total().to_decimal(),
            items: cart.items().iter().map(OrderItem::from).collect(),
        }
    }

    /// Sum of item quantities.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn to_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// `YYYYMMDD` as an integer, e.g. 2025-07-01 -> 20250701.
pub(crate) fn encode_date(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Amounts shown on the checkout page and in the cart drawer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSummary {
    /// Cart total.
    pub subtotal: Money,
    /// Flat delivery fee; zero for an empty cart.
    pub delivery_fee: Money,
    /// Subtotal plus delivery fee.
    pub grand_total: Money,
    /// How much more the cart needs to reach the free-delivery threshold.
    /// Informational only; the fee is still charged.
    pub remaining_for_free_delivery: Money,
    /// Sum of quantities.
    pub item_count: i64,
}

impl CheckoutSummary {
    /// Summarise `cart`.
    ///
    /// The delivery fee is only charged when the cart has at least one line.
    pub fn new(
        cart: &CartState,
        delivery_fee: Money,
        free_delivery_threshold: Money,
    ) -> Result<Self, CommerceError> {
        let subtotal = cart.total();
        let delivery_fee = if cart.is_empty() {
            Money::zero(subtotal.currency)
        } else {
            delivery_fee
        };
        let grand_total = subtotal
            .try_add(&delivery_fee)
            .ok_or_else(|| arithmetic_error(subtotal, delivery_fee))?;

        if free_delivery_threshold.currency != subtotal.currency {
            return Err(arithmetic_error(subtotal, free_delivery_threshold));
        }
        let remaining = free_delivery_threshold
            .amount_cents
            .saturating_sub(subtotal.amount_cents)
            .max(0);

        Ok(Self {
            subtotal,
            delivery_fee,
            grand_total,
            remaining_for_free_delivery: Money::new(remaining, subtotal.currency),
            item_count: cart.total_item_count(),
        })
    }

    /// Whether the subtotal has reached the free-delivery threshold.
    pub fn qualifies_for_free_delivery(&self) -> bool {
        self.remaining_for_free_delivery.is_zero()
    }
}

fn arithmetic_error(subtotal: Money, other: Money) -> CommerceError {
    if other.currency != subtotal.currency {
        CommerceError::CurrencyMismatch {
            expected: subtotal.currency.code().to_string(),
            got: other.currency.code().to_string(),
        }
    } else {
        CommerceError::Overflow
    }
}
