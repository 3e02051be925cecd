//! Cart item descriptors and line items.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::nutrition::Nutrition;
use serde::{Deserialize, Serialize};

/// Product descriptor handed to the cart by the catalog.
///
/// Everything except `id`, `price` and the nutrition values is opaque
/// display data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product identity, unique within a cart.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image key.
    #[serde(default)]
    pub image: String,
    /// Pack size label (e.g., "1 lb").
    #[serde(default)]
    pub weight: String,
    /// Optional description forwarded into order payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Nutrition per unit.
    #[serde(flatten)]
    pub nutrition: Nutrition,
}

impl CartItem {
    /// Create a descriptor with empty display metadata and no nutrition data.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: String::new(),
            weight: String::new(),
            description: None,
            nutrition: Nutrition::default(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_nutrition(mut self, nutrition: Nutrition) -> Self {
        self.nutrition = nutrition;
        self
    }

    /// Check the basic type expectations the cart relies on.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.id.is_blank() {
            return Err(CommerceError::ValidationError(
                "product id must not be empty".to_string(),
            ));
        }
        if self.price.is_negative() {
            return Err(CommerceError::ValidationError(format!(
                "price of {} must not be negative",
                self.id
            )));
        }
        if !self.nutrition.is_valid() {
            return Err(CommerceError::ValidationError(format!(
                "nutrition values of {} must be non-negative",
                self.id
            )));
        }
        Ok(())
    }
}

/// A line item in the cart: a descriptor plus its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Descriptor as stored by the first add for this id.
    #[serde(flatten)]
    pub item: CartItem,
    /// Quantity, always at least 1 while the item is in the cart.
    pub quantity: i64,
    /// `price * quantity`.
    pub total_price: Money,
}

impl LineItem {
    pub(crate) fn new(item: CartItem, quantity: i64) -> Result<Self, CommerceError> {
        let total_price = item
            .price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(Self {
            item,
            quantity,
            total_price,
        })
    }

    /// Return a copy with a different quantity and its line total updated.
    pub(crate) fn with_quantity(&self, quantity: i64) -> Result<Self, CommerceError> {
        LineItem::new(self.item.clone(), quantity)
    }

    pub fn id(&self) -> &ProductId {
        &self.item.id
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.item.price
    }

    /// Nutrition for the whole line (per-unit values times quantity).
    pub fn nutrition_total(&self) -> Nutrition {
        self.item.nutrition.scaled(self.quantity)
    }
}
