//! Storefront settings.

use crate::cart::CartState;
use crate::checkout::{CheckoutSummary, ClearPolicy};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Settings shared by the cart, checkout and catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Currency every price and total is expressed in.
    #[serde(default)]
    pub currency: Currency,

    /// Flat delivery fee added at checkout, as a decimal amount.
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: f64,

    /// When checkout clears the cart.
    #[serde(default)]
    pub clear_policy: ClearPolicy,

    /// Subtotal at which the cart drawer reports free delivery, as a
    /// decimal amount.
    #[serde(default = "default_free_delivery_threshold")]
    pub free_delivery_threshold: f64,
}

fn default_delivery_fee() -> f64 {
    2.99
}

fn default_free_delivery_threshold() -> f64 {
    144.0
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            delivery_fee: default_delivery_fee(),
            clear_policy: ClearPolicy::default(),
            free_delivery_threshold: default_free_delivery_threshold(),
        }
    }
}

impl StoreConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, CommerceError> {
        let config: StoreConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self, CommerceError> {
        let config: StoreConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// The delivery fee in the configured currency.
    pub fn delivery_fee(&self) -> Money {
        Money::from_decimal(self.delivery_fee, self.currency)
    }

    pub fn free_delivery_threshold(&self) -> Money {
        Money::from_decimal(self.free_delivery_threshold, self.currency)
    }

    /// Checkout amounts for `cart` under these settings.
    pub fn checkout_summary(&self, cart: &CartState) -> Result<CheckoutSummary, CommerceError> {
        CheckoutSummary::new(cart, self.delivery_fee(), self.free_delivery_threshold())
    }

    pub fn validate(&self) -> Result<(), CommerceError> {
        check_amount("delivery_fee", self.delivery_fee)?;
        check_amount("free_delivery_threshold", self.free_delivery_threshold)
    }
}

fn check_amount(name: &str, amount: f64) -> Result<(), CommerceError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(CommerceError::ConfigError(format!(
            "{} must be a non-negative amount, got {}",
            name, amount
        )));
    }
    Ok(())
}
