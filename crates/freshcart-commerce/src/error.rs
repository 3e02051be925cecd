//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Requested quantity is not a positive integer.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Checkout attempted with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// The order collaborator rejected or failed the submission.
    #[error("Failed to submit order: {0}")]
    SubmissionFailed(String),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::ConfigError(e.to_string())
    }
}
