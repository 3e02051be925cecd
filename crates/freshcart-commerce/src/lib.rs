//! Grocery storefront domain types and logic for FreshCart.
//!
//! This crate provides:
//!
//! - **Cart**: the cart store, its commands and the pure state transition
//! - **Catalog**: products, nutrition facts and the built-in fixture
//! - **Search**: in-memory filters and sorting over the catalog
//! - **Checkout**: order payloads, checkout summary and the order sink seam
//!
//! # Example
//!
//! ```rust
//! use freshcart_commerce::prelude::*;
//!
//! let catalog = Catalog::fixture(Currency::USD).unwrap();
//! let bananas = catalog.get(&ProductId::new("1")).unwrap();
//!
//! let mut cart = CartStore::new();
//! cart.add_item(bananas.to_cart_item(), 2).unwrap();
//! cart.add_one(bananas.to_cart_item()).unwrap();
//!
//! assert_eq!(cart.total_item_count(), 3);
//! assert_eq!(cart.total().display(), "$8.97");
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod nutrition;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use config::StoreConfig;
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};
pub use nutrition::Nutrition;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};
    pub use crate::nutrition::Nutrition;

    // Cart
    pub use crate::cart::{CartCommand, CartItem, CartState, CartStore, LineItem};

    // Catalog
    pub use crate::catalog::{Catalog, NutritionFacts, Product};

    // Checkout
    pub use crate::checkout::{
        place_order, CheckoutSummary, ClearPolicy, OrderItem, OrderPayload, OrderSink,
        RecordingOrderSink,
    };

    // Search
    pub use crate::search::{Filter, SearchQuery, SearchResults, SortOption};
}
