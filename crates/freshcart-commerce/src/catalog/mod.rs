//! Product catalog module.
//!
//! Contains the product type, its nutrition facts and the in-memory catalog
//! the storefront browses and searches.

mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::{NutritionFacts, Product, ProductRecord};
