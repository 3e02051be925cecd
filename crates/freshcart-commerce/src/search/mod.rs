//! Search module.
//!
//! In-memory filtering and sorting over catalog products.

mod query;
mod filter;
mod results;

pub use query::{SearchQuery, SortOption};
pub use filter::Filter;
pub use results::SearchResults;
