//! Search results.

use crate::catalog::Product;
use serde::Serialize;
use std::collections::BTreeMap;

/// Products matching a query, in result order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResults {
    /// Matching products.
    pub products: Vec<Product>,
    /// Number of matches.
    pub total: usize,
}

impl SearchResults {
    pub fn new(products: Vec<Product>) -> Self {
        let total = products.len();
        Self { products, total }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Count of matches per category, for facet display.
    pub fn category_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for product in &self.products {
            *counts.entry(product.category.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Summary line such as "3 products found".
    pub fn summary(&self) -> String {
        match self.total {
            1 => "1 product found".to_string(),
            n => format!("{} products found", n),
        }
    }
}
