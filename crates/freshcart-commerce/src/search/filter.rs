//! Search filter types.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// A product filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Case-insensitive substring of name or brand.
    Text(String),
    /// Exact category; "all" matches everything.
    Category(String),
    /// Product must carry the tag (explicit or derived).
    Tag(String),
    /// Product must carry every tag.
    Tags(Vec<String>),
    /// Case-insensitive brand equality.
    Brand(String),
    /// Inclusive price range.
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Only show in-stock items.
    InStock,
}

impl Filter {
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    pub fn category(category: impl Into<String>) -> Self {
        Filter::Category(category.into())
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Filter::Tag(tag.into())
    }

    pub fn brand(brand: impl Into<String>) -> Self {
        Filter::Brand(brand.into())
    }

    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    pub fn in_stock() -> Self {
        Filter::InStock
    }

    /// Whether `product` passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(query) => {
                let needle = query.trim().to_lowercase();
                needle.is_empty()
                    || product.name.to_lowercase().contains(&needle)
                    || product.brand.to_lowercase().contains(&needle)
            }
            Filter::Category(category) => {
                category.eq_ignore_ascii_case(ALL_CATEGORIES) || product.category == *category
            }
            Filter::Tag(tag) => product.has_tag(tag),
            Filter::Tags(tags) => tags.iter().all(|t| product.has_tag(t)),
            Filter::Brand(brand) => product.brand.eq_ignore_ascii_case(brand),
            Filter::PriceRange { min, max } => {
                let cents = product.price.amount_cents;
                min.map_or(true, |m| cents >= m.amount_cents)
                    && max.map_or(true, |m| cents <= m.amount_cents)
            }
            Filter::InStock => product.in_stock,
        }
    }
}
