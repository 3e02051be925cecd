//! Search query builder.

use crate::catalog::Product;
use crate::search::{Filter, SearchResults};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Relevance,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// Sort by highest rated.
    Rating,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::NameAsc => "name_asc",
            SortOption::NameDesc => "name_desc",
            SortOption::Rating => "rating",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relevance" => Some(SortOption::Relevance),
            "price_asc" | "price" => Some(SortOption::PriceAsc),
            "price_desc" => Some(SortOption::PriceDesc),
            "name_asc" | "name" => Some(SortOption::NameAsc),
            "name_desc" => Some(SortOption::NameDesc),
            "rating" => Some(SortOption::Rating),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevance",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
            SortOption::Rating => "Highest Rated",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Relevance => Ordering::Equal,
            SortOption::PriceAsc => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortOption::PriceDesc => b.price.amount_cents.cmp(&a.price.amount_cents),
            SortOption::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOption::NameDesc => b.name.to_lowercase().cmp(&a.name.to_lowercase()),
            SortOption::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

/// A search query: filters ANDed together, then a stable sort.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchQuery {
    /// Text query, kept for display.
    pub query: Option<String>,
    /// Filters to apply.
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: SortOption,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query. Blank text adds no filter.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        if !q.trim().is_empty() {
            self.query = Some(q.clone());
            self.filters.push(Filter::Text(q));
        }
        self
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Restrict to a category. "all" leaves the query unfiltered.
    pub fn with_category(self, category: impl Into<String>) -> Self {
        self.with_filter(Filter::category(category))
    }

    /// Require every tag in `tags`.
    pub fn with_tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        if tags.is_empty() {
            return self;
        }
        self.with_filter(Filter::Tags(tags))
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Filter and sort `products`.
    pub fn run(&self, products: &[Product]) -> SearchResults {
        let mut matched: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();
        matched.sort_by(|a, b| self.sort.compare(a, b));
        SearchResults::new(matched)
    }
}
