//! In-memory product catalog.

use crate::catalog::{Product, ProductRecord};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;
use crate::search::{SearchQuery, SearchResults};
use std::collections::BTreeSet;

const FIXTURE: &str = include_str!("../../data/products.json");

/// An owned list of products, kept in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in grocery fixture, priced in `currency`.
    pub fn fixture(currency: Currency) -> Result<Self, CommerceError> {
        Self::from_json(FIXTURE, currency)
    }

    /// Parse a JSON array of product records.
    pub fn from_json(json: &str, currency: Currency) -> Result<Self, CommerceError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        let mut seen = BTreeSet::new();
        let mut products = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id.clone()) {
                return Err(CommerceError::ValidationError(format!(
                    "duplicate product id: {}",
                    record.id
                )));
            }
            products.push(record.into_product(currency));
        }
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product, failing with `ProductNotFound`.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.products.iter().map(|p| p.category.as_str()).collect();
        set.into_iter().collect()
    }

    /// Distinct brands, sorted.
    pub fn brands(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.products.iter().map(|p| p.brand.as_str()).collect();
        set.into_iter().collect()
    }

    pub fn search(&self, query: &SearchQuery) -> SearchResults {
        query.run(&self.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_loads() {
        let catalog = Catalog::fixture(Currency::USD).unwrap();
        assert_eq!(catalog.len(), 7);
        let bananas = catalog.get(&"1".into()).unwrap();
        assert_eq!(bananas.price.amount_cents, 299);
    }

    #[test]
    fn test_categories_and_brands() {
        let catalog = Catalog::fixture(Currency::USD).unwrap();
        assert_eq!(
            catalog.categories(),
            vec!["beverages", "dairy", "fruits", "snacks", "vegetables"]
        );
        assert!(catalog.brands().contains(&"Green Valley"));
    }

    #[test]
    fn test_require_missing() {
        let catalog = Catalog::fixture(Currency::USD).unwrap();
        assert_eq!(
            catalog.require(&"404".into()),
            Err(CommerceError::ProductNotFound("404".to_string()))
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[{"id":"1","name":"A","price":1.0},{"id":"1","name":"B","price":2.0}]"#;
        assert!(matches!(
            Catalog::from_json(json, Currency::USD),
            Err(CommerceError::ValidationError(_))
        ));
    }
}
