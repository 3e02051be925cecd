//! Product types.

use crate::cart::CartItem;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::nutrition::Nutrition;
use serde::{Deserialize, Serialize};

/// Nutrition facts for one unit of a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct NutritionFacts {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fats: f64,
    #[serde(default)]
    pub fiber: f64,
    #[serde(default)]
    pub sugar: f64,
    /// Sodium in milligrams.
    #[serde(default)]
    pub sodium: f64,
}

impl NutritionFacts {
    /// The macronutrients a cart line carries.
    pub fn macros(&self) -> Nutrition {
        Nutrition::new(self.calories, self.protein, self.carbs, self.fats)
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Unit price.
    pub price: Money,
    /// Image key.
    pub image: String,
    /// Category slug (e.g., "fruits").
    pub category: String,
    /// Pack size label.
    pub weight: String,
    /// Long description.
    pub description: String,
    /// Nutrition per unit.
    pub nutrition: NutritionFacts,
    /// Tags for filtering (e.g., "vegan").
    pub tags: Vec<String>,
    /// Whether the product can be ordered.
    pub in_stock: bool,
    /// Average customer rating (0-5).
    pub rating: f64,
    /// Number of customer reviews.
    pub review_count: u32,
}

impl Product {
    /// Build the descriptor the cart stores for this product.
    ///
    /// A blank description is left unset so it is omitted from orders.
    pub fn to_cart_item(&self) -> CartItem {
        let item = CartItem::new(self.id.clone(), self.name.clone(), self.price)
            .with_image(self.image.clone())
            .with_weight(self.weight.clone())
            .with_nutrition(self.nutrition.macros());
        if self.description.trim().is_empty() {
            item
        } else {
            item.with_description(self.description.clone())
        }
    }

    /// Tags implied by the nutrition facts and name.
    pub fn derived_tags(&self) -> Vec<&'static str> {
        let mut tags = Vec::new();
        let n = &self.nutrition;
        if n.protein > 10.0 {
            tags.push("protein-rich");
        }
        if n.fats < 5.0 {
            tags.push("low-fat");
        }
        if n.fiber > 5.0 {
            tags.push("fiber-rich");
        }
        if n.calories < 100.0 {
            tags.push("low-calorie");
        }
        if self.name.to_lowercase().contains("fresh") {
            tags.push("fresh");
        }
        tags
    }

    /// Whether the product carries `tag`, either explicitly or derived.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
            || self.derived_tags().iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Product as it appears in fixture and API payloads, with a decimal price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub nutrition: NutritionFacts,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
}

fn default_in_stock() -> bool {
    true
}

impl ProductRecord {
    /// Convert to a catalog product priced in `currency`.
    pub fn into_product(self, currency: Currency) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            brand: self.brand,
            price: Money::from_decimal(self.price, currency),
            image: self.image,
            category: self.category,
            weight: self.weight,
            description: self.description,
            nutrition: self.nutrition,
            tags: self.tags,
            in_stock: self.in_stock,
            rating: self.rating,
            review_count: self.review_count,
        }
    }
}
