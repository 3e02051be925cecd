//! Per-unit nutrition values carried by line items.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Macronutrients for one unit of a product.
///
/// The cart does not interpret these beyond summing them for the nutrition
/// summary, so they stay floating point like the catalog supplies them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Nutrition {
    /// Energy in kcal.
    #[serde(default)]
    pub calories: f64,
    /// Protein in grams.
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates in grams.
    #[serde(default)]
    pub carbs: f64,
    /// Fats in grams.
    #[serde(default)]
    pub fats: f64,
}

impl Nutrition {
    pub fn new(calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fats,
        }
    }

    /// Scale every nutrient by a quantity.
    pub fn scaled(&self, quantity: i64) -> Self {
        let q = quantity as f64;
        Self::new(
            self.calories * q,
            self.protein * q,
            self.carbs * q,
            self.fats * q,
        )
    }

    /// Whether every value is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fats]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::new(
            self.calories + other.calories,
            self.protein + other.protein,
            self.carbs + other.carbs,
            self.fats + other.fats,
        )
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Nutrition>>(iter: I) -> Self {
        iter.fold(Nutrition::default(), |acc, n| acc + n)
    }
}
