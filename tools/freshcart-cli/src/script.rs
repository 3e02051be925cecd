//! Cart scripts: a JSON list of cart actions replayed against a fresh cart.
//!
//! ```json
//! [
//!   {"add": {"product": "1", "quantity": 3}},
//!   {"update": {"product": "1", "quantity": 2}},
//!   {"remove": {"product": "4"}},
//!   "clear"
//! ]
//! ```

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use freshcart_commerce::cart::CartStore;
use freshcart_commerce::catalog::Catalog;
use freshcart_commerce::ProductId;
use serde::{Deserialize, Serialize};

/// One scripted cart action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartScriptStep {
    /// Add a catalog product.
    Add {
        product: String,
        #[serde(default = "default_quantity")]
        quantity: i64,
    },
    /// Set the quantity of a product already in the cart.
    Update { product: String, quantity: i64 },
    /// Drop a product from the cart.
    Remove { product: String },
    /// Empty the cart.
    Clear,
}

fn default_quantity() -> i64 {
    1
}

impl fmt::Display for CartScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartScriptStep::Add { product, quantity } => write!(f, "add {} x{}", product, quantity),
            CartScriptStep::Update { product, quantity } => {
                write!(f, "update {} to {}", product, quantity)
            }
            CartScriptStep::Remove { product } => write!(f, "remove {}", product),
            CartScriptStep::Clear => write!(f, "clear"),
        }
    }
}

/// What a replay did.
#[derive(Debug, Default, PartialEq)]
pub struct ReplayReport {
    /// Steps that changed the cart.
    pub applied: usize,
    /// Steps that named a product not in the cart.
    pub skipped: Vec<String>,
}

/// Parse a script from JSON text.
pub fn parse_script(json: &str) -> Result<Vec<CartScriptStep>> {
    serde_json::from_str(json).context("Failed to parse cart script")
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> Result<Vec<CartScriptStep>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read cart script: {}", path.display()))?;
    parse_script(&content).with_context(|| format!("Invalid cart script: {}", path.display()))
}

/// Apply `steps` to `store` in order, stopping at the first rejected step.
pub fn replay(
    steps: &[CartScriptStep],
    catalog: &Catalog,
    store: &mut CartStore,
) -> Result<ReplayReport> {
    let mut report = ReplayReport::default();

    for (index, step) in steps.iter().enumerate() {
        let changed = apply_step(step, catalog, store)
            .with_context(|| format!("Step {} ({}) failed", index + 1, step))?;
        if changed {
            report.applied += 1;
        } else {
            report.skipped.push(step.to_string());
        }
    }

    Ok(report)
}

fn apply_step(step: &CartScriptStep, catalog: &Catalog, store: &mut CartStore) -> Result<bool> {
    match step {
        CartScriptStep::Add { product, quantity } => {
            let product = catalog.require(&ProductId::new(product.as_str()))?;
            store.add_item(product.to_cart_item(), *quantity)?;
            Ok(true)
        }
        CartScriptStep::Update { product, quantity } => {
            Ok(store.update_quantity(&ProductId::new(product.as_str()), *quantity)?)
        }
        CartScriptStep::Remove { product } => {
            Ok(store.remove_item(&ProductId::new(product.as_str())))
        }
        CartScriptStep::Clear => {
            store.clear();
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freshcart_commerce::Currency;

    fn catalog() -> Catalog {
        Catalog::fixture(Currency::USD).unwrap()
    }

    #[test]
    fn parses_every_step_kind() {
        let steps = parse_script(
            r#"[
                {"add": {"product": "1", "quantity": 3}},
                {"add": {"product": "2"}},
                {"update": {"product": "1", "quantity": 0}},
                {"remove": {"product": "2"}},
                "clear"
            ]"#,
        )
        .unwrap();

        assert_eq!(
            steps,
            vec![
                CartScriptStep::Add { product: "1".into(), quantity: 3 },
                CartScriptStep::Add { product: "2".into(), quantity: 1 },
                CartScriptStep::Update { product: "1".into(), quantity: 0 },
                CartScriptStep::Remove { product: "2".into() },
                CartScriptStep::Clear,
            ]
        );
    }

    #[test]
    fn rejects_unknown_step() {
        assert!(parse_script(r#"[{"checkout": {}}]"#).is_err());
    }

    #[test]
    fn replay_builds_cart() {
        let steps = parse_script(
            r#"[
                {"add": {"product": "1", "quantity": 2}},
                {"add": {"product": "4"}},
                {"add": {"product": "1"}},
                {"update": {"product": "4", "quantity": 5}}
            ]"#,
        )
        .unwrap();
        let mut store = CartStore::new();

        let report = replay(&steps, &catalog(), &mut store).unwrap();

        assert_eq!(report.applied, 4);
        assert!(report.skipped.is_empty());
        assert_eq!(store.unique_item_count(), 2);
        assert_eq!(store.total_item_count(), 8);
        assert_eq!(store.total().amount_cents, 3 * 299 + 5 * 279);
    }

    #[test]
    fn replay_skips_products_not_in_cart() {
        let steps = vec![
            CartScriptStep::Add { product: "3".into(), quantity: 1 },
            CartScriptStep::Remove { product: "5".into() },
            CartScriptStep::Update { product: "6".into(), quantity: 2 },
        ];
        let mut store = CartStore::new();

        let report = replay(&steps, &catalog(), &mut store).unwrap();

        assert_eq!(report.applied, 1);
        assert_eq!(report.skipped, vec!["remove 5", "update 6 to 2"]);
        assert_eq!(store.total_item_count(), 1);
    }

    #[test]
    fn replay_stops_at_rejected_step() {
        let steps = vec![
            CartScriptStep::Add { product: "1".into(), quantity: 1 },
            CartScriptStep::Add { product: "1".into(), quantity: -4 },
            CartScriptStep::Clear,
        ];
        let mut store = CartStore::new();

        let err = replay(&steps, &catalog(), &mut store).unwrap_err();

        assert!(format!("{:#}", err).contains("Step 2 (add 1 x-4) failed"));
        assert_eq!(store.total_item_count(), 1);
    }

    #[test]
    fn weekly_shop_script() {
        let steps = parse_script(include_str!("../scripts/weekly-shop.json")).unwrap();
        let mut store = CartStore::new();

        replay(&steps, &catalog(), &mut store).unwrap();

        let lines: Vec<(&str, i64)> = store
            .items()
            .iter()
            .map(|l| (l.id().as_str(), l.quantity))
            .collect();
        assert_eq!(lines, vec![("1", 4), ("3", 1), ("6", 4)]);
        assert_eq!(store.total().amount_cents, 4 * 299 + 349 + 4 * 549);
    }

    #[test]
    fn replay_rejects_unknown_product() {
        let steps = vec![CartScriptStep::Add { product: "999".into(), quantity: 1 }];
        let mut store = CartStore::new();

        assert!(replay(&steps, &catalog(), &mut store).is_err());
        assert!(store.is_empty());
    }
}
