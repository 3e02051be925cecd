//! CLI configuration.

use anyhow::{Context, Result};
use freshcart_commerce::StoreConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: CliConfig = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .store
            .validate()
            .with_context(|| format!("Invalid config: {}", path))?;
        Ok(config)
    }
}

/// Where the product catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file with product records. The built-in fixture is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Generate a default config file.
pub fn generate_default_config() -> String {
    r#"# FreshCart configuration

[store]
# Currency for prices and totals (USD, EUR, GBP)
currency = "USD"
# Flat delivery fee added at checkout
delivery_fee = 2.99
# When checkout clears the cart: "optimistic" or "after_acknowledgement"
clear_policy = "optimistic"
# Subtotal the cart drawer counts down to for free delivery
free_delivery_threshold = 144.0

[catalog]
# JSON file with product records; the built-in catalog is used when unset
# path = "products.json"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use freshcart_commerce::checkout::ClearPolicy;
    use freshcart_commerce::{Currency, Money};

    #[test]
    fn default_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn load_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("freshcart.toml");
        std::fs::write(
            &toml_path,
            "[store]\ncurrency = \"GBP\"\nclear_policy = \"after_acknowledgement\"\n",
        )
        .unwrap();
        let config = CliConfig::load(toml_path.to_str().unwrap()).unwrap();
        assert_eq!(config.store.currency, Currency::GBP);
        assert_eq!(config.store.clear_policy, ClearPolicy::AfterAcknowledgement);
        assert_eq!(config.store.delivery_fee(), Money::new(299, Currency::GBP));
        assert_eq!(
            config.store.free_delivery_threshold(),
            Money::new(14_400, Currency::GBP)
        );

        let json_path = dir.path().join("freshcart.json");
        std::fs::write(&json_path, r#"{"store": {"delivery_fee": 0.0}}"#).unwrap();
        let config = CliConfig::load(json_path.to_str().unwrap()).unwrap();
        assert!(config.store.delivery_fee().is_zero());
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn load_rejects_negative_fee() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freshcart.toml");
        std::fs::write(&path, "[store]\ndelivery_fee = -2.0\n").unwrap();

        assert!(CliConfig::load(path.to_str().unwrap()).is_err());
    }
}
