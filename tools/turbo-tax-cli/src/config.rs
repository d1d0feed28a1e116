//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use turbo_tax::order::StockLocation;
use turbo_tax::TaxConfig;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["turbo-tax.toml", ".turbo-tax.toml", "turbo-tax.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Default tax codes.
    #[serde(default)]
    pub tax: TaxConfig,

    /// Known stock locations, consulted when an order's first shipment
    /// has no location of its own.
    #[serde(default)]
    pub stock_locations: Vec<StockLocation>,
}

impl CliConfig {
    /// Load config from a file. JSON by extension, TOML otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default turbo-tax.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Tax transaction mapping configuration

[tax]
# Tax code for products without one of their own
default_product_tic = "{product}"
# Tax code for shipping charges
shipping_tic = "{shipping}"

# Shipping origin used when an order's first shipment has no stock location.
# The first active location with a street, city, zip code and state wins.
[[stock_locations]]
id = "main"
name = "Main warehouse"
active = true
address1 = "1 Warehouse Way"
city = "Reno"
zipcode = "89501"
state = {{ name = "Nevada", abbr = "NV" }}
"#,
        product = turbo_tax::config::DEFAULT_PRODUCT_TIC,
        shipping = turbo_tax::config::DEFAULT_SHIPPING_TIC,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_tax::StockLocationSource;

    #[test]
    fn test_default_config_parses() {
        let config = CliConfig::parse(&generate_default_config(), false).unwrap();
        assert_eq!(config.tax, TaxConfig::default());
        assert_eq!(config.stock_locations.len(), 1);
        assert!(config.stock_locations.first_valid().is_some());
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let config = CliConfig::parse("[tax]\nshipping_tic = \"11000\"\n", false).unwrap();
        assert_eq!(config.tax.shipping_tic, "11000");
        assert_eq!(config.tax.default_product_tic, "00000");
        assert!(config.stock_locations.is_empty());
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse(
            r#"{"tax": {"default_product_tic": "12345"}, "stock_locations": []}"#,
            true,
        )
        .unwrap();
        assert_eq!(config.tax.default_product_tic, "12345");
        assert_eq!(config.tax.shipping_tic, "11010");
    }

    #[test]
    fn test_is_json() {
        assert!(is_json(Path::new("turbo-tax.json")));
        assert!(!is_json(Path::new("turbo-tax.toml")));
        assert!(!is_json(Path::new(".turbo-tax.toml")));
    }
}
