//! Tax mapping configuration.

use crate::order::StockLocation;
use serde::{Deserialize, Serialize};

/// TaxCloud's code for general tangible personal property.
pub const DEFAULT_PRODUCT_TIC: &str = "00000";

/// TaxCloud's code for shipping charges.
pub const DEFAULT_SHIPPING_TIC: &str = "11010";

/// Read-only settings consulted while building a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaxConfig {
    /// Tax code for products that don't carry their own.
    #[serde(default = "default_product_tic")]
    pub default_product_tic: String,

    /// Tax code applied to every shipment.
    #[serde(default = "default_shipping_tic")]
    pub shipping_tic: String,
}

fn default_product_tic() -> String {
    DEFAULT_PRODUCT_TIC.to_string()
}

fn default_shipping_tic() -> String {
    DEFAULT_SHIPPING_TIC.to_string()
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            default_product_tic: default_product_tic(),
            shipping_tic: default_shipping_tic(),
        }
    }
}

impl TaxConfig {
    /// Set the default product tax code.
    pub fn with_product_tic(mut self, tic: impl Into<String>) -> Self {
        self.default_product_tic = tic.into();
        self
    }

    /// Set the shipping tax code.
    pub fn with_shipping_tic(mut self, tic: impl Into<String>) -> Self {
        self.shipping_tic = tic.into();
        self
    }
}

/// Lookup for the fallback shipping origin.
pub trait StockLocationSource {
    /// First stock location eligible as a shipping origin, if any.
    fn first_valid(&self) -> Option<&StockLocation>;
}

impl StockLocationSource for [StockLocation] {
    fn first_valid(&self) -> Option<&StockLocation> {
        self.iter().find(|loc| loc.is_valid())
    }
}

impl StockLocationSource for Vec<StockLocation> {
    fn first_valid(&self) -> Option<&StockLocation> {
        self.as_slice().first_valid()
    }
}
