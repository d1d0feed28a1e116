//! Tax mapping error types.

use thiserror::Error;

/// Errors that can occur while mapping an order into a tax transaction.
///
/// Every variant is fatal for the order being mapped: the builder raises it
/// at the point of detection and returns no partial transaction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxError {
    /// No shipment stock location and no valid stock location to fall back on.
    #[error("Order {order_number}: ensure at least one valid stock location exists")]
    NoValidStockLocation { order_number: String },

    /// Item is neither a line item nor a shipment.
    #[error("Cart item cannot be made from item of type '{item_type}'")]
    InvalidItemType { item_type: String },

    /// Order has neither a shipping nor a billing address.
    #[error("Order {order_number} has no shipping or billing address")]
    MissingDestination { order_number: String },

    /// Currency mismatch between an item price and the order's promo total.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Order-level arithmetic left the representable range.
    #[error("Order {order_number}: {what} overflowed")]
    Overflow { order_number: String, what: &'static str },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TaxError {
    /// Stable machine-readable name of the error kind, for callers that
    /// render their own (possibly localized) messages.
    pub fn kind(&self) -> &'static str {
        match self {
            TaxError::NoValidStockLocation { .. } => "no_valid_stock_location",
            TaxError::InvalidItemType { .. } => "invalid_item_type",
            TaxError::MissingDestination { .. } => "missing_destination",
            TaxError::CurrencyMismatch { .. } => "currency_mismatch",
            TaxError::Overflow { .. } => "overflow",
            TaxError::Serialization(_) => "serialization",
        }
    }
}

impl From<serde_json::Error> for TaxError {
    fn from(e: serde_json::Error) -> Self {
        TaxError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_carries_order_number() {
        let err = TaxError::NoValidStockLocation {
            order_number: "R123456".to_string(),
        };
        assert!(err.to_string().contains("R123456"));
        assert_eq!(err.kind(), "no_valid_stock_location");
    }

    #[test]
    fn test_overflow_names_what_overflowed() {
        let err = TaxError::Overflow {
            order_number: "R1".to_string(),
            what: "line item quantity total",
        };
        assert_eq!(err.to_string(), "Order R1: line item quantity total overflowed");
        assert_eq!(err.kind(), "overflow");
    }

    #[test]
    fn test_from_serde_json() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: TaxError = parse.unwrap_err().into();
        assert_eq!(err.kind(), "serialization");
    }
}
