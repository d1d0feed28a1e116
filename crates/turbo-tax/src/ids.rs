//! Newtype identifiers for order entities.
//!
//! Newtypes keep an order number from being passed where a shipment
//! number is expected, even though both are plain strings on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Human-facing order number (e.g. "R123456789"), also used as the cart id.
    OrderNumber
);
define_id!(
    /// Customer account identifier.
    UserId
);
define_id!(
    /// Line item identifier.
    LineItemId
);
define_id!(
    /// Shipment number (e.g. "H12345678").
    ShipmentNumber
);
define_id!(
    /// Stock location identifier.
    StockLocationId
);
