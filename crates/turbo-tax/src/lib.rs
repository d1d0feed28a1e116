//! Order to tax transaction mapping for TurboCommerce.
//!
//! Turns an order's line items, shipments and addresses into the
//! transaction shape a TaxCloud-style tax service consumes:
//!
//! - **Order**: input model (orders, line items, shipments, addresses, stock locations)
//! - **Transaction**: output model plus the mapping rules (address
//!   normalization, tax code resolution, promo proration, index assignment)
//! - **Config**: default tax codes and the fallback origin lookup
//!
//! Sending the transaction, and anything the tax service returns, is the
//! caller's business.
//!
//! # Example
//!
//! ```rust
//! use turbo_tax::prelude::*;
//!
//! let warehouse = StockLocation::new(
//!     "wh-1",
//!     "Main warehouse",
//!     Address::new("1 Dock Rd", "Reno", "89501").with_state(State::new("Nevada", "NV")),
//! );
//!
//! let mut order = Order::new("R100", "buyer@example.com");
//! order.ship_address = Some(Address::new("9 Elm St", "Portland", "97201"));
//! order.line_items.push(LineItem::new("1", Money::new(2500, Currency::USD), 2));
//! order.shipments.push(Shipment::new("H1", Money::new(599, Currency::USD)));
//!
//! let config = TaxConfig::default();
//! let locations = vec![warehouse];
//! let transaction = TransactionBuilder::new(&config, &locations).build(&order)?;
//!
//! assert_eq!(transaction.cart_items.len(), 2);
//! assert_eq!(transaction.cart_items[1].item_id, "Shipment H1");
//! # Ok::<(), TaxError>(())
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod order;
pub mod transaction;

pub use config::{StockLocationSource, TaxConfig};
pub use error::TaxError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{StockLocationSource, TaxConfig};
    pub use crate::error::TaxError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Order
    pub use crate::order::{
        Address, AddressSource, LineItem, Order, OrderItem, Shipment, State, StockLocation,
    };

    // Transaction
    pub use crate::transaction::{
        CartItem, CartItemMapper, TaxAddress, TaxableItem, Transaction, TransactionBuilder,
    };
}
