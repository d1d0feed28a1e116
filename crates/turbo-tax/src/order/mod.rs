//! Order module.
//!
//! Input model for tax mapping: orders, line items, shipments, addresses
//! and stock locations.

mod address;
mod order;

pub use address::{Address, AddressSource, State, StockLocation};
pub use order::{LineItem, Order, OrderItem, Shipment};
