//! Transaction module.
//!
//! Output model and mapping rules: tax addresses, cart items, and the
//! builder that turns an order into a transaction.

mod address;
mod builder;
mod cart_item;

pub use address::TaxAddress;
pub use builder::{Transaction, TransactionBuilder};
pub use cart_item::{CartItem, CartItemMapper, TaxableItem};
