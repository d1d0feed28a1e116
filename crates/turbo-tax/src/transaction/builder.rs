//! Order to tax transaction assembly.

use crate::config::{StockLocationSource, TaxConfig};
use crate::error::TaxError;
use crate::order::{Order, StockLocation};
use crate::transaction::{CartItem, CartItemMapper, TaxAddress, TaxableItem};
use serde::Serialize;
use tracing::{debug, warn};

/// A tax lookup request for one order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Transaction {
    #[serde(rename = "CustomerID")]
    pub customer_id: String,
    #[serde(rename = "OrderID")]
    pub order_id: String,
    #[serde(rename = "CartID")]
    pub cart_id: String,
    #[serde(rename = "Origin")]
    pub origin: TaxAddress,
    #[serde(rename = "Destination")]
    pub destination: TaxAddress,
    /// Taxable line items first, then shipments, indexed from zero.
    #[serde(rename = "CartItems")]
    pub cart_items: Vec<CartItem>,
}

impl Transaction {
    /// Serialize to the tax service's JSON shape.
    pub fn to_json(&self) -> Result<String, TaxError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builds tax transactions from orders.
///
/// Borrows its configuration and stock location lookup, so one builder can
/// serve any number of orders.
pub struct TransactionBuilder<'a, S: StockLocationSource + ?Sized> {
    config: &'a TaxConfig,
    locations: &'a S,
}

impl<'a, S: StockLocationSource + ?Sized> TransactionBuilder<'a, S> {
    pub fn new(config: &'a TaxConfig, locations: &'a S) -> Self {
        Self { config, locations }
    }

    /// Map an order into a transaction.
    ///
    /// Fails without partial output when no origin or destination can be
    /// resolved, or when any cart item cannot be priced.
    pub fn build(&self, order: &Order) -> Result<Transaction, TaxError> {
        debug!(
            order = %order.number,
            line_items = order.line_items.len(),
            shipments = order.shipments.len(),
            "building tax transaction"
        );

        let result = self.assemble(order);
        match &result {
            Ok(transaction) => debug!(
                order = %order.number,
                cart_items = transaction.cart_items.len(),
                "tax transaction built"
            ),
            Err(err) => warn!(order = %order.number, kind = err.kind(), error = %err, "tax transaction failed"),
        }
        result
    }

    fn assemble(&self, order: &Order) -> Result<Transaction, TaxError> {
        let origin = self.resolve_origin(order)?;
        let destination = order
            .destination()
            .ok_or_else(|| TaxError::MissingDestination {
                order_number: order.number.to_string(),
            })?;

        let mapper = CartItemMapper::for_order(self.config, order)?;
        let cart_items = order
            .taxable_line_items()
            .map(TaxableItem::LineItem)
            .chain(order.shipments.iter().map(TaxableItem::Shipment))
            .enumerate()
            .map(|(index, item)| mapper.to_cart_item(item, index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Transaction {
            customer_id: order.customer_id().to_string(),
            order_id: order.number.to_string(),
            cart_id: order.number.to_string(),
            origin: TaxAddress::from_source(origin),
            destination: TaxAddress::from_source(destination),
            cart_items,
        })
    }

    /// First shipment's stock location, else the first valid known location.
    fn resolve_origin<'o>(&'o self, order: &'o Order) -> Result<&'o StockLocation, TaxError> {
        if let Some(location) = order
            .shipments
            .first()
            .and_then(|shipment| shipment.stock_location.as_ref())
        {
            return Ok(location);
        }

        debug!(order = %order.number, "no shipment origin, using first valid stock location");
        self.locations
            .first_valid()
            .ok_or_else(|| TaxError::NoValidStockLocation {
                order_number: order.number.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};
    use crate::order::{Address, LineItem, Shipment, State};

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn warehouse(id: &str) -> StockLocation {
        StockLocation::new(
            id,
            id,
            Address::new("1 Dock Rd", "Reno", "89501").with_state(State::new("Nevada", "NV")),
        )
    }

    fn order() -> Order {
        let mut order = Order::new("R555", "buyer@example.com");
        order.ship_address = Some(
            Address::new("9 Elm St", "Portland", "97201-0001").with_state(State::new("Oregon", "OR")),
        );
        order
    }

    #[test]
    fn test_header_fields() {
        let config = TaxConfig::default();
        let locations = vec![warehouse("wh-1")];
        let transaction = TransactionBuilder::new(&config, &locations)
            .build(&order())
            .unwrap();

        assert_eq!(transaction.customer_id, "buyer@example.com");
        assert_eq!(transaction.order_id, "R555");
        assert_eq!(transaction.cart_id, "R555");
        assert_eq!(transaction.origin.state.as_deref(), Some("NV"));
        assert_eq!(transaction.destination.zip5.as_deref(), Some("97201"));
        assert!(transaction.cart_items.is_empty());
    }

    #[test]
    fn test_shipment_location_preferred_over_lookup() {
        let config = TaxConfig::default();
        let locations = vec![warehouse("fallback")];
        let mut shipped_from = warehouse("store");
        shipped_from.city = Some("Sparks".to_string());
        shipped_from.active = false;

        let mut order = order();
        order.shipments = vec![Shipment::new("H1", usd(500)).from_location(shipped_from)];

        let transaction = TransactionBuilder::new(&config, &locations)
            .build(&order)
            .unwrap();
        assert_eq!(transaction.origin.city.as_deref(), Some("Sparks"));
    }

    #[test]
    fn test_no_valid_stock_location() {
        let config = TaxConfig::default();
        let mut inactive = warehouse("wh-1");
        inactive.active = false;
        let locations = vec![inactive];

        let err = TransactionBuilder::new(&config, &locations)
            .build(&order())
            .unwrap_err();
        assert_eq!(
            err,
            TaxError::NoValidStockLocation {
                order_number: "R555".to_string()
            }
        );
    }

    #[test]
    fn test_missing_destination() {
        let config = TaxConfig::default();
        let locations = vec![warehouse("wh-1")];
        let mut order = order();
        order.ship_address = None;

        let err = TransactionBuilder::new(&config, &locations)
            .build(&order)
            .unwrap_err();
        assert_eq!(err.kind(), "missing_destination");
    }

    #[test]
    fn test_line_items_then_shipments() {
        let config = TaxConfig::default();
        let locations = vec![warehouse("wh-1")];
        let mut order = order();
        order.line_items = vec![
            LineItem::new("1", usd(1000), 1),
            LineItem::new("2", usd(1000), 0),
            LineItem::new("3", usd(300), 2),
        ];
        order.shipments = vec![Shipment::new("H1", usd(500)), Shipment::new("H2", usd(0))];

        let transaction = TransactionBuilder::new(&config, &locations)
            .build(&order)
            .unwrap();
        let ids: Vec<(usize, &str)> = transaction
            .cart_items
            .iter()
            .map(|item| (item.index, item.item_id.as_str()))
            .collect();
        assert_eq!(
            ids,
            vec![
                (0, "LineItem 1"),
                (1, "LineItem 3"),
                (2, "Shipment H1"),
                (3, "Shipment H2"),
            ]
        );
    }

    #[test]
    fn test_quantity_overflow_fails_whole_transaction() {
        let config = TaxConfig::default();
        let locations = vec![warehouse("wh-1")];
        let half = i64::MAX / 2 + 1;
        let mut order = order();
        order.line_items = vec![
            LineItem::new("1", usd(100), half),
            LineItem::new("2", usd(100), half),
        ];

        let err = TransactionBuilder::new(&config, &locations)
            .build(&order)
            .unwrap_err();
        assert_eq!(err.kind(), "overflow");
        assert!(err.to_string().contains("R555"));
    }

    #[test]
    fn test_to_json() {
        let config = TaxConfig::default();
        let locations = vec![warehouse("wh-1")];
        let json = TransactionBuilder::new(&config, &locations)
            .build(&order())
            .unwrap()
            .to_json()
            .unwrap();
        assert!(json.contains("\"CartID\":\"R555\""));
    }
}
