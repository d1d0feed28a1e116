//! Order, line item and shipment types.

use crate::ids::{LineItemId, OrderNumber, ShipmentNumber, UserId};
use crate::money::{Currency, Money};
use crate::order::{Address, StockLocation};
use serde::{Deserialize, Serialize};

/// A placed order, as supplied by the storefront.
///
/// Read-only input to the tax mapping; nothing here is mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Human-readable order number.
    pub number: OrderNumber,
    /// Customer user ID (None for guest checkout).
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Customer email.
    pub email: String,
    /// Items in the order.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Shipments, in creation order.
    #[serde(default)]
    pub shipments: Vec<Shipment>,
    /// Shipping address.
    #[serde(default)]
    pub ship_address: Option<Address>,
    /// Billing address.
    #[serde(default)]
    pub bill_address: Option<Address>,
    /// Sum of promotion adjustments; negative for a discount.
    pub promo_total: Money,
    /// Order currency. Every amount on the order must be in it.
    #[serde(default)]
    pub currency: Currency,
}

impl Order {
    /// Create an empty order for a guest customer.
    pub fn new(number: impl Into<OrderNumber>, email: impl Into<String>) -> Self {
        let currency = Currency::default();
        Self {
            number: number.into(),
            user_id: None,
            email: email.into(),
            line_items: Vec::new(),
            shipments: Vec::new(),
            ship_address: None,
            bill_address: None,
            promo_total: Money::zero(currency),
            currency,
        }
    }

    /// Total quantity across every line item, taxable or not.
    ///
    /// `None` if the sum does not fit in an `i64`.
    pub fn item_count(&self) -> Option<i64> {
        self.line_items
            .iter()
            .try_fold(0_i64, |total, item| total.checked_add(item.quantity))
    }

    /// Customer identifier sent to the tax service: user id, else email.
    pub fn customer_id(&self) -> &str {
        self.user_id
            .as_ref()
            .map(UserId::as_str)
            .unwrap_or(&self.email)
    }

    /// Address the order ships to: shipping address, else billing address.
    pub fn destination(&self) -> Option<&Address> {
        self.ship_address.as_ref().or(self.bill_address.as_ref())
    }

    /// Line items with a positive quantity and price, in original order.
    pub fn taxable_line_items(&self) -> impl Iterator<Item = &LineItem> {
        self.line_items.iter().filter(|item| item.is_taxable())
    }
}

/// A line item in an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique line item identifier.
    pub id: LineItemId,
    /// Unit price.
    pub price: Money,
    /// Quantity ordered.
    pub quantity: i64,
    /// Taxability information code of the product, when one is assigned.
    #[serde(default)]
    pub tax_code: Option<String>,
}

impl LineItem {
    pub fn new(id: impl Into<LineItemId>, price: Money, quantity: i64) -> Self {
        Self {
            id: id.into(),
            price,
            quantity,
            tax_code: None,
        }
    }

    /// Set the product tax code.
    pub fn with_tax_code(mut self, tax_code: impl Into<String>) -> Self {
        self.tax_code = Some(tax_code.into());
        self
    }

    /// Whether the item is sent to the tax service at all.
    pub fn is_taxable(&self) -> bool {
        self.quantity > 0 && self.price.is_positive()
    }
}

/// A shipment of some or all of an order's items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shipment {
    /// Shipment number.
    pub number: ShipmentNumber,
    /// Shipping cost charged.
    pub cost: Money,
    /// Location the shipment leaves from.
    #[serde(default)]
    pub stock_location: Option<StockLocation>,
}

impl Shipment {
    pub fn new(number: impl Into<ShipmentNumber>, cost: Money) -> Self {
        Self {
            number: number.into(),
            cost,
            stock_location: None,
        }
    }

    /// Set the originating stock location.
    pub fn from_location(mut self, location: StockLocation) -> Self {
        self.stock_location = Some(location);
        self
    }
}

/// An item decoded from external input, tagged with its type.
///
/// Tags other than `line_item` and `shipment` decode to
/// [`OrderItem::Unsupported`] so the mapper can reject them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderItem {
    LineItem(LineItem),
    Shipment(Shipment),
    #[serde(other)]
    Unsupported,
}

impl OrderItem {
    /// Name of the item type, as tagged on the wire.
    pub fn type_name(&self) -> &'static str {
        match self {
            OrderItem::LineItem(_) => "line_item",
            OrderItem::Shipment(_) => "shipment",
            OrderItem::Unsupported => "unsupported",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_customer_id_prefers_user_id() {
        let mut order = Order::new("R1", "guest@example.com");
        assert_eq!(order.customer_id(), "guest@example.com");

        order.user_id = Some(UserId::new("42"));
        assert_eq!(order.customer_id(), "42");
    }

    #[test]
    fn test_destination_falls_back_to_billing() {
        let mut order = Order::new("R1", "a@example.com");
        assert!(order.destination().is_none());

        let billing = Address::new("2 Bill St", "Austin", "73301");
        order.bill_address = Some(billing.clone());
        assert_eq!(order.destination(), Some(&billing));

        let shipping = Address::new("3 Ship Ave", "Boston", "02101");
        order.ship_address = Some(shipping.clone());
        assert_eq!(order.destination(), Some(&shipping));
    }

    #[test]
    fn test_taxable_line_items_filter() {
        let mut order = Order::new("R1", "a@example.com");
        order.line_items = vec![
            LineItem::new("1", usd(1000), 1),
            LineItem::new("2", usd(0), 3),
            LineItem::new("3", usd(500), 0),
            LineItem::new("4", usd(250), 2),
        ];

        let ids: Vec<&str> = order.taxable_line_items().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        assert_eq!(order.item_count(), Some(6));
    }

    #[test]
    fn test_item_count_overflow() {
        let mut order = Order::new("R1", "a@example.com");
        let half = i64::MAX / 2 + 1;
        order.line_items = vec![
            LineItem::new("1", usd(100), half),
            LineItem::new("2", usd(100), half),
        ];
        assert_eq!(order.item_count(), None);
    }

    #[test]
    fn test_order_item_decoding() {
        let item: OrderItem = serde_json::from_str(
            r#"{"type": "shipment", "number": "H1", "cost": {"amount_cents": 500, "currency": "USD"}}"#,
        )
        .unwrap();
        assert_eq!(item.type_name(), "shipment");

        let item: OrderItem =
            serde_json::from_str(r#"{"type": "gift_card", "code": "XYZ"}"#).unwrap();
        assert_eq!(item, OrderItem::Unsupported);
    }

    #[test]
    fn test_order_decodes_with_defaults() {
        let order: Order = serde_json::from_str(
            r#"{
                "number": "R100",
                "email": "a@example.com",
                "promo_total": {"amount_cents": -500, "currency": "USD"}
            }"#,
        )
        .unwrap();
        assert!(order.line_items.is_empty());
        assert!(order.shipments.is_empty());
        assert_eq!(order.currency, Currency::USD);
    }
}
