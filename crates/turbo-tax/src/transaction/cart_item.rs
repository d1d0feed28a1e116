//! Cart items and the per-item mapping rules.

use crate::config::TaxConfig;
use crate::error::TaxError;
use crate::money::{serialize_as_number, Currency, Money};
use crate::order::{LineItem, Order, OrderItem, Shipment};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

/// One priced row of a tax transaction.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartItem {
    /// Zero-based position in the transaction.
    #[serde(rename = "Index")]
    pub index: usize,
    /// Caller-side item reference (e.g. "LineItem 42").
    #[serde(rename = "ItemID")]
    pub item_id: String,
    /// Taxability information code.
    #[serde(rename = "TIC")]
    pub tic: String,
    /// Unit price in major units after the prorated discount. Kept exact;
    /// the promo share need not be a whole number of cents.
    #[serde(rename = "Price", serialize_with = "serialize_as_number")]
    pub price: Decimal,
    #[serde(rename = "Qty")]
    pub quantity: i64,
}

/// The kinds of order rows that become cart items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaxableItem<'a> {
    LineItem(&'a LineItem),
    Shipment(&'a Shipment),
}

impl<'a> TryFrom<&'a OrderItem> for TaxableItem<'a> {
    type Error = TaxError;

    fn try_from(item: &'a OrderItem) -> Result<Self, Self::Error> {
        match item {
            OrderItem::LineItem(line_item) => Ok(TaxableItem::LineItem(line_item)),
            OrderItem::Shipment(shipment) => Ok(TaxableItem::Shipment(shipment)),
            OrderItem::Unsupported => Err(TaxError::InvalidItemType {
                item_type: item.type_name().to_string(),
            }),
        }
    }
}

/// Maps individual order rows to cart items for one order.
///
/// Holds the order-wide promo total and the quantity it is spread over,
/// which counts *all* line items, including ones that are later left out
/// of the transaction.
#[derive(Debug, Clone)]
pub struct CartItemMapper<'a> {
    config: &'a TaxConfig,
    currency: Currency,
    promo_total: Money,
    total_quantity: i64,
}

impl<'a> CartItemMapper<'a> {
    /// Capture the order-level aggregates needed to price its line items.
    ///
    /// Fails when the promo total is not in the order currency, or when the
    /// line item quantities do not sum to an `i64`.
    pub fn for_order(config: &'a TaxConfig, order: &Order) -> Result<Self, TaxError> {
        order.promo_total.ensure_currency(order.currency)?;
        let total_quantity = order.item_count().ok_or_else(|| TaxError::Overflow {
            order_number: order.number.to_string(),
            what: "line item quantity total",
        })?;

        Ok(Self {
            config,
            currency: order.currency,
            promo_total: order.promo_total,
            total_quantity,
        })
    }

    /// Exact promo share applied to each unit of every line item.
    ///
    /// Zero when the order has no positive quantity to spread it over.
    pub fn unit_discount(&self) -> Decimal {
        if self.total_quantity <= 0 {
            return Decimal::ZERO;
        }
        self.promo_total.to_decimal() / Decimal::from(self.total_quantity)
    }

    /// Map a line item or shipment to the cart item at `index`.
    pub fn to_cart_item(&self, item: TaxableItem<'_>, index: usize) -> Result<CartItem, TaxError> {
        match item {
            TaxableItem::LineItem(line_item) => self.line_item(line_item, index),
            TaxableItem::Shipment(shipment) => self.shipment(shipment, index),
        }
    }

    /// Map an externally decoded item, rejecting unsupported types.
    pub fn map_item(&self, item: &OrderItem, index: usize) -> Result<CartItem, TaxError> {
        let item = TaxableItem::try_from(item).inspect_err(|err| {
            warn!(index, error = %err, "rejected order item");
        })?;
        self.to_cart_item(item, index)
    }

    fn line_item(&self, line_item: &LineItem, index: usize) -> Result<CartItem, TaxError> {
        line_item.price.ensure_currency(self.currency)?;

        let unit_discount = self.unit_discount();
        let discounted = line_item.price.to_decimal() + unit_discount;
        if discounted < Decimal::ZERO {
            warn!(
                line_item = %line_item.id,
                price = %line_item.price,
                %unit_discount,
                "promo share exceeds unit price, pricing at zero"
            );
        }

        let tic = line_item
            .tax_code
            .clone()
            .unwrap_or_else(|| self.config.default_product_tic.clone());

        Ok(CartItem {
            index,
            item_id: format!("LineItem {}", line_item.id),
            tic,
            price: discounted.max(Decimal::ZERO),
            quantity: line_item.quantity,
        })
    }

    fn shipment(&self, shipment: &Shipment, index: usize) -> Result<CartItem, TaxError> {
        shipment.cost.ensure_currency(self.currency)?;
        if shipment.cost.is_negative() {
            warn!(
                shipment = %shipment.number,
                cost = %shipment.cost,
                "negative shipping cost, pricing at zero"
            );
        }

        Ok(CartItem {
            index,
            item_id: format!("Shipment {}", shipment.number),
            tic: self.config.shipping_tic.clone(),
            price: shipment.cost.to_decimal().max(Decimal::ZERO),
            quantity: 1,
        })
    }
}
