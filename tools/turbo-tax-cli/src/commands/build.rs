//! Build a tax transaction from an order document.

use std::fs;

use anyhow::{Context as _, Result};
use turbo_tax::order::Order;
use turbo_tax::transaction::{CartItemMapper, Transaction, TransactionBuilder};

use super::{format_price, BuildArgs};
use crate::context::Context;

/// Run the build command.
pub fn run(args: BuildArgs, ctx: &Context) -> Result<()> {
    let order: Order = ctx.read_json(&args.order)?;
    ctx.output.debug(&format!(
        "Loaded order {} ({} line items, {} shipments)",
        order.number,
        order.line_items.len(),
        order.shipments.len()
    ));

    let builder = TransactionBuilder::new(&ctx.config.tax, &ctx.config.stock_locations);
    let transaction = builder
        .build(&order)
        .with_context(|| format!("Failed to build tax transaction for order {}", order.number))?;

    if let Some(ref path) = args.output {
        let path = ctx.resolve_path(path);
        let json = serde_json::to_string_pretty(&transaction)?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        ctx.output.success(&format!("Wrote {}", path.display()));
    }

    if ctx.output.is_json() {
        ctx.output.json(&transaction);
        return Ok(());
    }

    if ctx.output.is_verbose() {
        let mapper = CartItemMapper::for_order(&ctx.config.tax, &order)?;
        ctx.output.debug(&format!(
            "Promo share per unit: {} {}",
            mapper.unit_discount().round_dp(6),
            order.currency
        ));
    }

    print_transaction(&transaction, ctx);
    Ok(())
}

fn print_transaction(transaction: &Transaction, ctx: &Context) {
    ctx.output.header(&format!("Transaction {}", transaction.order_id));
    ctx.output.kv("Customer", &transaction.customer_id);
    ctx.output.kv("Cart", &transaction.cart_id);
    ctx.output.kv("Origin", &transaction.origin.one_line());
    ctx.output.kv("Destination", &transaction.destination.one_line());

    if transaction.cart_items.is_empty() {
        ctx.output.info("");
        ctx.output.info("No cart items");
        return;
    }

    let widths = [5, 24, 7, 12, 4];
    ctx.output.info("");
    ctx.output
        .table_row(&["INDEX", "ITEM", "TIC", "PRICE", "QTY"], &widths);
    for item in &transaction.cart_items {
        let index = item.index.to_string();
        let price = format_price(item.price);
        let quantity = item.quantity.to_string();
        ctx.output.table_row(
            &[
                index.as_str(),
                item.item_id.as_str(),
                item.tic.as_str(),
                price.as_str(),
                quantity.as_str(),
            ],
            &widths,
        );
    }
}
