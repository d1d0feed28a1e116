//! Map a single order item to a cart item.

use anyhow::{Context as _, Result};
use turbo_tax::order::{Order, OrderItem};
use turbo_tax::transaction::CartItemMapper;

use super::{format_price, ItemArgs};
use crate::context::Context;

/// Run the item command.
pub fn run(args: ItemArgs, ctx: &Context) -> Result<()> {
    let order: Order = ctx.read_json(&args.order)?;
    let item: OrderItem = ctx.read_json(&args.item)?;

    let mapper = CartItemMapper::for_order(&ctx.config.tax, &order)
        .with_context(|| format!("Failed to price order {}", order.number))?;
    let cart_item = mapper
        .map_item(&item, args.index)
        .with_context(|| format!("Failed to map item from {}", args.item))?;

    if ctx.output.is_json() {
        ctx.output.json(&cart_item);
        return Ok(());
    }

    ctx.output.header(&cart_item.item_id);
    ctx.output.kv("Index", &cart_item.index.to_string());
    ctx.output.kv("TIC", &cart_item.tic);
    ctx.output.kv("Price", &format!("{} {}", format_price(cart_item.price), order.currency));
    ctx.output.kv("Qty", &cart_item.quantity.to_string());
    Ok(())
}
