//! `shopfront cart [--catalog PATH] <ops>...` – replay a cart session.

use anyhow::Result;
use shopfront_core::cart::{
    format_price, load_catalog, CartLedger, CartOp, CatalogItem, LedgerChange,
};
use std::path::Path;

pub fn run_cart(catalog: Option<&Path>, ops: &[CartOp]) -> Result<()> {
    let items = match catalog {
        Some(path) => load_catalog(path)?,
        None => Vec::new(),
    };
    for line in render_cart(&items, ops) {
        println!("{line}");
    }
    Ok(())
}

/// Replays `ops` on an empty cart and renders the change log, line table and totals.
fn render_cart(items: &[CatalogItem], ops: &[CartOp]) -> Vec<String> {
    let mut out = Vec::new();
    let mut cart = CartLedger::new();
    for op in ops {
        let change = match cart.apply(op) {
            LedgerChange::Added { quantity } => format!("added (qty {quantity})"),
            LedgerChange::Decremented { quantity } => format!("decremented (qty {quantity})"),
            LedgerChange::Removed => "removed".to_string(),
            LedgerChange::NoOp => "not in cart".to_string(),
        };
        out.push(format!("{:<24} {}", op.to_string(), change));
    }

    let lines = cart.lines(items);
    if lines.is_empty() {
        out.push("Cart is empty.".to_string());
        return out;
    }

    out.push(String::new());
    out.push(format!(
        "{:<20} {:>5} {:>10} {:>10}",
        "ITEM", "QTY", "PRICE", "SUBTOTAL"
    ));
    for line in &lines {
        let price = match line.unit_price {
            Some(p) => format_price(p),
            None => {
                tracing::warn!(item_id = %line.item_id, "cart item missing from catalog");
                "-".to_string()
            }
        };
        out.push(format!(
            "{:<20} {:>5} {:>10} {:>10}",
            line.item_id,
            line.quantity,
            price,
            format_price(line.subtotal)
        ));
    }
    out.push(String::new());
    out.push(format!("items: {}", cart.count()));
    out.push(format!("total: {}", format_price(cart.total(items))));
    out
}
