//! Tests for CartLedger mutations and totals.

use std::num::NonZeroU32;

use super::*;

fn qty(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

#[test]
fn add_twice_totals_and_counts() {
    let mut cart = CartLedger::new();
    assert_eq!(cart.add("x"), LedgerChange::Added { quantity: qty(1) });
    assert_eq!(cart.add("x"), LedgerChange::Added { quantity: qty(2) });
    assert_eq!(cart.total(&[CatalogItem::new("x", 5)]), 10);
    assert_eq!(cart.count(), 2);
    assert_eq!(cart.len(), 1);
}

#[test]
fn remove_past_zero_deletes_entry() {
    let mut cart = CartLedger::new();
    cart.add("x");
    assert_eq!(cart.remove("x"), LedgerChange::Removed);
    assert_eq!(cart.remove("x"), LedgerChange::NoOp);
    assert_eq!(cart.quantity("x"), None);
    assert!(cart.is_empty());
}

#[test]
fn remove_decrements_before_deleting() {
    let mut cart = CartLedger::new();
    cart.add("x");
    cart.add("x");
    cart.add("x");
    assert_eq!(cart.remove("x"), LedgerChange::Decremented { quantity: qty(2) });
    assert_eq!(cart.quantity("x"), Some(qty(2)));
}

#[test]
fn remove_unknown_is_noop() {
    let mut cart = CartLedger::new();
    cart.add("y");
    assert_eq!(cart.remove("x"), LedgerChange::NoOp);
    assert_eq!(cart.count(), 1);
}

#[test]
fn total_with_empty_catalog_is_zero() {
    let mut cart = CartLedger::new();
    cart.add("x");
    cart.add("y");
    assert_eq!(cart.total(&[]), 0);
}

#[test]
fn unknown_items_contribute_zero_but_show_in_lines() {
    let mut cart = CartLedger::new();
    cart.add("pad-thai");
    cart.add("pad-thai");
    cart.add("retired-dish");
    let items = [CatalogItem::new("pad-thai", 1250), CatalogItem::new("tea", 300)];

    assert_eq!(cart.total(&items), 2500);

    let lines = cart.lines(&items);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].item_id, "pad-thai");
    assert_eq!(lines[0].unit_price, Some(1250));
    assert_eq!(lines[0].subtotal, 2500);
    assert_eq!(lines[1].item_id, "retired-dish");
    assert_eq!(lines[1].unit_price, None);
    assert_eq!(lines[1].subtotal, 0);
}

#[test]
fn duplicate_catalog_ids_use_first_price() {
    let mut cart = CartLedger::new();
    cart.add("x");
    let items = [CatalogItem::new("x", 7), CatalogItem::new("x", 100)];
    assert_eq!(cart.total(&items), 7);
}

#[test]
fn total_saturates_instead_of_overflowing() {
    let mut cart = CartLedger::new();
    cart.add("a");
    cart.add("a");
    cart.add("b");
    let items = [CatalogItem::new("a", u64::MAX), CatalogItem::new("b", 1)];
    assert_eq!(cart.total(&items), u64::MAX);
}

#[test]
fn apply_replays_ops() {
    let mut cart = CartLedger::new();
    let ops: Vec<CartOp> = ["add:x", "+x", "+y", "rm:x", "remove:z"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let changes: Vec<LedgerChange> = ops.iter().map(|op| cart.apply(op)).collect();
    assert_eq!(changes[3], LedgerChange::Decremented { quantity: qty(1) });
    assert_eq!(changes[4], LedgerChange::NoOp);
    assert_eq!(
        cart.iter().collect::<Vec<_>>(),
        vec![("x", qty(1)), ("y", qty(1))]
    );
}

#[test]
fn clear_empties_ledger() {
    let mut cart = CartLedger::new();
    cart.add("x");
    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.count(), 0);
}

#[test]
fn quantities_stay_positive_over_mixed_sequences() {
    let ids = ["a", "b", "c"];
    let mut cart = CartLedger::new();
    // Deterministic pseudo-random walk over add/remove.
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let id = ids[(seed % 3) as usize];
        if seed & 0x10 == 0 {
            cart.add(id);
        } else {
            cart.remove(id);
        }
        assert!(cart.iter().all(|(_, q)| q.get() >= 1));
        assert_eq!(
            cart.count(),
            cart.iter().map(|(_, q)| u64::from(q.get())).sum::<u64>()
        );
    }
}
