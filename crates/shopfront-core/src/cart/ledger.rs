//! In-memory cart quantities keyed by item id.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::num::NonZeroU32;

use super::catalog::CatalogItem;
use super::op::CartOp;

/// Outcome of a single ledger mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerChange {
    /// One unit added; `quantity` is the new count.
    Added { quantity: NonZeroU32 },
    /// One unit removed, entry kept; `quantity` is the new count.
    Decremented { quantity: NonZeroU32 },
    /// The last unit was removed and the entry deleted.
    Removed,
    /// The item was not in the cart.
    NoOp,
}

/// One priced row of the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item_id: String,
    pub quantity: NonZeroU32,
    /// `None` when the item is missing from the catalog.
    pub unit_price: Option<u64>,
    pub subtotal: u64,
}

/// Map from item id to a strictly positive quantity.
///
/// There is no zero-quantity state: removing the last unit deletes the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartLedger {
    entries: BTreeMap<String, NonZeroU32>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item_id`, starting at 1 if absent.
    pub fn add(&mut self, item_id: impl Into<String>) -> LedgerChange {
        let quantity = match self.entries.entry(item_id.into()) {
            Entry::Occupied(mut slot) => {
                let next = slot.get().saturating_add(1);
                slot.insert(next);
                next
            }
            Entry::Vacant(slot) => *slot.insert(NonZeroU32::MIN),
        };
        LedgerChange::Added { quantity }
    }

    /// Removes one unit of `item_id`; the entry goes away with its last unit.
    pub fn remove(&mut self, item_id: &str) -> LedgerChange {
        let Some(current) = self.entries.get_mut(item_id) else {
            tracing::trace!(item_id, "remove on item not in cart");
            return LedgerChange::NoOp;
        };
        match NonZeroU32::new(current.get() - 1) {
            Some(quantity) => {
                *current = quantity;
                LedgerChange::Decremented { quantity }
            }
            None => {
                self.entries.remove(item_id);
                LedgerChange::Removed
            }
        }
    }

    pub fn apply(&mut self, op: &CartOp) -> LedgerChange {
        match op {
            CartOp::Add(id) => self.add(id.as_str()),
            CartOp::Remove(id) => self.remove(id),
        }
    }

    pub fn quantity(&self, item_id: &str) -> Option<NonZeroU32> {
        self.entries.get(item_id).copied()
    }

    /// Total number of units across all entries.
    pub fn count(&self) -> u64 {
        self.entries.values().map(|q| u64::from(q.get())).sum()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in item id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NonZeroU32)> + '_ {
        self.entries.iter().map(|(id, q)| (id.as_str(), *q))
    }

    /// Sum of quantity × price in minor units.
    ///
    /// Prices come from `items` by id (first occurrence wins). Entries with no
    /// matching item contribute zero; see [`CartLedger::lines`] to find them.
    pub fn total(&self, items: &[CatalogItem]) -> u64 {
        self.lines(items)
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.subtotal))
    }

    /// Per-entry breakdown against `items`, in item id order.
    pub fn lines(&self, items: &[CatalogItem]) -> Vec<CartLine> {
        let mut prices: HashMap<&str, u64> = HashMap::with_capacity(items.len());
        for item in items {
            prices.entry(item.id.as_str()).or_insert(item.price);
        }

        self.iter()
            .map(|(id, quantity)| {
                let unit_price = prices.get(id).copied();
                let subtotal = unit_price
                    .map(|p| p.saturating_mul(u64::from(quantity.get())))
                    .unwrap_or(0);
                CartLine {
                    item_id: id.to_string(),
                    quantity,
                    unit_price,
                    subtotal,
                }
            })
            .collect()
    }
}
