//! Shopping cart quantities.
//!
//! [`CartLedger`] is owned by whatever view holds the cart and is mutated one
//! button press at a time. Every mutation reports a [`LedgerChange`]. Prices
//! are not stored in the ledger; totals are computed against a catalog slice
//! supplied by the caller.

mod catalog;
mod ledger;
mod op;

pub use catalog::{format_price, load_catalog, CatalogItem};
pub use ledger::{CartLedger, CartLine, LedgerChange};
pub use op::{CartOp, CartOpParseError};

#[cfg(test)]
mod tests;
