//! Catalog records the ledger prices against.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A sellable item as supplied by the checkout/catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    /// Price in minor currency units (cents).
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, price: u64) -> Self {
        Self {
            id: id.into(),
            price,
            name: None,
        }
    }
}

/// Reads a JSON array of catalog items.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogItem>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read catalog: {}", path.display()))?;
    let items: Vec<CatalogItem> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse catalog: {}", path.display()))?;
    tracing::debug!(path = %path.display(), items = items.len(), "loaded catalog");
    Ok(items)
}

/// Formats minor units as `major.minor` with two decimals, e.g. `1250` → `12.50`.
pub fn format_price(minor: u64) -> String {
    format!("{}.{:02}", minor / 100, minor % 100)
}
