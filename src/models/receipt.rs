//! Receipt model
//!
//! Receipts are the spending record: every reconciliation and every budget
//! figure is derived from them. Once stored, a receipt is immutable except
//! for deletion.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ReceiptId;
use super::money::Money;

/// A single purchased line on a receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    /// Item name as it appeared on the receipt
    pub name: String,

    /// Purchased quantity
    #[serde(default = "default_quantity")]
    pub quantity: f64,

    /// Unit of measure, when the receipt shows one
    #[serde(default)]
    pub unit: String,

    /// Price paid for the line
    #[serde(default)]
    pub price: Money,
}

fn default_quantity() -> f64 {
    1.0
}

/// A stored grocery receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique identifier
    pub id: ReceiptId,

    /// Store the purchase was made at (empty means unknown)
    #[serde(default)]
    pub store: String,

    /// Purchase date
    pub date: NaiveDate,

    /// Receipt total as printed (may differ from the item sum by tax)
    pub total: Money,

    /// Purchased lines
    #[serde(default)]
    pub items: Vec<ReceiptItem>,

    /// When the receipt was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Receipt {
    /// Create a receipt; a missing total falls back to the sum of line prices
    pub fn new(
        store: impl Into<String>,
        date: NaiveDate,
        total: Option<Money>,
        items: Vec<ReceiptItem>,
    ) -> Self {
        let total = total.unwrap_or_else(|| items.iter().map(|i| i.price).sum());
        Self {
            id: ReceiptId::new(),
            store: store.into(),
            date,
            total,
            items,
            recorded_at: Utc::now(),
        }
    }

    /// Sum of line prices (excludes tax and fees printed only in the total)
    pub fn items_total(&self) -> Money {
        self.items.iter().map(|i| i.price).sum()
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = if self.store.is_empty() {
            "Unknown"
        } else {
            &self.store
        };
        write!(
            f,
            "{} - {} ({} items, {})",
            self.date,
            store,
            self.items.len(),
            self.total
        )
    }
}
