//! Pantry item model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PantryItemId;
use super::money::Money;

/// Category a pantry item is filed under
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum PantryCategory {
    Produce,
    Dairy,
    Meat,
    Pantry,
    Frozen,
    Bakery,
    Beverages,
    Spices,
    #[default]
    Other,
}

impl PantryCategory {
    /// All categories in display order
    pub fn all() -> &'static [PantryCategory] {
        &[
            Self::Produce,
            Self::Dairy,
            Self::Meat,
            Self::Pantry,
            Self::Frozen,
            Self::Bakery,
            Self::Beverages,
            Self::Spices,
            Self::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::Dairy => "Dairy",
            Self::Meat => "Meat",
            Self::Pantry => "Pantry",
            Self::Frozen => "Frozen",
            Self::Bakery => "Bakery",
            Self::Beverages => "Beverages",
            Self::Spices => "Spices",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for PantryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PantryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "produce" => Ok(Self::Produce),
            "dairy" => Ok(Self::Dairy),
            "meat" => Ok(Self::Meat),
            "pantry" => Ok(Self::Pantry),
            "frozen" => Ok(Self::Frozen),
            "bakery" => Ok(Self::Bakery),
            "beverages" | "beverage" => Ok(Self::Beverages),
            "spices" | "spice" => Ok(Self::Spices),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// A stocked item in the pantry
///
/// Pantry quantities are fractional (half a bag of flour) and a quantity at
/// or below the low-stock threshold flags the item for restocking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    /// Unique identifier
    pub id: PantryItemId,

    /// Item name (matched case-insensitively during reconciliation)
    pub name: String,

    /// Quantity on hand
    pub quantity: f64,

    /// Unit of measure
    #[serde(default)]
    pub unit: String,

    /// Category for grouping
    #[serde(default)]
    pub category: PantryCategory,

    /// Price paid the last time the item was bought (zero when unknown)
    #[serde(default)]
    pub last_purchase_price: Money,

    /// Date of the last purchase, advanced by every reconciliation that
    /// touches this item
    #[serde(default)]
    pub last_purchase_date: Option<NaiveDate>,
}

/// Quantity at or below this counts as low stock
pub const LOW_STOCK_THRESHOLD: f64 = 1.0;

impl PantryItem {
    /// Create a new pantry item
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            id: PantryItemId::new(),
            name: name.into(),
            quantity,
            unit: unit.into(),
            category: PantryCategory::Other,
            last_purchase_price: Money::zero(),
            last_purchase_date: None,
        }
    }

    /// Whether the item is running low
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= LOW_STOCK_THRESHOLD
    }
}

impl fmt::Display for PantryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{} ({})", self.name, self.quantity)
        } else {
            write!(f, "{} ({} {})", self.name, self.quantity, self.unit)
        }
    }
}
