//! Shopping list item model
//!
//! Shopping-list lines are produced by aggregating planned-week recipe
//! ingredients, deduplicated by (name, store). Manual lines can be added
//! alongside the generated ones.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ShoppingItemId;
use super::money::Money;

/// Store label used when an ingredient has no assigned store
pub const UNASSIGNED_STORE: &str = "Unassigned";

/// A line on the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Unique identifier
    pub id: ShoppingItemId,

    /// Item name
    pub name: String,

    /// Combined quantity across all source recipes
    pub quantity: f64,

    /// Unit of measure (from the last contributing ingredient)
    #[serde(default)]
    pub unit: String,

    /// Store the item should be bought at, or "Unassigned"
    #[serde(default)]
    pub store: String,

    /// Estimated price (from the last contributing ingredient)
    #[serde(default)]
    pub price: Money,

    /// Whether the item has been picked up
    #[serde(default)]
    pub checked: bool,

    /// Names of the recipes that contributed this line (empty for manual adds)
    #[serde(default)]
    pub recipes: Vec<String>,
}

impl ShoppingListItem {
    /// Create a manually-added shopping line
    pub fn manual(name: impl Into<String>, quantity: f64, store: Option<String>) -> Self {
        Self {
            id: ShoppingItemId::new(),
            name: name.into(),
            quantity,
            unit: String::new(),
            store: store.unwrap_or_else(|| UNASSIGNED_STORE.to_string()),
            price: Money::zero(),
            checked: false,
            recipes: Vec::new(),
        }
    }

    /// The dedup key this line occupies: normalized name plus store
    pub fn dedup_key(&self) -> (String, String) {
        (
            crate::services::matcher::normalize_name(&self.name),
            self.store.clone(),
        )
    }
}

impl fmt::Display for ShoppingListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.checked { "x" } else { " " };
        if self.unit.is_empty() {
            write!(f, "[{}] {} ({})", mark, self.name, self.quantity)
        } else {
            write!(
                f,
                "[{}] {} ({} {})",
                mark, self.name, self.quantity, self.unit
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_item_defaults_to_unassigned() {
        let item = ShoppingListItem::manual("Paper towels", 1.0, None);
        assert_eq!(item.store, UNASSIGNED_STORE);
        assert!(!item.checked);
        assert!(item.recipes.is_empty());
    }

    #[test]
    fn test_dedup_key_normalizes_name() {
        let item = ShoppingListItem::manual("  Chicken Breast ", 2.0, Some("Costco".to_string()));
        assert_eq!(
            item.dedup_key(),
            ("chicken breast".to_string(), "Costco".to_string())
        );
    }

    #[test]
    fn test_display_checkbox() {
        let mut item = ShoppingListItem::manual("Milk", 1.0, None);
        assert_eq!(format!("{}", item), "[ ] Milk (1)");
        item.checked = true;
        assert_eq!(format!("{}", item), "[x] Milk (1)");
    }
}
