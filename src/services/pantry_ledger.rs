//! Pantry quantity bookkeeping
//!
//! Quantity merges live here; price/date propagation from receipts is the
//! reconciler's job. Checkout is the only path by which shopping-list lines
//! become pantry stock.

use chrono::NaiveDate;

use crate::models::{PantryItem, PantryItemId, ShoppingListItem};
use crate::services::matcher::names_match;

/// Result of checking out a shopping list
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    pub pantry: Vec<PantryItem>,
    /// Shopping list with the checked lines removed
    pub shopping_list: Vec<ShoppingListItem>,
    /// How many checked lines were merged into the pantry
    pub moved: usize,
}

/// Move all checked shopping lines into the pantry
///
/// A checked line that matches an existing pantry item by name adds to its
/// quantity; otherwise a new item is created under "Other". Checked lines are
/// removed from the list either way; unchecked lines stay.
pub fn checkout(
    pantry: &[PantryItem],
    shopping_list: &[ShoppingListItem],
    today: NaiveDate,
) -> CheckoutOutcome {
    let mut pantry = pantry.to_vec();
    let mut remaining = Vec::new();
    let mut moved = 0;

    for line in shopping_list {
        if !line.checked {
            remaining.push(line.clone());
            continue;
        }
        moved += 1;

        match pantry.iter_mut().find(|p| names_match(&p.name, &line.name)) {
            Some(item) => {
                item.quantity += line.quantity;
            }
            None => {
                let mut item = PantryItem::new(line.name.clone(), line.quantity, line.unit.clone());
                item.last_purchase_price = line.price;
                item.last_purchase_date = Some(today);
                pantry.push(item);
            }
        }
    }

    CheckoutOutcome {
        pantry,
        shopping_list: remaining,
        moved,
    }
}

/// Adjust a pantry item's quantity by `delta`
///
/// A resulting quantity at or below zero deletes the item; zero or negative
/// quantities are never stored. Returns false when the id is unknown.
pub fn adjust_quantity(pantry: &mut Vec<PantryItem>, id: PantryItemId, delta: f64) -> bool {
    let Some(pos) = pantry.iter().position(|p| p.id == id) else {
        return false;
    };

    pantry[pos].quantity += delta;
    if pantry[pos].quantity <= 0.0 {
        pantry.remove(pos);
    }
    true
}

/// Add stock by name, merging into an existing item when one matches
///
/// Returns the id of the item that now holds the stock.
pub fn add_item(pantry: &mut Vec<PantryItem>, new_item: PantryItem) -> PantryItemId {
    match pantry
        .iter_mut()
        .find(|p| names_match(&p.name, &new_item.name))
    {
        Some(existing) => {
            existing.quantity += new_item.quantity;
            existing.id
        }
        None => {
            let id = new_item.id;
            pantry.push(new_item);
            id
        }
    }
}

/// Items at or below the low-stock threshold
pub fn low_stock(pantry: &[PantryItem]) -> Vec<&PantryItem> {
    pantry.iter().filter(|p| p.is_low_stock()).collect()
}
