//! Pantry display formatting

use std::collections::BTreeMap;

use crate::models::{PantryCategory, PantryItem};

/// Format the pantry grouped by category, flagging low stock
pub fn format_pantry(items: &[PantryItem]) -> String {
    if items.is_empty() {
        return "Pantry is empty.".to_string();
    }

    let mut by_category: BTreeMap<PantryCategory, Vec<&PantryItem>> = BTreeMap::new();
    for item in items {
        by_category.entry(item.category).or_default().push(item);
    }

    let mut output = String::new();
    for (category, group) in &by_category {
        output.push_str(&format!("{}:\n", category));
        for item in group {
            let qty = if item.unit.is_empty() {
                format!("{}", item.quantity)
            } else {
                format!("{} {}", item.quantity, item.unit)
            };
            let price = if item.last_purchase_price.is_zero() {
                String::new()
            } else {
                format!("  last {}", item.last_purchase_price)
            };
            let low = if item.is_low_stock() { "  LOW" } else { "" };
            output.push_str(&format!(
                "  {:<24} {:>10}{}{}\n",
                item.name, qty, price, low,
            ));
        }
    }

    let low_count = items.iter().filter(|i| i.is_low_stock()).count();
    if low_count > 0 {
        output.push_str(&format!("\n{} item(s) running low\n", low_count));
    }

    output
}
