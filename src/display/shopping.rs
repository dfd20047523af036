//! Shopping list display, grouped by store

use std::collections::BTreeMap;

use crate::models::{Money, ShoppingListItem};

/// Format the shopping list grouped by store
///
/// Stores appear alphabetically with "Unassigned" falling wherever the sort
/// puts it; each group shows a subtotal of its estimated prices.
pub fn format_shopping_list(items: &[ShoppingListItem]) -> String {
    if items.is_empty() {
        return "Shopping list is empty.".to_string();
    }

    let mut by_store: BTreeMap<&str, Vec<&ShoppingListItem>> = BTreeMap::new();
    for item in items {
        by_store.entry(item.store.as_str()).or_default().push(item);
    }

    let mut output = String::new();
    for (store, group) in &by_store {
        let subtotal: Money = group.iter().map(|i| i.price).sum();
        output.push_str(&format!("{} ({} items, est. {})\n", store, group.len(), subtotal));
        for item in group {
            let mark = if item.checked { "x" } else { " " };
            let qty = if item.unit.is_empty() {
                format!("{}", item.quantity)
            } else {
                format!("{} {}", item.quantity, item.unit)
            };
            let sources = if item.recipes.is_empty() {
                String::new()
            } else {
                format!("  ({})", item.recipes.join(", "))
            };
            output.push_str(&format!(
                "  [{}] {:<24} {:>10} {:>10}{}\n",
                mark,
                item.name,
                qty,
                item.price.to_string(),
                sources,
            ));
        }
        output.push('\n');
    }

    let total: Money = items.iter().map(|i| i.price).sum();
    let checked = items.iter().filter(|i| i.checked).count();
    output.push_str(&format!(
        "Total estimated: {} ({} of {} checked)\n",
        total,
        checked,
        items.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_shopping_list(&[]), "Shopping list is empty.");
    }

    #[test]
    fn test_grouped_by_store() {
        let mut a = ShoppingListItem::manual("Milk", 1.0, Some("Aldi".to_string()));
        a.price = Money::from_cents(349);
        let b = ShoppingListItem::manual("Batteries", 1.0, None);

        let output = format_shopping_list(&[a, b]);
        assert!(output.contains("Aldi (1 items"));
        assert!(output.contains("Unassigned (1 items"));
        assert!(output.contains("$3.49"));
    }
}
