//! Shopping list aggregation
//!
//! Collapses one week's planned meals into a deduplicated shopping list.
//! Ingredients come from the live recipes (current prices), not from the
//! plan's cost snapshots. The generated list replaces the whole current
//! shopping list, manual entries included.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{
    Recipe, ShoppingItemId, ShoppingListItem, WeeklyPlan, UNASSIGNED_STORE,
};
use crate::services::matcher::normalize_name;

/// Build the shopping list for the week starting at `week_start`
///
/// Dedup key is (lowercased name, store-or-"Unassigned"): quantities are
/// summed across occurrences, price and unit are taken from the last-seen
/// ingredient for the key. Planned meals whose recipe has since been deleted
/// are skipped silently. Output order is first-seen order, which keeps the
/// list stable across regenerations of the same plan.
pub fn build_shopping_list(
    plan: &WeeklyPlan,
    week_start: NaiveDate,
    recipes: &[Recipe],
) -> Vec<ShoppingListItem> {
    // dedup key -> index into `items`
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut items: Vec<ShoppingListItem> = Vec::new();

    for (_, meal) in plan.iter().filter(|(k, _)| k.week_start == week_start) {
        let recipe = match recipes.iter().find(|r| r.id == meal.recipe_id) {
            Some(r) => r,
            None => continue,
        };

        for ing in &recipe.ingredients {
            if ing.name.trim().is_empty() {
                continue;
            }
            let store = ing
                .store
                .clone()
                .unwrap_or_else(|| UNASSIGNED_STORE.to_string());
            let dedup = (normalize_name(&ing.name), store.clone());

            match index.get(&dedup) {
                Some(&i) => {
                    let item = &mut items[i];
                    item.quantity += ing.quantity;
                    // last-seen wins for price and unit
                    item.price = ing.price;
                    item.unit = ing.unit.clone();
                    if !item.recipes.iter().any(|r| r == &recipe.name) {
                        item.recipes.push(recipe.name.clone());
                    }
                }
                None => {
                    index.insert(dedup, items.len());
                    items.push(ShoppingListItem {
                        id: ShoppingItemId::new(),
                        name: ing.name.trim().to_string(),
                        quantity: ing.quantity,
                        unit: ing.unit.clone(),
                        store,
                        price: ing.price,
                        checked: false,
                        recipes: vec![recipe.name.clone()],
                    });
                }
            }
        }
    }

    items
}
