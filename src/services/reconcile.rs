//! Price reconciliation
//!
//! Applies a finalized receipt's observed prices to matching recipe
//! ingredients and pantry items, producing an ordered change log for display.
//! The transform is pure: callers receive new collections and commit them (or
//! not) as one atomic save.
//!
//! Two asymmetries are load-bearing:
//!  - Recipe ingredients only update when the observed price differs, so a
//!    second run of the same receipt logs no recipe changes.
//!  - Pantry items update unconditionally, because the purchase date must
//!    advance even when the price is unchanged.

use crate::models::{Money, PantryItem, Receipt, Recipe};
use crate::services::cost;
use crate::services::matcher::names_match;

/// Which collection a change-log entry touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Recipe,
    Pantry,
}

/// One entry in the reconciliation change log
///
/// Derived data for display; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceChange {
    pub kind: ChangeKind,
    /// Recipe name or pantry item name
    pub target_name: String,
    /// The matched ingredient, for recipe-kind entries
    pub ingredient_name: Option<String>,
    pub old_price: Money,
    pub new_price: Money,
}

/// Result of reconciling one receipt
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    pub recipes: Vec<Recipe>,
    pub pantry: Vec<PantryItem>,
    pub log: Vec<PriceChange>,
}

impl ReconcileOutcome {
    /// Number of recipe-kind changes
    pub fn recipe_changes(&self) -> usize {
        self.log
            .iter()
            .filter(|c| c.kind == ChangeKind::Recipe)
            .count()
    }

    /// Number of pantry-kind changes
    pub fn pantry_changes(&self) -> usize {
        self.log
            .iter()
            .filter(|c| c.kind == ChangeKind::Pantry)
            .count()
    }
}

/// Apply a receipt's prices to the given collections
///
/// Every receipt line is matched by name against every recipe ingredient and
/// every pantry item; all matches are updated, across recipes and stores
/// alike. Recipes with at least one changed ingredient get their total
/// recomputed; untouched recipes pass through unchanged.
pub fn apply_receipt(
    receipt: &Receipt,
    recipes: &[Recipe],
    pantry: &[PantryItem],
) -> ReconcileOutcome {
    let mut recipes = recipes.to_vec();
    let mut pantry = pantry.to_vec();
    let mut log = Vec::new();

    let receipt_store = if receipt.store.trim().is_empty() {
        None
    } else {
        Some(receipt.store.clone())
    };

    for line in &receipt.items {
        for recipe in recipes.iter_mut() {
            let mut touched = false;
            for ing in recipe.ingredients.iter_mut() {
                if names_match(&ing.name, &line.name) && ing.price != line.price {
                    log.push(PriceChange {
                        kind: ChangeKind::Recipe,
                        target_name: recipe.name.clone(),
                        ingredient_name: Some(ing.name.clone()),
                        old_price: ing.price,
                        new_price: line.price,
                    });
                    ing.price = line.price;
                    ing.store = receipt_store.clone();
                    touched = true;
                }
            }
            if touched {
                recipe.total_cost = cost::recipe_total(&recipe.ingredients);
            }
        }

        for item in pantry.iter_mut() {
            if names_match(&item.name, &line.name) {
                log.push(PriceChange {
                    kind: ChangeKind::Pantry,
                    target_name: item.name.clone(),
                    ingredient_name: None,
                    old_price: item.last_purchase_price,
                    new_price: line.price,
                });
                item.last_purchase_price = line.price;
                item.last_purchase_date = Some(receipt.date);
            }
        }
    }

    ReconcileOutcome {
        recipes,
        pantry,
        log,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, ReceiptItem};
    use chrono::NaiveDate;

    fn receipt(store: &str, items: Vec<(&str, i64)>) -> Receipt {
        let items = items
            .into_iter()
            .map(|(name, cents)| ReceiptItem {
                name: name.to_string(),
                quantity: 1.0,
                unit: String::new(),
                price: Money::from_cents(cents),
            })
            .collect();
        Receipt::new(
            store,
            NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            None,
            items,
        )
    }

    fn recipe_with_eggs(price_cents: i64) -> Recipe {
        let mut recipe = Recipe::new("Omelette", 2).unwrap();
        recipe.add_ingredient(Ingredient::with_price(
            "Eggs",
            6.0,
            "",
            Some("Walmart".to_string()),
            Money::from_cents(price_cents),
        ));
        recipe.add_ingredient(Ingredient::with_price(
            "Butter",
            1.0,
            "tbsp",
            None,
            Money::from_cents(100),
        ));
        recipe
    }

    #[test]
    fn test_price_propagates_to_matching_ingredient() {
        let recipes = vec![recipe_with_eggs(299)];
        let receipt = receipt("Aldi", vec![("eggs", 349)]);

        let outcome = apply_receipt(&receipt, &recipes, &[]);

        let eggs = &outcome.recipes[0].ingredients[0];
        assert_eq!(eggs.price, Money::from_cents(349));
        assert_eq!(eggs.store.as_deref(), Some("Aldi"));
        // total recomputed from the new ingredient price
        assert_eq!(outcome.recipes[0].total_cost, Money::from_cents(449));

        assert_eq!(outcome.recipe_changes(), 1);
        let change = &outcome.log[0];
        assert_eq!(change.old_price, Money::from_cents(299));
        assert_eq!(change.new_price, Money::from_cents(349));
        assert_eq!(change.ingredient_name.as_deref(), Some("Eggs"));
    }

    #[test]
    fn test_unchanged_price_leaves_recipe_alone() {
        let recipes = vec![recipe_with_eggs(349)];
        let receipt = receipt("Aldi", vec![("Eggs", 349)]);

        let outcome = apply_receipt(&receipt, &recipes, &[]);

        assert_eq!(outcome.recipe_changes(), 0);
        // store assignment only happens alongside a price change
        assert_eq!(
            outcome.recipes[0].ingredients[0].store.as_deref(),
            Some("Walmart")
        );
    }

    #[test]
    fn test_reconciliation_idempotent_for_recipes_not_pantry() {
        let recipes = vec![recipe_with_eggs(299)];
        let mut pantry_item = PantryItem::new("Eggs", 12.0, "");
        pantry_item.last_purchase_price = Money::from_cents(299);
        let pantry = vec![pantry_item];
        let receipt = receipt("Aldi", vec![("Eggs", 349)]);

        let first = apply_receipt(&receipt, &recipes, &pantry);
        assert_eq!(first.recipe_changes(), 1);
        assert_eq!(first.pantry_changes(), 1);

        let second = apply_receipt(&receipt, &first.recipes, &first.pantry);
        // prices converged, so no recipe entries the second time
        assert_eq!(second.recipe_changes(), 0);
        // pantry still logs: the purchase date advances regardless
        assert_eq!(second.pantry_changes(), 1);
        assert_eq!(
            second.pantry[0].last_purchase_date,
            Some(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap())
        );
    }

    #[test]
    fn test_many_to_one_propagation() {
        // two recipes and a pantry item all match one receipt line
        let recipes = vec![recipe_with_eggs(299), {
            let mut r = Recipe::new("Fried Rice", 4).unwrap();
            r.add_ingredient(Ingredient::with_price(
                "EGGS",
                2.0,
                "",
                None,
                Money::from_cents(250),
            ));
            r
        }];
        let pantry = vec![PantryItem::new("eggs ", 6.0, "")];
        let receipt = receipt("Costco", vec![("Eggs", 400)]);

        let outcome = apply_receipt(&receipt, &recipes, &pantry);

        assert_eq!(outcome.recipe_changes(), 2);
        assert_eq!(outcome.pantry_changes(), 1);
        assert_eq!(
            outcome.recipes[1].ingredients[0].price,
            Money::from_cents(400)
        );
        assert_eq!(outcome.pantry[0].last_purchase_price, Money::from_cents(400));
    }

    #[test]
    fn test_no_match_no_changes() {
        let recipes = vec![recipe_with_eggs(299)];
        let receipt = receipt("Aldi", vec![("Tomatoes", 199)]);

        let outcome = apply_receipt(&receipt, &recipes, &[]);
        assert!(outcome.log.is_empty());
        assert_eq!(outcome.recipes[0].total_cost, recipes[0].total_cost);
    }

    #[test]
    fn test_empty_receipt_store_clears_ingredient_store() {
        let recipes = vec![recipe_with_eggs(299)];
        let receipt = receipt("", vec![("Eggs", 349)]);

        let outcome = apply_receipt(&receipt, &recipes, &[]);
        assert_eq!(outcome.recipes[0].ingredients[0].store, None);
    }
}
