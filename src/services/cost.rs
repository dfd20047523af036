//! Cost engine
//!
//! Pure computations over recipe ingredients: totals, per-serving cost, and
//! serving-count scaling. Nothing here mutates stored data; scaling output is
//! presentation data and must never be written back to a recipe.

use crate::models::{Ingredient, Money, Recipe};

/// Sum of ingredient prices
///
/// Prices arrive already coerced to Money (malformed input became zero at the
/// boundary), so a plain sum is the whole job.
pub fn recipe_total(ingredients: &[Ingredient]) -> Money {
    ingredients.iter().map(|i| i.price).sum()
}

/// Per-serving cost, rounded to the nearest cent
///
/// `servings >= 1` is enforced at recipe creation, so no division guard is
/// needed here.
pub fn per_serving(total: Money, servings: u32) -> Money {
    total.div_round(servings)
}

/// One ingredient line of a scaled recipe view
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledIngredient {
    pub name: String,
    /// Exact scaled quantity (carry this for further math)
    pub quantity: f64,
    /// Quantity rounded for display: whole number when the unscaled quantity
    /// was integral, one decimal place otherwise
    pub display_quantity: String,
    pub unit: String,
    pub store: Option<String>,
    pub price: Money,
}

/// A recipe rescaled to a different serving count, for display only
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledRecipe {
    pub name: String,
    pub servings: u32,
    pub ingredients: Vec<ScaledIngredient>,
    pub total_cost: Money,
}

/// Rescale a recipe's quantities and prices to `target_servings`
pub fn scale(recipe: &Recipe, target_servings: u32) -> ScaledRecipe {
    let factor = target_servings as f64 / recipe.servings as f64;

    let ingredients: Vec<ScaledIngredient> = recipe
        .ingredients
        .iter()
        .map(|ing| {
            let quantity = ing.quantity * factor;
            let display_quantity = if ing.quantity.fract() == 0.0 {
                format!("{}", quantity.round())
            } else {
                format!("{:.1}", quantity)
            };
            ScaledIngredient {
                name: ing.name.clone(),
                quantity,
                display_quantity,
                unit: ing.unit.clone(),
                store: ing.store.clone(),
                price: ing.price.scale(factor),
            }
        })
        .collect();

    let total_cost = ingredients.iter().map(|i| i.price).sum();

    ScaledRecipe {
        name: recipe.name.clone(),
        servings: target_servings,
        ingredients,
        total_cost,
    }
}
