//! Recipe display formatting
//!
//! Formats recipes for terminal output in table and detail views.

use crate::models::Recipe;
use crate::services::cost::{per_serving, ScaledRecipe};

/// Format a list of recipes as a table
pub fn format_recipe_list(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes found.".to_string();
    }

    let name_width = recipes
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>8}  {:>10}  {:>10}  {:>4}  {}\n",
        "Name",
        "Servings",
        "Total",
        "Per Srv",
        "Fav",
        "Tags",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->8}  {:->10}  {:->10}  {:->4}  {:-<12}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for recipe in recipes {
        let tags: Vec<&str> = recipe.tags.iter().map(|t| t.as_str()).collect();
        output.push_str(&format!(
            "{:<name_width$}  {:>8}  {:>10}  {:>10}  {:>4}  {}\n",
            recipe.name,
            recipe.servings,
            recipe.total_cost.to_string(),
            recipe.per_serving().to_string(),
            if recipe.is_favorite { "*" } else { "" },
            tags.join(", "),
            name_width = name_width,
        ));
    }

    output
}

/// Format a single recipe's details
pub fn format_recipe_details(recipe: &Recipe) -> String {
    let mut output = String::new();

    output.push_str(&format!("Recipe: {}\n", recipe.name));
    output.push_str(&format!("  ID:           {}\n", recipe.id));
    output.push_str(&format!("  Servings:     {}\n", recipe.servings));
    output.push_str(&format!("  Total cost:   {}\n", recipe.total_cost));
    output.push_str(&format!("  Per serving:  {}\n", recipe.per_serving()));
    if !recipe.prep_time.is_empty() {
        output.push_str(&format!("  Prep time:    {}\n", recipe.prep_time));
    }
    if !recipe.cook_time.is_empty() {
        output.push_str(&format!("  Cook time:    {}\n", recipe.cook_time));
    }
    if !recipe.tags.is_empty() {
        let tags: Vec<&str> = recipe.tags.iter().map(|t| t.as_str()).collect();
        output.push_str(&format!("  Tags:         {}\n", tags.join(", ")));
    }
    if !recipe.family_members.is_empty() {
        output.push_str(&format!(
            "  Liked by:     {}\n",
            recipe.family_members.join(", ")
        ));
    }
    if let Some(last_made) = recipe.last_made {
        output.push_str(&format!(
            "  Last made:    {} ({} times total)\n",
            last_made, recipe.times_made
        ));
    }

    if !recipe.ingredients.is_empty() {
        output.push_str("\nIngredients:\n");
        for ing in &recipe.ingredients {
            let store = ing.store.as_deref().unwrap_or("-");
            output.push_str(&format!(
                "  {:<24} {:>8} {:<8} {:>10}  {}\n",
                ing.name,
                ing.quantity,
                ing.unit,
                ing.price.to_string(),
                store,
            ));
        }
    }

    if !recipe.instructions.is_empty() {
        output.push_str(&format!("\nInstructions:\n{}\n", recipe.instructions));
    }
    if !recipe.notes.is_empty() {
        output.push_str(&format!("\nNotes:\n{}\n", recipe.notes));
    }

    output
}

/// Format a recipe rescaled to a different serving count
pub fn format_scaled_recipe(scaled: &ScaledRecipe) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} (scaled to {} servings)\n",
        scaled.name, scaled.servings
    ));
    output.push_str(&format!("  Total cost:   {}\n", scaled.total_cost));
    output.push_str(&format!(
        "  Per serving:  {}\n",
        per_serving(scaled.total_cost, scaled.servings)
    ));

    output.push_str("\nIngredients:\n");
    for ing in &scaled.ingredients {
        output.push_str(&format!(
            "  {:<24} {:>8} {:<8} {:>10}\n",
            ing.name,
            ing.display_quantity,
            ing.unit,
            ing.price.to_string(),
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, Money};

    #[test]
    fn test_empty_list() {
        assert_eq!(format_recipe_list(&[]), "No recipes found.");
    }

    #[test]
    fn test_list_contains_costs() {
        let mut recipe = Recipe::new("Pancakes", 4).unwrap();
        recipe.add_ingredient(Ingredient::with_price(
            "Flour",
            2.0,
            "cups",
            None,
            Money::from_cents(120),
        ));
        let output = format_recipe_list(&[recipe]);
        assert!(output.contains("Pancakes"));
        assert!(output.contains("$1.20"));
        assert!(output.contains("$0.30"));
    }

    #[test]
    fn test_details_show_ingredients() {
        let mut recipe = Recipe::new("Pancakes", 4).unwrap();
        recipe.add_ingredient(Ingredient::with_price(
            "Flour",
            2.0,
            "cups",
            Some("Aldi".to_string()),
            Money::from_cents(120),
        ));
        let output = format_recipe_details(&recipe);
        assert!(output.contains("Ingredients:"));
        assert!(output.contains("Flour"));
        assert!(output.contains("Aldi"));
    }
}
