//! Recipe CLI commands

use std::fs;

use clap::Subcommand;

use crate::display::recipe::{format_recipe_details, format_recipe_list, format_scaled_recipe};
use crate::error::{KitchenError, KitchenResult};
use crate::models::{Ingredient, Money, Recipe};
use crate::scan;
use crate::services::cost;
use crate::storage::LedgerStore;

/// Recipe subcommands
#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Add a new recipe
    Add {
        /// Recipe name
        name: String,
        /// Number of servings
        #[arg(short, long, default_value_t = 4)]
        servings: u32,
        /// Tags, repeatable (e.g., -t Dinner -t Quick)
        #[arg(short, long)]
        tag: Vec<String>,
        /// Family members who like this recipe, repeatable
        #[arg(short, long)]
        member: Vec<String>,
    },
    /// List all recipes
    List {
        /// Only favorites
        #[arg(long)]
        favorites: bool,
        /// Only recipes with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Show a recipe's details
    Show {
        /// Recipe name or ID
        recipe: String,
    },
    /// Show a recipe rescaled to a different serving count
    Scale {
        /// Recipe name or ID
        recipe: String,
        /// Target servings
        servings: u32,
    },
    /// Add an ingredient to a recipe
    AddIngredient {
        /// Recipe name or ID
        recipe: String,
        /// Ingredient name
        name: String,
        /// Quantity
        #[arg(short, long, default_value_t = 1.0)]
        quantity: f64,
        /// Unit of measure
        #[arg(short, long, default_value = "")]
        unit: String,
        /// Store to buy at
        #[arg(long)]
        store: Option<String>,
        /// Price (e.g., "4.99")
        #[arg(short, long)]
        price: Option<String>,
    },
    /// Remove an ingredient from a recipe by position (1-based)
    RemoveIngredient {
        /// Recipe name or ID
        recipe: String,
        /// Ingredient position as shown by `recipe show`
        position: usize,
    },
    /// Toggle a recipe's favorite flag
    Favorite {
        /// Recipe name or ID
        recipe: String,
    },
    /// Record that a recipe was cooked today
    Made {
        /// Recipe name or ID
        recipe: String,
    },
    /// Import a recipe from a scanned JSON file
    Import {
        /// Path to the scan payload
        file: String,
    },
    /// Delete a recipe
    Delete {
        /// Recipe name or ID
        recipe: String,
    },
}

/// Error unless no stored recipe already uses this name
fn ensure_name_free(recipes: &[Recipe], name: &str) -> KitchenResult<()> {
    if recipes
        .iter()
        .any(|r| crate::services::names_match(&r.name, name))
    {
        return Err(KitchenError::Duplicate {
            entity_type: "Recipe",
            identifier: name.to_string(),
        });
    }
    Ok(())
}

/// Handle a recipe command
pub fn handle_recipe_command(store: &LedgerStore, cmd: RecipeCommands) -> KitchenResult<()> {
    let mut ledger = store.load()?;

    match cmd {
        RecipeCommands::Add {
            name,
            servings,
            tag,
            member,
        } => {
            ensure_name_free(&ledger.recipes, &name)?;
            let mut recipe =
                Recipe::new(name, servings).map_err(|e| KitchenError::Validation(e.to_string()))?;
            recipe.tags = tag.into_iter().collect();
            recipe.family_members = member;

            println!("Added recipe: {} ({})", recipe.name, recipe.id);
            ledger.recipes.push(recipe);
            store.save(&ledger)?;
        }

        RecipeCommands::List { favorites, tag } => {
            let filtered: Vec<Recipe> = ledger
                .recipes
                .iter()
                .filter(|r| !favorites || r.is_favorite)
                .filter(|r| {
                    tag.as_ref()
                        .map(|t| r.tags.iter().any(|rt| rt.eq_ignore_ascii_case(t)))
                        .unwrap_or(true)
                })
                .cloned()
                .collect();
            print!("{}", format_recipe_list(&filtered));
        }

        RecipeCommands::Show { recipe } => {
            let found = ledger.resolve_recipe(&recipe)?;
            print!("{}", format_recipe_details(found));
        }

        RecipeCommands::Scale { recipe, servings } => {
            if servings == 0 {
                return Err(KitchenError::Validation(
                    "Target servings must be at least 1".into(),
                ));
            }
            let found = ledger.resolve_recipe(&recipe)?;
            let scaled = cost::scale(found, servings);
            print!("{}", format_scaled_recipe(&scaled));
        }

        RecipeCommands::AddIngredient {
            recipe,
            name,
            quantity,
            unit,
            store: ingredient_store,
            price,
        } => {
            if quantity < 0.0 {
                return Err(KitchenError::Validation(
                    "Quantity cannot be negative".into(),
                ));
            }
            let price = match price {
                Some(p) => Money::parse(&p)
                    .map_err(|e| KitchenError::Validation(format!("Invalid price: {}", e)))?,
                None => Money::zero(),
            };

            let found = ledger.resolve_recipe_mut(&recipe)?;
            found.add_ingredient(Ingredient::with_price(
                name.clone(),
                quantity,
                unit,
                ingredient_store,
                price,
            ));
            println!(
                "Added {} to {} (total now {})",
                name, found.name, found.total_cost
            );
            store.save(&ledger)?;
        }

        RecipeCommands::RemoveIngredient { recipe, position } => {
            if position == 0 {
                return Err(KitchenError::Validation(
                    "Ingredient positions start at 1".into(),
                ));
            }
            let found = ledger.resolve_recipe_mut(&recipe)?;
            match found.remove_ingredient(position - 1) {
                Some(removed) => {
                    println!(
                        "Removed {} from {} (total now {})",
                        removed.name, found.name, found.total_cost
                    );
                    store.save(&ledger)?;
                }
                None => {
                    return Err(KitchenError::Validation(format!(
                        "No ingredient at position {}",
                        position
                    )));
                }
            }
        }

        RecipeCommands::Favorite { recipe } => {
            let found = ledger.resolve_recipe_mut(&recipe)?;
            found.is_favorite = !found.is_favorite;
            println!(
                "{} is {} a favorite",
                found.name,
                if found.is_favorite { "now" } else { "no longer" }
            );
            store.save(&ledger)?;
        }

        RecipeCommands::Made { recipe } => {
            let found = ledger.resolve_recipe_mut(&recipe)?;
            found.mark_made(chrono::Local::now().date_naive());
            println!("{} cooked {} time(s)", found.name, found.times_made);
            store.save(&ledger)?;
        }

        RecipeCommands::Import { file } => {
            let json = fs::read_to_string(&file)?;
            let recipe = scan::parse_recipe_scan(&json)?.into_recipe()?;
            ensure_name_free(&ledger.recipes, &recipe.name)?;
            println!(
                "Imported recipe: {} ({} ingredients, {})",
                recipe.name,
                recipe.ingredients.len(),
                recipe.total_cost
            );
            ledger.recipes.push(recipe);
            store.save(&ledger)?;
        }

        RecipeCommands::Delete { recipe } => {
            let found = ledger.resolve_recipe(&recipe)?;
            let (id, name) = (found.id, found.name.clone());
            ledger.recipes.retain(|r| r.id != id);
            println!("Deleted recipe: {}", name);
            store.save(&ledger)?;
        }
    }

    Ok(())
}
