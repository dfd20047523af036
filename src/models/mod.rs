//! Data models for the kitchen ledger

pub mod ids;
pub mod money;
pub mod pantry;
pub mod plan;
pub mod receipt;
pub mod recipe;
pub mod shopping;

pub use ids::{PantryItemId, ReceiptId, RecipeId, ShoppingItemId};
pub use money::Money;
pub use pantry::{PantryCategory, PantryItem, LOW_STOCK_THRESHOLD};
pub use plan::{week_start_for, Day, MealType, PlanKey, PlannedMeal, WeeklyPlan};
pub use receipt::{Receipt, ReceiptItem};
pub use recipe::{Ingredient, Recipe, RecipeValidationError};
pub use shopping::{ShoppingListItem, UNASSIGNED_STORE};
