//! Recipe model
//!
//! Represents recipes with their ingredient lists, tags, and derived cost.
//! The `total_cost` field is derived data: every mutation path that touches
//! ingredients must recompute it before the recipe is considered valid.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::ids::RecipeId;
use super::money::Money;

/// A single ingredient line of a recipe
///
/// An ingredient belongs to exactly one recipe; it is never shared by
/// reference with the pantry or the shopping list. A price of zero means
/// "unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name (free text, matched case-insensitively elsewhere)
    pub name: String,

    /// Quantity in the given unit (nonnegative)
    pub quantity: f64,

    /// Unit of measure ("lbs", "cups", ... or empty)
    #[serde(default)]
    pub unit: String,

    /// Preferred store, if any
    #[serde(default)]
    pub store: Option<String>,

    /// Last known price (zero when unknown)
    #[serde(default)]
    pub price: Money,
}

impl Ingredient {
    /// Create a new ingredient
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            store: None,
            price: Money::zero(),
        }
    }

    /// Create an ingredient with a store and price
    pub fn with_price(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        store: Option<String>,
        price: Money,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            store,
            price,
        }
    }
}

/// A recipe with its ingredient list and derived total cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier
    pub id: RecipeId,

    /// Recipe name
    pub name: String,

    /// Number of servings the ingredient quantities produce (>= 1)
    pub servings: u32,

    /// Free-form tags ("Dinner", "Quick", ...)
    #[serde(default)]
    pub tags: BTreeSet<String>,

    /// Family members who like this recipe
    #[serde(default)]
    pub family_members: Vec<String>,

    /// Ordered ingredient list
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    /// Step-by-step instructions
    #[serde(default)]
    pub instructions: String,

    /// Meal-prep notes
    #[serde(default)]
    pub notes: String,

    /// Prep time as entered ("15 min")
    #[serde(default)]
    pub prep_time: String,

    /// Cook time as entered ("30 min")
    #[serde(default)]
    pub cook_time: String,

    /// Whether the recipe is marked as a favorite
    #[serde(default)]
    pub is_favorite: bool,

    /// Derived: sum of ingredient prices. Recomputed on every write.
    #[serde(default)]
    pub total_cost: Money,

    /// When the recipe was created
    pub created_at: DateTime<Utc>,

    /// When the recipe was last cooked
    #[serde(default)]
    pub last_made: Option<NaiveDate>,

    /// How many times the recipe has been cooked
    #[serde(default)]
    pub times_made: u32,
}

impl Recipe {
    /// Create a new recipe
    ///
    /// # Errors
    ///
    /// Returns a validation error when `servings` is zero; enforcing this at
    /// creation time is what keeps per-serving cost free of division by zero.
    pub fn new(name: impl Into<String>, servings: u32) -> Result<Self, RecipeValidationError> {
        if servings == 0 {
            return Err(RecipeValidationError::ZeroServings);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RecipeValidationError::EmptyName);
        }

        Ok(Self {
            id: RecipeId::new(),
            name,
            servings,
            tags: BTreeSet::new(),
            family_members: Vec::new(),
            ingredients: Vec::new(),
            instructions: String::new(),
            notes: String::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            is_favorite: false,
            total_cost: Money::zero(),
            created_at: Utc::now(),
            last_made: None,
            times_made: 0,
        })
    }

    /// Add an ingredient and recompute the total cost
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
        self.recompute_total();
    }

    /// Remove the ingredient at `index`, recomputing the total cost
    ///
    /// Returns the removed ingredient, or None when the index is out of range.
    pub fn remove_ingredient(&mut self, index: usize) -> Option<Ingredient> {
        if index >= self.ingredients.len() {
            return None;
        }
        let removed = self.ingredients.remove(index);
        self.recompute_total();
        Some(removed)
    }

    /// Recompute `total_cost` from the current ingredient list
    ///
    /// Must be called after any in-place edit of `ingredients`.
    pub fn recompute_total(&mut self) {
        self.total_cost = crate::services::cost::recipe_total(&self.ingredients);
    }

    /// Cost of a single serving
    pub fn per_serving(&self) -> Money {
        self.total_cost.div_round(self.servings)
    }

    /// Mark the recipe as cooked on the given date
    pub fn mark_made(&mut self, date: NaiveDate) {
        self.last_made = Some(date);
        self.times_made += 1;
    }

    /// Validate the recipe invariants
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        if self.servings == 0 {
            return Err(RecipeValidationError::ZeroServings);
        }
        if self.name.trim().is_empty() {
            return Err(RecipeValidationError::EmptyName);
        }
        if let Some(ing) = self.ingredients.iter().find(|i| i.quantity < 0.0) {
            return Err(RecipeValidationError::NegativeQuantity {
                ingredient: ing.name.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} servings, {})",
            self.name, self.servings, self.total_cost
        )
    }
}

/// Validation errors for recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeValidationError {
    ZeroServings,
    EmptyName,
    NegativeQuantity { ingredient: String },
}

impl fmt::Display for RecipeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroServings => write!(f, "Recipe must have at least 1 serving"),
            Self::EmptyName => write!(f, "Recipe name cannot be empty"),
            Self::NegativeQuantity { ingredient } => {
                write!(f, "Ingredient '{}' has a negative quantity", ingredient)
            }
        }
    }
}

impl std::error::Error for RecipeValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recipe() {
        let recipe = Recipe::new("Pancakes", 4).unwrap();
        assert_eq!(recipe.name, "Pancakes");
        assert_eq!(recipe.servings, 4);
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.total_cost, Money::zero());
    }

    #[test]
    fn test_zero_servings_rejected() {
        assert_eq!(
            Recipe::new("Bad", 0).unwrap_err(),
            RecipeValidationError::ZeroServings
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            Recipe::new("   ", 2).unwrap_err(),
            RecipeValidationError::EmptyName
        );
    }

    #[test]
    fn test_add_ingredient_updates_total() {
        let mut recipe = Recipe::new("Omelette", 2).unwrap();
        recipe.add_ingredient(Ingredient::with_price(
            "Eggs",
            6.0,
            "",
            None,
            Money::from_cents(299),
        ));
        recipe.add_ingredient(Ingredient::with_price(
            "Butter",
            1.0,
            "tbsp",
            None,
            Money::from_cents(50),
        ));

        assert_eq!(recipe.total_cost, Money::from_cents(349));
    }

    #[test]
    fn test_remove_ingredient_updates_total() {
        let mut recipe = Recipe::new("Omelette", 2).unwrap();
        recipe.add_ingredient(Ingredient::with_price(
            "Eggs",
            6.0,
            "",
            None,
            Money::from_cents(299),
        ));
        recipe.add_ingredient(Ingredient::with_price(
            "Butter",
            1.0,
            "tbsp",
            None,
            Money::from_cents(50),
        ));

        let removed = recipe.remove_ingredient(0).unwrap();
        assert_eq!(removed.name, "Eggs");
        assert_eq!(recipe.total_cost, Money::from_cents(50));

        assert!(recipe.remove_ingredient(5).is_none());
    }

    #[test]
    fn test_per_serving() {
        let mut recipe = Recipe::new("Soup", 4).unwrap();
        recipe.add_ingredient(Ingredient::with_price(
            "Stock",
            4.0,
            "cups",
            None,
            Money::from_cents(1000),
        ));
        assert_eq!(recipe.per_serving(), Money::from_cents(250));
    }

    #[test]
    fn test_mark_made() {
        let mut recipe = Recipe::new("Chili", 6).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        recipe.mark_made(date);
        assert_eq!(recipe.last_made, Some(date));
        assert_eq!(recipe.times_made, 1);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut recipe = Recipe::new("Tacos", 4).unwrap();
        recipe.tags.insert("Dinner".to_string());
        recipe.add_ingredient(Ingredient::with_price(
            "Tortillas",
            8.0,
            "pieces",
            Some("Food Lion".to_string()),
            Money::from_cents(349),
        ));

        let json = serde_json::to_string(&recipe).unwrap();
        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, recipe.id);
        assert_eq!(back.ingredients, recipe.ingredients);
        assert_eq!(back.total_cost, recipe.total_cost);
    }
}
