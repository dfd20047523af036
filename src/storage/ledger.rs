//! The ledger blob and its store
//!
//! All household state lives in one JSON document that is loaded and saved
//! wholesale. Writes go through the atomic temp-file path, so the ledger on
//! disk is always either the old state or the new state, never a partial mix.

use serde::{Deserialize, Serialize};

use crate::config::{KitchenPaths, Settings};
use crate::error::{KitchenError, KitchenResult};
use crate::models::{
    PantryItem, PantryItemId, Receipt, ReceiptId, Recipe, RecipeId, ShoppingListItem, WeeklyPlan,
};
use crate::services::matcher::names_match;
use crate::storage::file_io;

/// Current on-disk schema version
pub const SCHEMA_VERSION: u32 = 1;

/// The complete household state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// Schema version for future migrations
    #[serde(default = "schema_version_default")]
    pub schema_version: u32,

    #[serde(default)]
    pub settings: Settings,

    #[serde(default)]
    pub recipes: Vec<Recipe>,

    #[serde(default)]
    pub weekly_plan: WeeklyPlan,

    #[serde(default)]
    pub pantry: Vec<PantryItem>,

    #[serde(default)]
    pub shopping_list: Vec<ShoppingListItem>,

    #[serde(default)]
    pub receipts: Vec<Receipt>,
}

fn schema_version_default() -> u32 {
    SCHEMA_VERSION
}

impl Ledger {
    /// Find a recipe by ID
    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Find a recipe by ID, mutable
    pub fn recipe_mut(&mut self, id: RecipeId) -> Option<&mut Recipe> {
        self.recipes.iter_mut().find(|r| r.id == id)
    }

    /// Resolve a recipe by ID string or (case-insensitive) name
    pub fn resolve_recipe(&self, needle: &str) -> KitchenResult<&Recipe> {
        if let Ok(id) = needle.parse::<RecipeId>() {
            if let Some(recipe) = self.recipe(id) {
                return Ok(recipe);
            }
        }
        self.recipes
            .iter()
            .find(|r| names_match(&r.name, needle))
            .ok_or_else(|| KitchenError::recipe_not_found(needle))
    }

    /// Resolve a recipe by ID string or name, mutable
    pub fn resolve_recipe_mut(&mut self, needle: &str) -> KitchenResult<&mut Recipe> {
        let id = self.resolve_recipe(needle)?.id;
        // lookup again for the mutable borrow
        self.recipe_mut(id)
            .ok_or_else(|| KitchenError::recipe_not_found(needle))
    }

    /// Find a pantry item by ID
    pub fn pantry_item(&self, id: PantryItemId) -> Option<&PantryItem> {
        self.pantry.iter().find(|p| p.id == id)
    }

    /// Resolve a pantry item by ID string or (case-insensitive) name
    pub fn resolve_pantry_item(&self, needle: &str) -> KitchenResult<&PantryItem> {
        if let Ok(id) = needle.parse::<PantryItemId>() {
            if let Some(item) = self.pantry_item(id) {
                return Ok(item);
            }
        }
        self.pantry
            .iter()
            .find(|p| names_match(&p.name, needle))
            .ok_or_else(|| KitchenError::pantry_item_not_found(needle))
    }

    /// Find a receipt by ID
    pub fn receipt(&self, id: ReceiptId) -> Option<&Receipt> {
        self.receipts.iter().find(|r| r.id == id)
    }

    /// Resolve a receipt by full UUID or the short form `receipt list` prints
    ///
    /// Short forms are matched as UUID prefixes and must be unambiguous.
    pub fn resolve_receipt(&self, needle: &str) -> KitchenResult<&Receipt> {
        if let Ok(id) = needle.parse::<ReceiptId>() {
            if let Some(receipt) = self.receipt(id) {
                return Ok(receipt);
            }
        }

        let prefix = needle
            .trim()
            .strip_prefix("rct-")
            .unwrap_or_else(|| needle.trim())
            .to_lowercase();
        if prefix.is_empty() {
            return Err(KitchenError::receipt_not_found(needle));
        }

        let mut matches = self
            .receipts
            .iter()
            .filter(|r| r.id.as_uuid().to_string().starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(receipt), None) => Ok(receipt),
            (Some(_), Some(_)) => Err(KitchenError::Validation(format!(
                "Receipt id '{}' is ambiguous; use more characters",
                needle
            ))),
            _ => Err(KitchenError::receipt_not_found(needle)),
        }
    }
}

/// Loads and saves the ledger blob
#[derive(Debug, Clone)]
pub struct LedgerStore {
    paths: KitchenPaths,
}

impl LedgerStore {
    pub fn new(paths: KitchenPaths) -> Self {
        Self { paths }
    }

    /// Open the store using paths resolved from the environment
    pub fn open() -> KitchenResult<Self> {
        Ok(Self::new(KitchenPaths::resolve()?))
    }

    /// Load the ledger; a missing file yields an empty ledger
    pub fn load(&self) -> KitchenResult<Ledger> {
        let mut ledger: Ledger = file_io::read_json(self.paths.ledger_file())?;
        if ledger.schema_version == 0 {
            ledger.schema_version = SCHEMA_VERSION;
        }
        Ok(ledger)
    }

    /// Save the whole ledger atomically
    pub fn save(&self, ledger: &Ledger) -> KitchenResult<()> {
        self.paths.ensure_dirs()?;
        file_io::write_json_atomic(self.paths.ledger_file(), ledger)
    }

    /// Whether a ledger file already exists
    pub fn exists(&self) -> bool {
        self.paths.ledger_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn store() -> (TempDir, LedgerStore) {
        let tmp = TempDir::new().unwrap();
        let store = LedgerStore::new(KitchenPaths::with_base_dir(tmp.path()));
        (tmp, store)
    }

    #[test]
    fn test_load_missing_file_gives_empty_ledger() {
        let (_tmp, store) = store();
        let ledger = store.load().unwrap();
        assert!(ledger.recipes.is_empty());
        assert_eq!(ledger.schema_version, SCHEMA_VERSION);
        assert_eq!(ledger.settings.monthly_budget, Money::from_dollars(800));
    }

    #[test]
    fn test_save_and_reload() {
        let (_tmp, store) = store();
        let mut ledger = store.load().unwrap();
        ledger
            .recipes
            .push(Recipe::new("Pancakes", 4).unwrap());
        store.save(&ledger).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.recipes.len(), 1);
        assert_eq!(reloaded.recipes[0].name, "Pancakes");
    }

    #[test]
    fn test_resolve_recipe_by_name_case_insensitive() {
        let mut ledger = Ledger::default();
        ledger.recipes.push(Recipe::new("Taco Night", 4).unwrap());

        assert!(ledger.resolve_recipe("taco night").is_ok());
        assert!(ledger.resolve_recipe("  TACO NIGHT ").is_ok());
        let err = ledger.resolve_recipe("burgers").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_resolve_receipt_by_displayed_short_id() {
        use crate::models::ReceiptItem;
        use chrono::NaiveDate;

        let mut ledger = Ledger::default();
        let receipt = Receipt::new(
            "Aldi",
            NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            None,
            vec![ReceiptItem {
                name: "Milk".to_string(),
                quantity: 1.0,
                unit: String::new(),
                price: Money::from_cents(349),
            }],
        );
        let id = receipt.id;
        ledger.receipts.push(receipt);

        // the short form printed by `receipt list` resolves back to the receipt
        let displayed = id.to_string();
        assert!(displayed.starts_with("rct-"));
        assert_eq!(ledger.resolve_receipt(&displayed).unwrap().id, id);

        // the full UUID works too
        let full = id.as_uuid().to_string();
        assert_eq!(ledger.resolve_receipt(&full).unwrap().id, id);

        assert!(ledger
            .resolve_receipt("rct-00000000")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_resolve_recipe_by_id_string() {
        let mut ledger = Ledger::default();
        let recipe = Recipe::new("Soup", 2).unwrap();
        let id_str = recipe.id.as_uuid().to_string();
        ledger.recipes.push(recipe);

        assert!(ledger.resolve_recipe(&id_str).is_ok());
    }
}
