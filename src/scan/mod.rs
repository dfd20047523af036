//! Scan payload boundary
//!
//! Recipe and receipt records arrive from an external vision-scan step (or a
//! hand-written JSON file) in a loose schema: numbers may come as strings,
//! fields may be missing, prices may be garbage. Everything is coerced here,
//! once, so the rest of the crate only ever sees well-typed models. The
//! policy is best effort: malformed numbers become zero, a missing total
//! falls back to the sum of line prices, a missing date becomes today.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{KitchenError, KitchenResult};
use crate::models::{Ingredient, Money, Receipt, ReceiptItem, Recipe};

/// Coerce a JSON value to f64: numbers pass through, numeric strings parse,
/// anything else becomes zero
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

fn coerce_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(0.0),
        Value::String(s) => s.trim().trim_start_matches('$').parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Coerce a JSON value to Money via the same rules as [`lenient_f64`]
fn lenient_money<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(Money::from_f64_dollars(coerce_f64(&value)))
}

fn lenient_opt_money<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Money>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        other => Ok(Some(Money::from_f64_dollars(coerce_f64(&other)))),
    }
}

/// Coerce servings: zero or malformed falls back to 4
fn lenient_servings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let n = coerce_f64(&value).round();
    if n >= 1.0 {
        Ok(n as u32)
    } else {
        Ok(default_servings())
    }
}

fn default_servings() -> u32 {
    4
}

fn default_scan_quantity() -> f64 {
    1.0
}

/// One ingredient from a scanned recipe
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientScan {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub store: Option<String>,
    #[serde(default, deserialize_with = "lenient_money")]
    pub price: Money,
}

/// A recipe as extracted by the scan step
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeScan {
    pub name: String,
    #[serde(default = "default_servings", deserialize_with = "lenient_servings")]
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<IngredientScan>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RecipeScan {
    /// Convert to a stored recipe, dropping empty-named ingredient lines
    pub fn into_recipe(self) -> KitchenResult<Recipe> {
        let mut recipe = Recipe::new(self.name, self.servings)
            .map_err(|e| KitchenError::Scan(e.to_string()))?;
        recipe.instructions = self.instructions;
        recipe.prep_time = self.prep_time;
        recipe.cook_time = self.cook_time;
        recipe.tags = self.tags.into_iter().collect();

        for ing in self.ingredients {
            if ing.name.trim().is_empty() {
                continue;
            }
            recipe.add_ingredient(Ingredient::with_price(
                ing.name.trim().to_string(),
                ing.quantity.max(0.0),
                ing.unit,
                ing.store,
                ing.price,
            ));
        }
        Ok(recipe)
    }
}

/// One line from a scanned receipt
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptItemScan {
    pub name: String,
    #[serde(default = "default_scan_quantity", deserialize_with = "lenient_f64")]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default, deserialize_with = "lenient_money")]
    pub price: Money,
}

/// A receipt as extracted by the scan step
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptScan {
    #[serde(default)]
    pub store: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_opt_money")]
    pub total: Option<Money>,
    #[serde(default)]
    pub items: Vec<ReceiptItemScan>,
}

impl ReceiptScan {
    /// Convert to a stored receipt; a missing date becomes today, a missing
    /// total becomes the item sum
    pub fn into_receipt(self) -> Receipt {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let items: Vec<ReceiptItem> = self
            .items
            .into_iter()
            .filter(|i| !i.name.trim().is_empty())
            .map(|i| ReceiptItem {
                name: i.name.trim().to_string(),
                quantity: if i.quantity > 0.0 { i.quantity } else { 1.0 },
                unit: i.unit,
                price: i.price,
            })
            .collect();
        Receipt::new(self.store, date, self.total, items)
    }
}

/// Parse a scanned recipe payload
pub fn parse_recipe_scan(json: &str) -> KitchenResult<RecipeScan> {
    serde_json::from_str(json).map_err(|e| KitchenError::Scan(format!("Bad recipe payload: {}", e)))
}

/// Parse a scanned receipt payload
pub fn parse_receipt_scan(json: &str) -> KitchenResult<ReceiptScan> {
    serde_json::from_str(json)
        .map_err(|e| KitchenError::Scan(format!("Bad receipt payload: {}", e)))
}
