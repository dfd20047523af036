//! Household settings stored inside the ledger
//!
//! Settings travel with the ledger blob rather than a separate config file,
//! so copying `ledger.json` moves the whole household in one piece.

use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Household-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Monthly grocery budget
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: Money,

    /// Known stores, offered when assigning ingredients
    #[serde(default = "default_stores")]
    pub stores: Vec<String>,

    /// Family member labels used on recipes
    #[serde(default = "default_family_members")]
    pub family_members: Vec<String>,
}

fn default_monthly_budget() -> Money {
    Money::from_dollars(800)
}

fn default_stores() -> Vec<String> {
    ["Lowe's Foods", "Harris Teeter", "Food Lion", "Whole Foods"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_family_members() -> Vec<String> {
    vec!["Adults".to_string(), "Kids".to_string()]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_budget: default_monthly_budget(),
            stores: default_stores(),
            family_members: default_family_members(),
        }
    }
}

impl Settings {
    /// Add a store if it is not already known (case-insensitive)
    pub fn add_store(&mut self, store: impl Into<String>) -> bool {
        let store = store.into();
        let exists = self
            .stores
            .iter()
            .any(|s| s.eq_ignore_ascii_case(store.trim()));
        if exists || store.trim().is_empty() {
            return false;
        }
        self.stores.push(store.trim().to_string());
        true
    }
}
