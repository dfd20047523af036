//! Business logic: pure transforms over ledger collections
//!
//! Every function here takes collections in and returns new collections (or
//! plain values) out; persistence is the caller's job. That keeps each piece
//! unit-testable without touching the filesystem.

pub mod aggregate;
pub mod cost;
pub mod matcher;
pub mod pantry_ledger;
pub mod reconcile;
pub mod report;

pub use aggregate::build_shopping_list;
pub use cost::{scale, ScaledIngredient, ScaledRecipe};
pub use matcher::{names_match, normalize_name};
pub use pantry_ledger::{adjust_quantity, checkout, low_stock, CheckoutOutcome};
pub use reconcile::{apply_receipt, ChangeKind, PriceChange, ReconcileOutcome};
pub use report::{
    budget_status, monthly_spend, rank_recipes_by_cost, receipt_totals, spend_by_store,
    week_planned_cost, weekly_cost_history, BudgetStatus,
};
