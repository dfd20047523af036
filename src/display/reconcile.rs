//! Reconciliation change-log formatting

use crate::services::reconcile::{ChangeKind, ReconcileOutcome};

/// Format the change log produced by applying a receipt
pub fn format_change_log(outcome: &ReconcileOutcome) -> String {
    if outcome.log.is_empty() {
        return "No price updates.".to_string();
    }

    let mut output = String::new();
    output.push_str("Price updates applied:\n");
    for change in &outcome.log {
        match change.kind {
            ChangeKind::Recipe => {
                let ingredient = change.ingredient_name.as_deref().unwrap_or("?");
                output.push_str(&format!(
                    "  recipe  {} / {}: {} -> {}\n",
                    change.target_name, ingredient, change.old_price, change.new_price
                ));
            }
            ChangeKind::Pantry => {
                output.push_str(&format!(
                    "  pantry  {}: {} -> {}\n",
                    change.target_name, change.old_price, change.new_price
                ));
            }
        }
    }
    output.push_str(&format!(
        "{} recipe update(s), {} pantry update(s)\n",
        outcome.recipe_changes(),
        outcome.pantry_changes()
    ));
    output
}
