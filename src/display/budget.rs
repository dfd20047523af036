//! Budget dashboard formatting

use chrono::NaiveDate;

use crate::models::{Money, Recipe};
use crate::services::report::BudgetStatus;

/// Format the monthly budget summary line with its status marker
pub fn format_budget_summary(
    spend: Money,
    budget: Money,
    used_percent: f64,
    status: BudgetStatus,
) -> String {
    let marker = match status {
        BudgetStatus::Ok => "OK",
        BudgetStatus::Warning => "WARNING",
        BudgetStatus::Exceeded => "EXCEEDED",
    };
    let remaining = budget - spend;

    let mut output = String::new();
    output.push_str(&format!(
        "Monthly budget:  {} spent of {} ({:.1}%) [{}]\n",
        spend, budget, used_percent, marker
    ));
    output.push_str(&format!("Remaining:       {}\n", remaining));
    output
}

/// Format the per-store spend table
pub fn format_store_breakdown(rows: &[(String, Money)]) -> String {
    if rows.is_empty() {
        return "No purchases recorded this month.\n".to_string();
    }

    let name_width = rows.iter().map(|(s, _)| s.len()).max().unwrap_or(5).max(5);

    let mut output = String::new();
    output.push_str("Spend by store:\n");
    for (store, total) in rows {
        output.push_str(&format!(
            "  {:<name_width$}  {:>10}\n",
            store,
            total.to_string(),
            name_width = name_width,
        ));
    }
    output
}

/// Format the weekly planned-cost history, one bar per week
pub fn format_weekly_history(history: &[(NaiveDate, Money)]) -> String {
    if history.is_empty() {
        return "No planned weeks yet.\n".to_string();
    }

    let max_cents = history.iter().map(|(_, m)| m.cents()).max().unwrap_or(1).max(1);

    let mut output = String::new();
    output.push_str("Planned cost by week:\n");
    for (week, total) in history {
        let bar_len = ((total.cents() * 24) / max_cents) as usize;
        output.push_str(&format!(
            "  {}  {:>10}  {}\n",
            week.format("%Y-%m-%d"),
            total.to_string(),
            "#".repeat(bar_len),
        ));
    }
    output
}

/// Format a recipe cost ranking
pub fn format_recipe_ranking(recipes: &[Recipe], ascending: bool) -> String {
    if recipes.is_empty() {
        return "No recipes to rank.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(if ascending {
        "Cheapest recipes:\n"
    } else {
        "Most expensive recipes:\n"
    });
    for (i, recipe) in recipes.iter().enumerate() {
        output.push_str(&format!(
            "  {}. {:<24} {:>10}  ({} per serving)\n",
            i + 1,
            recipe.name,
            recipe.total_cost.to_string(),
            recipe.per_serving(),
        ));
    }
    output
}
