//! Budget reporting
//!
//! Read-side rollups over receipts, recipes, and the weekly plan. Everything
//! here is a pure function; nothing writes back to the ledger.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{week_start_for, Money, Receipt, Recipe, WeeklyPlan};

/// Budget classification for a month's spending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Ok,
    Warning,
    Exceeded,
}

/// Total of receipts dated in the given month
pub fn monthly_spend(receipts: &[Receipt], year: i32, month: u32) -> Money {
    receipts
        .iter()
        .filter(|r| r.date.year() == year && r.date.month() == month)
        .map(|r| r.total)
        .sum()
}

/// Planned cost of the week containing `today`
///
/// Sums the plan's cost snapshots, not current recipe costs; a slot planned
/// before a price change keeps its planned cost.
pub fn week_planned_cost(plan: &WeeklyPlan, today: NaiveDate) -> Money {
    let week_start = week_start_for(today);
    plan.iter()
        .filter(|(k, _)| k.week_start == week_start)
        .map(|(_, meal)| meal.total_cost)
        .sum()
}

/// Spend per store for the given month, largest first
///
/// Receipts with no store recorded fall under "Unknown".
pub fn spend_by_store(receipts: &[Receipt], year: i32, month: u32) -> Vec<(String, Money)> {
    let mut by_store: BTreeMap<String, Money> = BTreeMap::new();
    for receipt in receipts
        .iter()
        .filter(|r| r.date.year() == year && r.date.month() == month)
    {
        let store = if receipt.store.trim().is_empty() {
            "Unknown".to_string()
        } else {
            receipt.store.clone()
        };
        *by_store.entry(store).or_insert_with(Money::zero) += receipt.total;
    }

    let mut rows: Vec<(String, Money)> = by_store.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

/// Planned cost per week across the whole plan, ascending by week start
///
/// Caller truncates to the most recent N weeks for display.
pub fn weekly_cost_history(plan: &WeeklyPlan) -> Vec<(NaiveDate, Money)> {
    let mut by_week: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for (key, meal) in plan {
        *by_week.entry(key.week_start).or_insert_with(Money::zero) += meal.total_cost;
    }
    by_week.into_iter().collect()
}

/// The `n` cheapest or most expensive recipes by total cost
///
/// Stable sort so equal-cost recipes keep their ledger order.
pub fn rank_recipes_by_cost(recipes: &[Recipe], n: usize, ascending: bool) -> Vec<Recipe> {
    let mut ranked = recipes.to_vec();
    if ascending {
        ranked.sort_by_key(|r| r.total_cost);
    } else {
        ranked.sort_by(|a, b| b.total_cost.cmp(&a.total_cost));
    }
    ranked.truncate(n);
    ranked
}

/// All-time receipt spend and the average spent per receipt
///
/// The average rounds to the nearest cent; no receipts means zero for both.
pub fn receipt_totals(receipts: &[Receipt]) -> (Money, Money) {
    let total: Money = receipts.iter().map(|r| r.total).sum();
    let average = if receipts.is_empty() {
        Money::zero()
    } else {
        total.div_round(receipts.len() as u32)
    };
    (total, average)
}

/// Percent of the monthly budget used, and its classification
///
/// 90% and up is a warning, 100% and up is exceeded. A zero budget counts as
/// exceeded as soon as anything is spent.
pub fn budget_status(spend: Money, budget: Money) -> (f64, BudgetStatus) {
    let used_percent = if budget.is_zero() {
        if spend.is_zero() {
            0.0
        } else {
            100.0
        }
    } else {
        spend.as_f64_dollars() / budget.as_f64_dollars() * 100.0
    };

    let status = if used_percent >= 100.0 {
        BudgetStatus::Exceeded
    } else if used_percent >= 90.0 {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Ok
    };

    (used_percent, status)
}
