//! Weekly plan display formatting

use chrono::{Duration, NaiveDate};

use crate::models::{Day, MealType, Money, PlanKey, WeeklyPlan};

/// Format one week of the plan, day by day
pub fn format_week(plan: &WeeklyPlan, week_start: NaiveDate) -> String {
    let week_end = week_start + Duration::days(6);
    let mut output = String::new();
    output.push_str(&format!(
        "Week of {} - {}\n\n",
        week_start.format("%b %-d"),
        week_end.format("%b %-d")
    ));

    let mut week_total = Money::zero();
    let mut planned_slots = 0;

    for &day in Day::all() {
        let mut day_lines = Vec::new();
        for &meal in MealType::all() {
            if let Some(planned) = plan.get(&PlanKey::new(week_start, day, meal)) {
                day_lines.push(format!(
                    "  {:<14} {:<24} {:>10}",
                    meal.to_string(),
                    planned.recipe_name,
                    planned.total_cost.to_string(),
                ));
                week_total += planned.total_cost;
                planned_slots += 1;
            }
        }
        if !day_lines.is_empty() {
            output.push_str(&format!("{}:\n", day));
            for line in day_lines {
                output.push_str(&line);
                output.push('\n');
            }
        }
    }

    if planned_slots == 0 {
        output.push_str("No meals planned this week.\n");
    } else {
        output.push_str(&format!(
            "\n{} meal(s) planned, total {}\n",
            planned_slots, week_total
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlannedMeal, RecipeId};

    #[test]
    fn test_empty_week() {
        let plan = WeeklyPlan::new();
        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert!(format_week(&plan, monday).contains("No meals planned"));
    }

    #[test]
    fn test_planned_week_totals() {
        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let mut plan = WeeklyPlan::new();
        plan.insert(
            PlanKey::new(monday, Day::Wednesday, MealType::Dinner),
            PlannedMeal {
                recipe_id: RecipeId::new(),
                recipe_name: "Tacos".to_string(),
                total_cost: Money::from_cents(1250),
                servings: 4,
            },
        );

        let output = format_week(&plan, monday);
        assert!(output.contains("Wednesday:"));
        assert!(output.contains("Tacos"));
        assert!(output.contains("1 meal(s) planned, total $12.50"));
    }
}
