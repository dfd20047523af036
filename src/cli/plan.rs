//! Weekly plan CLI commands

use chrono::{Duration, Local, NaiveDate};
use clap::Subcommand;

use crate::display::plan::format_week;
use crate::error::{KitchenError, KitchenResult};
use crate::models::{week_start_for, Day, MealType, PlanKey, PlannedMeal};
use crate::storage::LedgerStore;

/// Weekly plan subcommands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Plan a recipe into a meal slot
    Set {
        /// Day of week (monday..sunday)
        day: Day,
        /// Meal (breakfast, lunch, lunch-kids, dinner, snack)
        meal: MealType,
        /// Recipe name or ID
        recipe: String,
        /// Week offset from the current week (0 = this week, 1 = next)
        #[arg(short, long, default_value_t = 0)]
        week: i64,
    },
    /// Clear a meal slot
    Clear {
        /// Day of week
        day: Day,
        /// Meal
        meal: MealType,
        /// Week offset from the current week
        #[arg(short, long, default_value_t = 0)]
        week: i64,
    },
    /// Show a week's plan
    Show {
        /// Week offset from the current week
        #[arg(short, long, default_value_t = 0)]
        week: i64,
    },
}

fn target_week_start(offset: i64) -> NaiveDate {
    week_start_for(Local::now().date_naive()) + Duration::days(7 * offset)
}

/// Handle a plan command
pub fn handle_plan_command(store: &LedgerStore, cmd: PlanCommands) -> KitchenResult<()> {
    let mut ledger = store.load()?;

    match cmd {
        PlanCommands::Set {
            day,
            meal,
            recipe,
            week,
        } => {
            let found = ledger.resolve_recipe(&recipe)?;
            // snapshot the recipe as it stands; later edits won't touch the plan
            let planned = PlannedMeal {
                recipe_id: found.id,
                recipe_name: found.name.clone(),
                total_cost: found.total_cost,
                servings: found.servings,
            };
            let key = PlanKey::new(target_week_start(week), day, meal);
            println!(
                "Planned {} for {} {} (week of {})",
                planned.recipe_name, key.day, key.meal, key.week_start
            );
            ledger.weekly_plan.insert(key, planned);
            store.save(&ledger)?;
        }

        PlanCommands::Clear { day, meal, week } => {
            let key = PlanKey::new(target_week_start(week), day, meal);
            match ledger.weekly_plan.remove(&key) {
                Some(removed) => {
                    println!("Cleared {} from {} {}", removed.recipe_name, day, meal);
                    store.save(&ledger)?;
                }
                None => {
                    return Err(KitchenError::NotFound {
                        entity_type: "Planned meal",
                        identifier: key.to_string(),
                    });
                }
            }
        }

        PlanCommands::Show { week } => {
            print!(
                "{}",
                format_week(&ledger.weekly_plan, target_week_start(week))
            );
        }
    }

    Ok(())
}
