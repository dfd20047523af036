//! Budget report CLI commands

use chrono::{Datelike, Local};
use clap::Subcommand;

use crate::display::budget::{
    format_budget_summary, format_recipe_ranking, format_store_breakdown, format_weekly_history,
};
use crate::error::KitchenResult;
use crate::services::report;
use crate::storage::LedgerStore;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Monthly budget dashboard: spend, status, per-store breakdown
    Budget {
        /// Month (1-12, default current)
        #[arg(short, long)]
        month: Option<u32>,
        /// Year (default current)
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Planned cost per week across the whole plan
    History {
        /// Show at most this many most-recent weeks
        #[arg(short, long, default_value_t = 8)]
        weeks: usize,
    },
    /// Rank recipes by total cost
    Rank {
        /// How many recipes to show
        #[arg(short, long, default_value_t = 5)]
        count: usize,
        /// Cheapest first instead of most expensive
        #[arg(long)]
        cheapest: bool,
    },
}

/// Handle a report command
pub fn handle_report_command(store: &LedgerStore, cmd: ReportCommands) -> KitchenResult<()> {
    let ledger = store.load()?;
    let today = Local::now().date_naive();

    match cmd {
        ReportCommands::Budget { month, year } => {
            let month = month.unwrap_or_else(|| today.month());
            let year = year.unwrap_or_else(|| today.year());

            let spend = report::monthly_spend(&ledger.receipts, year, month);
            let budget = ledger.settings.monthly_budget;
            let (used_percent, status) = report::budget_status(spend, budget);

            println!("Budget report for {}-{:02}", year, month);
            print!(
                "{}",
                format_budget_summary(spend, budget, used_percent, status)
            );

            let planned = report::week_planned_cost(&ledger.weekly_plan, today);
            println!("This week planned: {}", planned);

            let by_store = report::spend_by_store(&ledger.receipts, year, month);
            print!("{}", format_store_breakdown(&by_store));

            let (all_time, average) = report::receipt_totals(&ledger.receipts);
            println!(
                "All time: {} across {} receipt(s) (avg {} per receipt)",
                all_time,
                ledger.receipts.len(),
                average
            );
        }

        ReportCommands::History { weeks } => {
            let mut history = report::weekly_cost_history(&ledger.weekly_plan);
            if history.len() > weeks {
                history = history.split_off(history.len() - weeks);
            }
            print!("{}", format_weekly_history(&history));
        }

        ReportCommands::Rank { count, cheapest } => {
            let ranked = report::rank_recipes_by_cost(&ledger.recipes, count, cheapest);
            print!("{}", format_recipe_ranking(&ranked, cheapest));
        }
    }

    Ok(())
}
