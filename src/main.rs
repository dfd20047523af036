use anyhow::Result;
use clap::{Parser, Subcommand};

use kitchen_ledger::cli::{
    handle_config_command, handle_pantry_command, handle_plan_command, handle_receipt_command,
    handle_recipe_command, handle_report_command, handle_shopping_command,
};
use kitchen_ledger::config::KitchenPaths;
use kitchen_ledger::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "kitchen",
    version,
    about = "Terminal-based grocery, meal-planning, and kitchen budgeting ledger",
    long_about = "kitchen-ledger tracks recipes, pantry stock, a weekly meal plan, a \
                  shopping list, and grocery receipts, and keeps their costs in sync: \
                  receipt prices flow into recipes and pantry, planned weeks become \
                  deduplicated shopping lists, and spending rolls up against a \
                  monthly budget."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recipe management commands
    #[command(subcommand)]
    Recipe(kitchen_ledger::cli::RecipeCommands),

    /// Pantry stock commands
    #[command(subcommand)]
    Pantry(kitchen_ledger::cli::PantryCommands),

    /// Weekly meal plan commands
    #[command(subcommand)]
    Plan(kitchen_ledger::cli::PlanCommands),

    /// Shopping list commands
    #[command(subcommand, alias = "shop")]
    Shopping(kitchen_ledger::cli::ShoppingCommands),

    /// Receipt recording and reconciliation
    #[command(subcommand)]
    Receipt(kitchen_ledger::cli::ReceiptCommands),

    /// Budget and cost reports
    #[command(subcommand)]
    Report(kitchen_ledger::cli::ReportCommands),

    /// Settings commands
    #[command(subcommand)]
    Config(kitchen_ledger::cli::ConfigCommands),

    /// Create an empty ledger
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = KitchenPaths::resolve()?;
    let store = LedgerStore::new(paths.clone());

    match cli.command {
        Some(Commands::Recipe(cmd)) => handle_recipe_command(&store, cmd)?,
        Some(Commands::Pantry(cmd)) => handle_pantry_command(&store, cmd)?,
        Some(Commands::Plan(cmd)) => handle_plan_command(&store, cmd)?,
        Some(Commands::Shopping(cmd)) => handle_shopping_command(&store, cmd)?,
        Some(Commands::Receipt(cmd)) => handle_receipt_command(&store, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&store, cmd)?,
        Some(Commands::Config(cmd)) => handle_config_command(&store, cmd)?,
        Some(Commands::Init) => {
            if store.exists() {
                println!("Ledger already exists at {}", paths.ledger_file().display());
            } else {
                let ledger = store.load()?;
                store.save(&ledger)?;
                println!("Created ledger at {}", paths.ledger_file().display());
                println!("Monthly budget defaults to {}", ledger.settings.monthly_budget);
                println!("Run 'kitchen config show' to review settings.");
            }
        }
        None => {
            println!("kitchen-ledger - grocery and meal-planning ledger");
            println!();
            println!("Run 'kitchen --help' for usage information.");
            println!("Run 'kitchen init' to create a ledger.");
        }
    }

    Ok(())
}
