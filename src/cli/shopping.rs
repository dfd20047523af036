//! Shopping list CLI commands

use chrono::{Duration, Local};
use clap::Subcommand;

use crate::display::shopping::format_shopping_list;
use crate::error::{KitchenError, KitchenResult};
use crate::models::{week_start_for, ShoppingListItem};
use crate::services::{aggregate, names_match, pantry_ledger};
use crate::storage::LedgerStore;

/// Shopping list subcommands
#[derive(Subcommand)]
pub enum ShoppingCommands {
    /// Generate the list from a week's plan (replaces the current list)
    Generate {
        /// Week offset from the current week (0 = this week, 1 = next)
        #[arg(short, long, default_value_t = 0)]
        week: i64,
    },
    /// Show the current list grouped by store
    List,
    /// Add a manual line to the list
    Add {
        /// Item name
        name: String,
        /// Quantity
        #[arg(short, long, default_value_t = 1.0)]
        quantity: f64,
        /// Store to buy at
        #[arg(long)]
        store: Option<String>,
    },
    /// Check or uncheck an item by name
    Check {
        /// Item name
        item: String,
        /// Uncheck instead
        #[arg(long)]
        undo: bool,
    },
    /// Move all checked items into the pantry and drop them from the list
    Checkout,
    /// Remove an item from the list by name
    Remove {
        /// Item name
        item: String,
    },
}

/// Handle a shopping-list command
pub fn handle_shopping_command(store: &LedgerStore, cmd: ShoppingCommands) -> KitchenResult<()> {
    let mut ledger = store.load()?;

    match cmd {
        ShoppingCommands::Generate { week } => {
            let week_start =
                week_start_for(Local::now().date_naive()) + Duration::days(7 * week);
            let list =
                aggregate::build_shopping_list(&ledger.weekly_plan, week_start, &ledger.recipes);
            println!(
                "Generated {} item(s) for the week of {} (previous list replaced)",
                list.len(),
                week_start
            );
            ledger.shopping_list = list;
            store.save(&ledger)?;
        }

        ShoppingCommands::List => {
            print!("{}", format_shopping_list(&ledger.shopping_list));
        }

        ShoppingCommands::Add {
            name,
            quantity,
            store: item_store,
        } => {
            if quantity <= 0.0 {
                return Err(KitchenError::Validation(
                    "Quantity must be positive".into(),
                ));
            }
            let item = ShoppingListItem::manual(name, quantity, item_store);
            println!("Added to list: {}", item);
            ledger.shopping_list.push(item);
            store.save(&ledger)?;
        }

        ShoppingCommands::Check { item, undo } => {
            let found = ledger
                .shopping_list
                .iter_mut()
                .find(|i| names_match(&i.name, &item))
                .ok_or_else(|| KitchenError::shopping_item_not_found(&item))?;
            found.checked = !undo;
            println!("{}", found);
            store.save(&ledger)?;
        }

        ShoppingCommands::Checkout => {
            let outcome = pantry_ledger::checkout(
                &ledger.pantry,
                &ledger.shopping_list,
                Local::now().date_naive(),
            );
            if outcome.moved == 0 {
                println!("Nothing checked; pantry unchanged.");
                return Ok(());
            }
            println!(
                "Moved {} item(s) into the pantry, {} left on the list",
                outcome.moved,
                outcome.shopping_list.len()
            );
            ledger.pantry = outcome.pantry;
            ledger.shopping_list = outcome.shopping_list;
            store.save(&ledger)?;
        }

        ShoppingCommands::Remove { item } => {
            let before = ledger.shopping_list.len();
            ledger
                .shopping_list
                .retain(|i| !names_match(&i.name, &item));
            if ledger.shopping_list.len() == before {
                return Err(KitchenError::shopping_item_not_found(&item));
            }
            println!("Removed from list: {}", item);
            store.save(&ledger)?;
        }
    }

    Ok(())
}
