//! Pantry CLI commands

use clap::Subcommand;

use crate::display::pantry::format_pantry;
use crate::error::{KitchenError, KitchenResult};
use crate::models::{PantryCategory, PantryItem};
use crate::services::pantry_ledger;
use crate::storage::LedgerStore;

/// Pantry subcommands
#[derive(Subcommand)]
pub enum PantryCommands {
    /// Add stock (merges into an existing item with the same name)
    Add {
        /// Item name
        name: String,
        /// Quantity to add
        #[arg(short, long, default_value_t = 1.0)]
        quantity: f64,
        /// Unit of measure
        #[arg(short, long, default_value = "")]
        unit: String,
        /// Category (produce, dairy, meat, pantry, frozen, bakery, beverages, spices, other)
        #[arg(short, long, default_value = "other")]
        category: String,
    },
    /// List pantry contents grouped by category
    List {
        /// Only items running low
        #[arg(long)]
        low: bool,
    },
    /// Adjust an item's quantity; hitting zero removes it
    Adjust {
        /// Item name or ID
        item: String,
        /// Change in quantity (negative to use stock)
        delta: f64,
    },
    /// Remove an item entirely
    Remove {
        /// Item name or ID
        item: String,
    },
}

/// Handle a pantry command
pub fn handle_pantry_command(store: &LedgerStore, cmd: PantryCommands) -> KitchenResult<()> {
    let mut ledger = store.load()?;

    match cmd {
        PantryCommands::Add {
            name,
            quantity,
            unit,
            category,
        } => {
            if quantity <= 0.0 {
                return Err(KitchenError::Validation(
                    "Quantity must be positive".into(),
                ));
            }
            let category: PantryCategory = category
                .parse()
                .map_err(KitchenError::Validation)?;

            let mut item = PantryItem::new(name, quantity, unit);
            item.category = category;
            let id = pantry_ledger::add_item(&mut ledger.pantry, item);

            let stocked = ledger
                .pantry_item(id)
                .ok_or_else(|| KitchenError::Storage("Pantry item vanished after add".into()))?;
            println!("Pantry: {}", stocked);
            store.save(&ledger)?;
        }

        PantryCommands::List { low } => {
            if low {
                let low_items: Vec<PantryItem> = pantry_ledger::low_stock(&ledger.pantry)
                    .into_iter()
                    .cloned()
                    .collect();
                print!("{}", format_pantry(&low_items));
            } else {
                print!("{}", format_pantry(&ledger.pantry));
            }
        }

        PantryCommands::Adjust { item, delta } => {
            let found = ledger.resolve_pantry_item(&item)?;
            let (id, name) = (found.id, found.name.clone());

            pantry_ledger::adjust_quantity(&mut ledger.pantry, id, delta);
            match ledger.pantry_item(id) {
                Some(remaining) => println!("Pantry: {}", remaining),
                None => println!("{} used up, removed from pantry", name),
            }
            store.save(&ledger)?;
        }

        PantryCommands::Remove { item } => {
            let found = ledger.resolve_pantry_item(&item)?;
            let (id, name) = (found.id, found.name.clone());
            ledger.pantry.retain(|p| p.id != id);
            println!("Removed from pantry: {}", name);
            store.save(&ledger)?;
        }
    }

    Ok(())
}
