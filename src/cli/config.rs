//! Settings CLI commands

use clap::Subcommand;

use crate::error::{KitchenError, KitchenResult};
use crate::models::Money;
use crate::storage::LedgerStore;

/// Settings subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings
    Show,
    /// Set the monthly grocery budget
    Budget {
        /// Amount, e.g. "800" or "850.50"
        amount: String,
    },
    /// Add a store to the known-stores list
    AddStore {
        /// Store name
        name: String,
    },
    /// Add a family member label
    AddMember {
        /// Member label
        name: String,
    },
}

/// Handle a settings command
pub fn handle_config_command(store: &LedgerStore, cmd: ConfigCommands) -> KitchenResult<()> {
    let mut ledger = store.load()?;

    match cmd {
        ConfigCommands::Show => {
            let settings = &ledger.settings;
            println!("Monthly budget:  {}", settings.monthly_budget);
            println!("Stores:          {}", settings.stores.join(", "));
            println!("Family members:  {}", settings.family_members.join(", "));
        }

        ConfigCommands::Budget { amount } => {
            let budget = Money::parse(&amount)
                .map_err(|e| KitchenError::Validation(format!("Invalid amount: {}", e)))?;
            if budget.is_negative() {
                return Err(KitchenError::Validation(
                    "Budget cannot be negative".into(),
                ));
            }
            ledger.settings.monthly_budget = budget;
            println!("Monthly budget set to {}", budget);
            store.save(&ledger)?;
        }

        ConfigCommands::AddStore { name } => {
            if ledger.settings.add_store(&name) {
                println!("Added store: {}", name.trim());
                store.save(&ledger)?;
            } else {
                println!("Store already known: {}", name.trim());
            }
        }

        ConfigCommands::AddMember { name } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(KitchenError::Validation("Member name is empty".into()));
            }
            if ledger
                .settings
                .family_members
                .iter()
                .any(|m| m.eq_ignore_ascii_case(&name))
            {
                println!("Member already listed: {}", name);
            } else {
                println!("Added family member: {}", name);
                ledger.settings.family_members.push(name);
                store.save(&ledger)?;
            }
        }
    }

    Ok(())
}
