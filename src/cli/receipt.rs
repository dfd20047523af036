//! Receipt CLI commands
//!
//! Recording a receipt is the moment reconciliation runs: observed prices
//! propagate into recipes and pantry, and the change log is printed.

use std::fs;

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::reconcile::format_change_log;
use crate::error::{KitchenError, KitchenResult};
use crate::models::{Money, Receipt, ReceiptItem};
use crate::scan;
use crate::services::reconcile;
use crate::storage::LedgerStore;

/// Receipt subcommands
#[derive(Subcommand)]
pub enum ReceiptCommands {
    /// Record a receipt by hand; items as "name:price" or "name:qty:price"
    Add {
        /// Store name
        #[arg(short, long, default_value = "")]
        store: String,
        /// Purchase date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Receipt total as printed (default: sum of item prices)
        #[arg(short, long)]
        total: Option<String>,
        /// Line items, e.g. "Eggs:3.49" or "Bread:2:2.50"
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Import a receipt from a scanned JSON file
    Import {
        /// Path to the scan payload
        file: String,
    },
    /// List recorded receipts, newest first
    List {
        /// Show at most this many
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
    /// Delete a receipt by ID
    Delete {
        /// Receipt ID
        receipt: String,
    },
}

fn parse_item_spec(spec: &str) -> KitchenResult<ReceiptItem> {
    let parts: Vec<&str> = spec.split(':').collect();
    let (name, quantity, price) = match parts.as_slice() {
        [name, price] => (*name, 1.0, *price),
        [name, qty, price] => {
            let quantity: f64 = qty.parse().map_err(|_| {
                KitchenError::Validation(format!("Invalid quantity in '{}'", spec))
            })?;
            (*name, quantity, *price)
        }
        _ => {
            return Err(KitchenError::Validation(format!(
                "Invalid item '{}'; use name:price or name:qty:price",
                spec
            )));
        }
    };

    if name.trim().is_empty() {
        return Err(KitchenError::Validation(format!(
            "Missing item name in '{}'",
            spec
        )));
    }

    Ok(ReceiptItem {
        name: name.trim().to_string(),
        quantity,
        unit: String::new(),
        price: Money::parse(price)
            .map_err(|e| KitchenError::Validation(format!("Invalid price in '{}': {}", spec, e)))?,
    })
}

/// Reconcile a finalized receipt against the ledger, print the change log,
/// and store everything in one save
fn record_receipt(store: &LedgerStore, receipt: Receipt) -> KitchenResult<()> {
    let mut ledger = store.load()?;

    let outcome = reconcile::apply_receipt(&receipt, &ledger.recipes, &ledger.pantry);
    println!("Recorded receipt: {}", receipt);
    print!("{}", format_change_log(&outcome));

    ledger.recipes = outcome.recipes;
    ledger.pantry = outcome.pantry;
    ledger.receipts.push(receipt);
    store.save(&ledger)
}

/// Handle a receipt command
pub fn handle_receipt_command(store: &LedgerStore, cmd: ReceiptCommands) -> KitchenResult<()> {
    match cmd {
        ReceiptCommands::Add {
            store: receipt_store,
            date,
            total,
            items,
        } => {
            let items = items
                .iter()
                .map(|s| parse_item_spec(s))
                .collect::<KitchenResult<Vec<_>>>()?;
            let total = match total {
                Some(t) => Some(
                    Money::parse(&t)
                        .map_err(|e| KitchenError::Validation(format!("Invalid total: {}", e)))?,
                ),
                None => None,
            };
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            record_receipt(store, Receipt::new(receipt_store, date, total, items))?;
        }

        ReceiptCommands::Import { file } => {
            let json = fs::read_to_string(&file)?;
            let receipt = scan::parse_receipt_scan(&json)?.into_receipt();
            record_receipt(store, receipt)?;
        }

        ReceiptCommands::List { limit } => {
            let ledger = store.load()?;
            if ledger.receipts.is_empty() {
                println!("No receipts recorded.");
                return Ok(());
            }
            let mut receipts = ledger.receipts.clone();
            receipts.sort_by(|a, b| b.date.cmp(&a.date));
            for receipt in receipts.iter().take(limit) {
                println!("{}  [{}]", receipt, receipt.id);
            }
        }

        ReceiptCommands::Delete { receipt } => {
            let mut ledger = store.load()?;
            let found = ledger.resolve_receipt(&receipt)?;
            let id = found.id;
            println!("Deleted receipt: {}", found);
            ledger.receipts.retain(|r| r.id != id);
            store.save(&ledger)?;
        }
    }

    Ok(())
}
