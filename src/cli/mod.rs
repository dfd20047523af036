//! CLI command definitions and handlers

pub mod config;
pub mod pantry;
pub mod plan;
pub mod receipt;
pub mod recipe;
pub mod report;
pub mod shopping;

pub use config::{handle_config_command, ConfigCommands};
pub use pantry::{handle_pantry_command, PantryCommands};
pub use plan::{handle_plan_command, PlanCommands};
pub use receipt::{handle_receipt_command, ReceiptCommands};
pub use recipe::{handle_recipe_command, RecipeCommands};
pub use report::{handle_report_command, ReportCommands};
pub use shopping::{handle_shopping_command, ShoppingCommands};
