//! kitchen-ledger - Terminal-based grocery and meal-planning ledger
//!
//! This library provides the core functionality for the kitchen ledger: it
//! tracks recipes, a pantry inventory, a weekly meal plan, a shopping list,
//! and purchase receipts, and keeps their costs mutually consistent. Receipt
//! prices propagate into recipes and pantry entries, planned weeks collapse
//! into deduplicated shopping lists, and budget rollups are derived from the
//! receipt record.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Filesystem paths and household settings
//! - `error`: Custom error types
//! - `models`: Core data models (recipes, pantry, plan, receipts, money)
//! - `storage`: Atomic whole-ledger JSON storage
//! - `services`: Business logic as pure transforms
//! - `scan`: Lenient parsing of externally-scanned payloads
//! - `display`: Terminal output formatting
//! - `cli`: Command definitions and handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod scan;
pub mod services;
pub mod storage;

pub use error::{KitchenError, KitchenResult};
