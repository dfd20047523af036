//! Terminal output formatting
//!
//! Formatting is separated from command handling so every view can be tested
//! as a plain string.

pub mod budget;
pub mod pantry;
pub mod plan;
pub mod reconcile;
pub mod recipe;
pub mod shopping;
