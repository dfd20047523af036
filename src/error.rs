//! Custom error types for the kitchen ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for kitchen ledger operations
#[derive(Error, Debug)]
pub enum KitchenError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Scan payload errors
    #[error("Scan error: {0}")]
    Scan(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl KitchenError {
    /// Create a "not found" error for recipes
    pub fn recipe_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Recipe",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for pantry items
    pub fn pantry_item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Pantry item",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for shopping-list items
    pub fn shopping_item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Shopping item",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for receipts
    pub fn receipt_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Receipt",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for KitchenError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KitchenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for kitchen ledger operations
pub type KitchenResult<T> = Result<T, KitchenError>;
