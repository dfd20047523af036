//! Name matching
//!
//! The single identity primitive used across collections: trimmed,
//! case-insensitive exact comparison. Every component that needs to decide
//! whether two item names refer to the same thing must call this, never an
//! ad-hoc equality test. There is deliberately no fuzzy matching and no
//! stemming ("Tomatoes" is not "Tomato").

/// Canonical form of an item name: trimmed and lowercased
///
/// Dedup keys and name comparisons must both go through this, so that two
/// names compare equal exactly when their keys collide.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether two item names refer to the same item
///
/// Empty names never match anything, including other empty names.
pub fn names_match(a: &str, b: &str) -> bool {
    let a = normalize_name(a);
    let b = normalize_name(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b
}
