//! # Product Identifiers
//!
//! Human-readable product IDs.
//!
//! ## Format
//! ```text
//!   0001  M  E  P
//!   ────  ─  ─  ─
//!    │    │  │  └── first char of sub-category
//!    │    │  └───── first char of category
//!    │    └──────── first char of name
//!    └───────────── sequence, zero-padded to 4 digits
//! ```
//!
//! Two products with the same three initials only differ by sequence, so the
//! generator cannot promise uniqueness on its own. It stays a pure function;
//! the retry loop lives in [`crate::inventory::Inventory`], which asks the
//! record store whether each candidate is taken.

/// First sequence number tried for every new product.
pub const FIRST_SEQUENCE: u32 = 1;

/// Largest sequence that still fits in four digits.
pub const MAX_SEQUENCE: u32 = 9999;

/// Builds the ID for one candidate sequence number.
///
/// Letter case is copied from the fields, not forced.
///
/// ## Example
/// ```rust
/// use stockroom_core::id::generate;
///
/// assert_eq!(generate("Mouse", "Electronics", "Peripheral", 1), "0001MEP");
/// assert_eq!(generate("Mouse", "Electronics", "Peripheral", 12), "0012MEP");
/// ```
pub fn generate(name: &str, category: &str, sub_category: &str, sequence: u32) -> String {
    let mut id = format!("{sequence:04}");
    id.extend(initial(name));
    id.extend(initial(category));
    id.extend(initial(sub_category));
    id
}

/// The three initials shared by every ID of this name/category/sub-category.
pub fn prefix(name: &str, category: &str, sub_category: &str) -> String {
    [name, category, sub_category]
        .into_iter()
        .filter_map(initial)
        .collect()
}

fn initial(value: &str) -> Option<char> {
    value.chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_pads_sequence() {
        assert_eq!(generate("Widget", "Tools", "Hand", 1), "0001WTH");
        assert_eq!(generate("Widget", "Tools", "Hand", 42), "0042WTH");
        assert_eq!(generate("Widget", "Tools", "Hand", MAX_SEQUENCE), "9999WTH");
    }

    #[test]
    fn test_generate_keeps_case_and_unicode() {
        assert_eq!(generate("éclair", "Food", "pastry", 3), "0003éFp");
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate("Mouse", "Electronics", "Peripheral", 7);
        let b = generate("Mouse", "Electronics", "Peripheral", 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shared_initials_collide_on_same_sequence() {
        assert_eq!(
            generate("Mouse", "Electronics", "Peripheral", 1),
            generate("Monitor", "Equipment", "Panel", 1)
        );
        assert_eq!(prefix("Mouse", "Electronics", "Peripheral"), "MEP");
    }
}
