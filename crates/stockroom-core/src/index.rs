//! # Secondary Indexes
//!
//! Field value → product IDs, one index per [`SearchField`].
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SecondaryIndex                                                         │
//! │                                                                         │
//! │  Company      "Acme"        → [0001MEP, 0001KEP]                        │
//! │               "Globex"      → [0001WTH]                                 │
//! │                                                                         │
//! │  Category     "Electronics" → [0001MEP, 0001KEP]                        │
//! │               "Tools"       → [0001WTH]                                 │
//! │                                                                         │
//! │  Sub-Category "Peripheral"  → [0001MEP, 0001KEP]                        │
//! │               "Hand"        → [0001WTH]                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values keep the order they were first seen in and every ID list keeps
//! insertion order, so menus built from the index are stable between runs.
//! Entries are append-only; products are never removed.

use std::collections::HashMap;

use crate::types::SearchField;

/// Value → IDs for a single field, ordered by first occurrence.
#[derive(Debug, Default, Clone)]
struct FieldIndex {
    positions: HashMap<String, usize>,
    entries: Vec<(String, Vec<String>)>,
}

impl FieldIndex {
    fn push(&mut self, value: &str, id: &str) {
        match self.positions.get(value) {
            Some(&pos) => self.entries[pos].1.push(id.to_string()),
            None => {
                self.positions.insert(value.to_string(), self.entries.len());
                self.entries.push((value.to_string(), vec![id.to_string()]));
            }
        }
    }

    fn get(&self, value: &str) -> &[String] {
        self.positions
            .get(value)
            .map_or(&[][..], |&pos| self.entries[pos].1.as_slice())
    }

    fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(value, _)| value.as_str())
    }
}

/// The three secondary indexes kept beside the record store.
#[derive(Debug, Default, Clone)]
pub struct SecondaryIndex {
    fields: [FieldIndex; 3],
}

impl SecondaryIndex {
    /// Creates empty indexes for every field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexed fields in their fixed menu order.
    pub fn fields(&self) -> &'static [SearchField] {
        &SearchField::ALL
    }

    /// Appends `id` under `(field, value)`, creating the entry on first use.
    pub fn index(&mut self, field: SearchField, value: &str, id: &str) {
        self.fields[field.position()].push(value, id);
    }

    /// IDs stored under `(field, value)` in insertion order.
    ///
    /// Unknown values give an empty slice.
    pub fn lookup(&self, field: SearchField, value: &str) -> &[String] {
        self.fields[field.position()].get(value)
    }

    /// Observed values of `field`, in the order they first appeared.
    pub fn values(&self, field: SearchField) -> Vec<&str> {
        self.fields[field.position()].values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_lookup_keep_insertion_order() {
        let mut index = SecondaryIndex::new();
        index.index(SearchField::Company, "Acme", "0001MEP");
        index.index(SearchField::Company, "Globex", "0001WTH");
        index.index(SearchField::Company, "Acme", "0001KEP");

        assert_eq!(index.lookup(SearchField::Company, "Acme"), ["0001MEP", "0001KEP"]);
        assert_eq!(index.lookup(SearchField::Company, "Globex"), ["0001WTH"]);
        assert_eq!(index.values(SearchField::Company), ["Acme", "Globex"]);
    }

    #[test]
    fn test_unknown_value_is_empty() {
        let index = SecondaryIndex::new();
        assert!(index.lookup(SearchField::Category, "Nothing").is_empty());
        assert!(index.values(SearchField::SubCategory).is_empty());
    }

    #[test]
    fn test_fields_are_independent() {
        let mut index = SecondaryIndex::new();
        index.index(SearchField::Category, "Tools", "0001WTH");

        assert_eq!(index.lookup(SearchField::Category, "Tools"), ["0001WTH"]);
        assert!(index.lookup(SearchField::Company, "Tools").is_empty());
        assert!(index.lookup(SearchField::SubCategory, "Tools").is_empty());
    }

    #[test]
    fn test_fields_order() {
        let index = SecondaryIndex::new();
        let labels: Vec<_> = index.fields().iter().map(SearchField::label).collect();
        assert_eq!(labels, ["Company", "Category", "Sub-Category"]);
    }
}
