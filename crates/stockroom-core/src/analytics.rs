//! # Analytics Aggregator
//!
//! Whole-inventory summary: counts per field, low-stock products and average
//! stock per category.
//!
//! ## Output
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InventorySummary                                                       │
//! │                                                                         │
//! │  by_category       Electronics: 2                                       │
//! │  by_sub_category   Peripheral: 2                                        │
//! │  by_company        Acme: 2                                              │
//! │  low_stock_count   1            (stock < threshold)                     │
//! │  low_stock         Mouse: 5                                             │
//! │  avg_stock         Electronics: 27.5                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every table lists keys in the order they first appear in the store.

use std::collections::HashMap;

use serde::Serialize;

use crate::store::RecordStore;
use crate::types::SearchField;
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Tally
// =============================================================================

/// Keyed values in first-seen order, with a position map for lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tally<V> {
    #[serde(skip)]
    positions: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V> Default for Tally<V> {
    fn default() -> Self {
        Tally {
            positions: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<V> Tally<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.slot(key).map(|pos| &self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn slot(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Position of `key`, appending `init` on first sight.
    fn slot_or_push(&mut self, key: &str, init: V) -> usize {
        match self.slot(key) {
            Some(pos) => pos,
            None => {
                let pos = self.entries.len();
                self.positions.insert(key.to_string(), pos);
                self.entries.push((key.to_string(), init));
                pos
            }
        }
    }

    /// Sets `key`, keeping its original position if already present.
    fn insert(&mut self, key: &str, value: V) {
        match self.slot(key) {
            Some(pos) => self.entries[pos].1 = value,
            None => {
                self.slot_or_push(key, value);
            }
        }
    }

    fn update(&mut self, key: &str, init: V, f: impl FnOnce(&mut V)) {
        let pos = self.slot_or_push(key, init);
        f(&mut self.entries[pos].1);
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Aggregates over the whole store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    pub by_category: Tally<usize>,
    pub by_sub_category: Tally<usize>,
    pub by_company: Tally<usize>,
    /// Number of products with stock below the threshold.
    pub low_stock_count: usize,
    /// Name → stock of every low-stock product. When names repeat, the later
    /// product's stock wins.
    pub low_stock: Tally<u64>,
    /// Total stock in a category divided by its product count, unrounded.
    pub avg_stock_per_category: Tally<f64>,
}

impl InventorySummary {
    /// Count table for an indexed field.
    pub fn counts(&self, field: SearchField) -> &Tally<usize> {
        match field {
            SearchField::Company => &self.by_company,
            SearchField::Category => &self.by_category,
            SearchField::SubCategory => &self.by_sub_category,
        }
    }
}

/// Summarizes the store with the default low-stock threshold (10).
///
/// ## Returns
/// `None` for an empty store. That is a normal state, not an error.
pub fn summarize(store: &RecordStore) -> Option<InventorySummary> {
    summarize_with_threshold(store, LOW_STOCK_THRESHOLD)
}

/// Summarizes the store, treating `stock < threshold` as low.
pub fn summarize_with_threshold(store: &RecordStore, threshold: u64) -> Option<InventorySummary> {
    if store.is_empty() {
        return None;
    }

    let mut by_category: Tally<usize> = Tally::default();
    let mut by_sub_category: Tally<usize> = Tally::default();
    let mut by_company: Tally<usize> = Tally::default();
    let mut low_stock: Tally<u64> = Tally::default();
    let mut low_stock_count = 0;
    let mut stock_per_category: Tally<u128> = Tally::default();

    for product in store.get_all() {
        by_category.update(&product.category, 0, |n| *n += 1);
        by_sub_category.update(&product.sub_category, 0, |n| *n += 1);
        by_company.update(&product.company, 0, |n| *n += 1);
        stock_per_category.update(&product.category, 0, |total| {
            *total += u128::from(product.stock)
        });

        if product.is_low_stock(threshold) {
            low_stock_count += 1;
            low_stock.insert(&product.name, product.stock);
        }
    }

    let mut avg_stock_per_category: Tally<f64> = Tally::default();
    for (category, total) in stock_per_category.iter() {
        let count = by_category.get(category).copied().unwrap_or(1);
        avg_stock_per_category.insert(category, *total as f64 / count as f64);
    }

    Some(InventorySummary {
        by_category,
        by_sub_category,
        by_company,
        low_stock_count,
        low_stock,
        avg_stock_per_category,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
