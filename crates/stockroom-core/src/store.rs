//! # Record Store
//!
//! The canonical product table.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RecordStore                                                            │
//! │                                                                         │
//! │  records   [Mouse, Keyboard, Widget, Widget]   insertion order          │
//! │  by_id     "0001MEP" → 0, "0001KEP" → 1, ...    one slot per ID         │
//! │  names     {"Mouse", "Keyboard", "Widget"}      mirrors record names    │
//! │  index     SecondaryIndex                       updated on insert       │
//! │                                                                         │
//! │  insert ──► by_id + records + names + index   (all or nothing)         │
//! │  update_stock ──► records[slot] = records[slot].with_stock(..)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are replaced wholesale on stock updates; nothing hands out a
//! mutable reference to a stored product.

use std::collections::{HashMap, HashSet};

use crate::error::{CoreError, CoreResult};
use crate::index::SecondaryIndex;
use crate::types::{Product, SearchField};

/// Products by ID, plus the name set and secondary indexes.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    records: Vec<Product>,
    by_id: HashMap<String, usize>,
    names: HashSet<String>,
    index: SecondaryIndex,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new product and indexes its company, category and
    /// sub-category.
    ///
    /// ## Errors
    /// `DuplicateId` if the ID is already stored. Nothing is modified in
    /// that case.
    pub fn insert(&mut self, product: Product) -> CoreResult<()> {
        if self.by_id.contains_key(&product.id) {
            return Err(CoreError::DuplicateId(product.id));
        }

        for field in SearchField::ALL {
            self.index.index(field, product.field(field), &product.id);
        }
        self.names.insert(product.name.clone());
        self.by_id.insert(product.id.clone(), self.records.len());
        self.records.push(product);
        Ok(())
    }

    /// All products in insertion order.
    pub fn get_all(&self) -> &[Product] {
        &self.records
    }

    /// Looks up one product.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).map(|&slot| &self.records[slot])
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// The most recently inserted product called `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        if !self.contains_name(name) {
            return None;
        }
        self.records.iter().rev().find(|p| p.name == name)
    }

    /// Replaces the stored record with one whose stock is `stock + delta`.
    ///
    /// ## Returns
    /// The new record.
    ///
    /// ## Errors
    /// - `UnknownId` if no product has this ID
    /// - `StockOverflow` if the new stock does not fit in a `u64`
    pub fn update_stock(&mut self, id: &str, delta: u64) -> CoreResult<&Product> {
        let slot = *self
            .by_id
            .get(id)
            .ok_or_else(|| CoreError::UnknownId(id.to_string()))?;

        let current = &self.records[slot];
        let stock = current
            .stock
            .checked_add(delta)
            .ok_or_else(|| CoreError::StockOverflow {
                id: id.to_string(),
                current: current.stock,
                delta,
            })?;

        let updated = current.with_stock(stock);
        self.records[slot] = updated;
        Ok(&self.records[slot])
    }

    /// Read-only access to the secondary indexes.
    pub fn index(&self) -> &SecondaryIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
