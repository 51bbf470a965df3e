//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │  ProductDraft   │ ─────► │    Product      │                        │
//! │  │  ─────────────  │  + ID  │  ─────────────  │                        │
//! │  │  name           │        │  id "0001MEP"   │                        │
//! │  │  company        │        │  name ...       │                        │
//! │  │  category       │        │  price (Price)  │                        │
//! │  │  sub_category   │        │  stock (u64)    │                        │
//! │  └─────────────────┘        └─────────────────┘                        │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │  SearchField    │        │  NameCollision  │                        │
//! │  │  Company        │        │  AddStock(n)    │                        │
//! │  │  Category       │        │  UseSameNameNewId                        │
//! │  │  SubCategory    │        │  Abort          │                        │
//! │  └─────────────────┘        └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Immutable Records
//! A stored `Product` is never mutated. A stock change produces a new value
//! through [`Product::with_stock`], which the record store writes back under
//! the same ID. Anyone holding the previous value keeps seeing the old stock.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::price::Price;
use crate::validation::capitalize;

// =============================================================================
// Search Field
// =============================================================================

/// A product field that has a secondary index.
///
/// The declaration order is the menu order and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SearchField {
    Company,
    Category,
    SubCategory,
}

impl SearchField {
    /// All indexed fields in declaration order.
    pub const ALL: [SearchField; 3] = [
        SearchField::Company,
        SearchField::Category,
        SearchField::SubCategory,
    ];

    /// The label shown in menus.
    pub const fn label(&self) -> &'static str {
        match self {
            SearchField::Company => "Company",
            SearchField::Category => "Category",
            SearchField::SubCategory => "Sub-Category",
        }
    }

    /// Position in [`SearchField::ALL`].
    pub const fn position(&self) -> usize {
        match self {
            SearchField::Company => 0,
            SearchField::Category => 1,
            SearchField::SubCategory => 2,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// Validated product fields waiting for an ID.
///
/// Text fields are capitalized on construction, so a draft always holds the
/// exact strings that end up in the indexes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub company: String,
    pub category: String,
    pub sub_category: String,
    pub price: Price,
    pub stock: u64,
}

impl ProductDraft {
    /// Creates a draft, capitalizing every text field.
    pub fn new(
        name: &str,
        company: &str,
        category: &str,
        sub_category: &str,
        price: Price,
        stock: u64,
    ) -> Self {
        ProductDraft {
            name: capitalize(name),
            company: capitalize(company),
            category: capitalize(category),
            sub_category: capitalize(sub_category),
            price,
            stock,
        }
    }

    /// Attaches an ID, producing the stored record.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            company: self.company,
            category: self.category,
            sub_category: self.sub_category,
            price: self.price,
            stock: self.stock,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product held in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// `NNNN` sequence + first letters of name, category, sub-category.
    pub id: String,

    /// Display name, capitalized.
    pub name: String,

    pub company: String,
    pub category: String,
    pub sub_category: String,

    /// Unit price, 4 decimal places.
    pub price: Price,

    /// Units on hand.
    pub stock: u64,
}

impl Product {
    /// Returns the value of an indexed field.
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Company => &self.company,
            SearchField::Category => &self.category,
            SearchField::SubCategory => &self.sub_category,
        }
    }

    /// Returns a copy of this product with a different stock level.
    #[must_use]
    pub fn with_stock(&self, stock: u64) -> Product {
        Product {
            stock,
            ..self.clone()
        }
    }

    /// Checks if stock is strictly below `threshold`.
    #[inline]
    pub fn is_low_stock(&self, threshold: u64) -> bool {
        self.stock < threshold
    }
}

// =============================================================================
// Name Collision
// =============================================================================

/// What to do when a new product's name is already taken.
///
/// ## User Workflow
/// ```text
/// Enter product name: mouse
///      │
///      ▼
/// "Mouse" already stored
///      │
///      ├── [A] Add stocks             → AddStock(delta)
///      ├── [B] Use name(Different ID) → UseSameNameNewId
///      └── [C] Go Back                → Abort
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCollision {
    /// Add this many units to the existing product instead of registering.
    AddStock(u64),
    /// Register a second product with the same name under a fresh ID.
    UseSameNameNewId,
    /// Register nothing.
    Abort,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse() -> Product {
        ProductDraft::new(
            "mouse",
            "ACME",
            "electronics",
            "peripheral",
            Price::from_parts(19, 9900),
            5,
        )
        .into_product("0001MEP".to_string())
    }

    #[test]
    fn test_search_field_order_and_labels() {
        let labels: Vec<_> = SearchField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["Company", "Category", "Sub-Category"]);
        for (i, field) in SearchField::ALL.iter().enumerate() {
            assert_eq!(field.position(), i);
        }
    }

    #[test]
    fn test_draft_capitalizes_text() {
        let product = mouse();
        assert_eq!(product.name, "Mouse");
        assert_eq!(product.company, "Acme");
        assert_eq!(product.category, "Electronics");
        assert_eq!(product.sub_category, "Peripheral");
    }

    #[test]
    fn test_field_access() {
        let product = mouse();
        assert_eq!(product.field(SearchField::Company), "Acme");
        assert_eq!(product.field(SearchField::Category), "Electronics");
        assert_eq!(product.field(SearchField::SubCategory), "Peripheral");
    }

    #[test]
    fn test_with_stock_leaves_original_untouched() {
        let before = mouse();
        let after = before.with_stock(12);
        assert_eq!(before.stock, 5);
        assert_eq!(after.stock, 12);
        assert_eq!(after.id, before.id);
        assert!(before.is_low_stock(10));
        assert!(!after.is_low_stock(10));
    }
}
