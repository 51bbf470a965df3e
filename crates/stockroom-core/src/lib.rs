//! # stockroom-core: Inventory Indexing & Query Engine
//!
//! This crate is the **heart** of Stockroom. It stores products, keeps the
//! secondary indexes in step with them, hands out collision-free IDs and
//! answers searches, filters and analytics. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-cli (text menu)                      │   │
//! │  │   Add ──► Display ──► Search / Filter ──► Analysis              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ validated values                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stockroom-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │   store   │  │   query   │  │ analytics │  │   │
//! │  │   │ register  │  │  records  │  │  keyword  │  │  counts   │  │   │
//! │  │   │ add_stock │  │  indexes  │  │  filters  │  │ low stock │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • EVENTS GO TO AN INJECTED SINK                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, ProductDraft, SearchField, NameCollision
//! - [`price`] - Fixed-point price with 4 decimals
//! - [`validation`] - Input predicates used by the menu
//! - [`id`] - ID generation
//! - [`index`] - Secondary indexes
//! - [`store`] - Record store
//! - [`query`] - Keyword/advanced search and filters
//! - [`analytics`] - Inventory summary
//! - [`events`] - Event sink
//! - [`inventory`] - Facade tying everything together
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Inventory, NameCollision, Price, ProductDraft, Registration};
//!
//! let mut inventory = Inventory::new();
//! let draft = ProductDraft::new("mouse", "acme", "electronics", "peripheral",
//!     Price::parse("19.99").unwrap(), 5);
//!
//! let Registration::Added(mouse) = inventory.register(draft, NameCollision::Abort).unwrap() else {
//!     unreachable!();
//! };
//! assert_eq!(mouse.id, "0001MEP");
//!
//! let summary = inventory.summarize().unwrap();
//! assert_eq!(summary.low_stock_count, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod analytics;
pub mod error;
pub mod events;
pub mod id;
pub mod index;
pub mod inventory;
pub mod price;
pub mod query;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use analytics::{InventorySummary, Tally};
pub use error::{CoreError, CoreResult, ValidationError};
pub use events::{EventSink, InventoryEvent, NullSink, TracingSink};
pub use inventory::{Inventory, Registration};
pub use price::Price;
pub use query::{Bound, FilterCriterion, FilterOutcome, FilterSession};
pub use store::RecordStore;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Products with stock strictly below this count as low stock.
pub const LOW_STOCK_THRESHOLD: u64 = 10;
