//! # Inventory Events
//!
//! The core reports what it does through an injected [`EventSink`] instead of
//! a process-wide logger, so it can run in tests without any subscriber set
//! up.
//!
//! ```text
//! Inventory ──record(&InventoryEvent)──► EventSink
//!                                          ├── TracingSink  → tracing events
//!                                          ├── NullSink     → dropped
//!                                          └── (tests)      → Vec<InventoryEvent>
//! ```

use tracing::{debug, info, warn};

use crate::types::SearchField;

/// Something the inventory did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryEvent {
    /// A candidate ID was already taken; the next sequence will be tried.
    IdCollision { candidate: String },
    /// A product was stored.
    ProductAdded { id: String, name: String },
    /// Stock was added to an existing product.
    StockAdded { id: String, name: String, delta: u64, stock: u64 },
    /// A registration was dropped because the name was taken.
    RegistrationAborted { name: String },
    /// A keyword search ran.
    KeywordSearch { term: String, hits: usize },
    /// An advanced search ran.
    AdvancedSearch { field: SearchField, value: String, hits: usize },
    /// An analysis was requested.
    Summarized { products: usize },
}

/// Receives inventory events.
pub trait EventSink {
    fn record(&self, event: &InventoryEvent);
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &InventoryEvent) {
        match event {
            InventoryEvent::IdCollision { candidate } => {
                debug!(%candidate, "ID already taken, trying next sequence");
            }
            InventoryEvent::ProductAdded { id, name } => {
                info!(%id, %name, "Product added");
            }
            InventoryEvent::StockAdded { id, name, delta, stock } => {
                info!(%id, %name, delta, stock, "Stock added");
            }
            InventoryEvent::RegistrationAborted { name } => {
                warn!(%name, "Registration aborted, name already exists");
            }
            InventoryEvent::KeywordSearch { term, hits } => {
                info!(%term, hits, "Keyword search");
            }
            InventoryEvent::AdvancedSearch { field, value, hits } => {
                info!(%field, %value, hits, "Advanced search");
            }
            InventoryEvent::Summarized { products } => {
                info!(products, "Inventory analysis");
            }
        }
    }
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &InventoryEvent) {}
}
