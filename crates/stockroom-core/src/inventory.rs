//! # Inventory
//!
//! The entry point the menu talks to. Owns the record store, runs the ID
//! retry loop, applies name-collision decisions and reports events to its
//! sink.
//!
//! ## Registration Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  register(draft, on_collision)                                          │
//! │                                                                         │
//! │  name already stored? ── no ──────────────────────────┐                 │
//! │        │ yes                                          │                 │
//! │        ▼                                              ▼                 │
//! │  on_collision                                   next_free_id(draft)     │
//! │   ├── AddStock(n)        → add_stock(existing)    0001MEP taken?        │
//! │   ├── UseSameNameNewId ──────────────────────►    0002MEP taken?        │
//! │   └── Abort              → nothing                ...                   │
//! │                                                       │                 │
//! │                                                       ▼                 │
//! │                                                 store.insert(product)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The decision is made before anything is written, and the record store
//! itself knows nothing about it.

use std::fmt;

use crate::analytics::{self, InventorySummary};
use crate::error::{CoreError, CoreResult};
use crate::events::{EventSink, InventoryEvent, TracingSink};
use crate::id::{self, FIRST_SEQUENCE, MAX_SEQUENCE};
use crate::query;
use crate::store::RecordStore;
use crate::types::{NameCollision, Product, ProductDraft, SearchField};
use crate::LOW_STOCK_THRESHOLD;

/// What [`Inventory::register`] ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// A new product was stored.
    Added(Product),
    /// The name was taken and stock went to the existing product instead.
    StockAdded(Product),
    /// The name was taken and the caller chose to abort.
    Aborted,
}

/// In-memory product inventory.
pub struct Inventory {
    store: RecordStore,
    sink: Box<dyn EventSink>,
    low_stock_threshold: u64,
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::new()
    }
}

impl fmt::Debug for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inventory")
            .field("store", &self.store)
            .field("low_stock_threshold", &self.low_stock_threshold)
            .finish_non_exhaustive()
    }
}

impl Inventory {
    /// Creates an empty inventory that reports to `tracing`.
    pub fn new() -> Self {
        Inventory::with_sink(Box::new(TracingSink))
    }

    /// Creates an empty inventory reporting to `sink`.
    pub fn with_sink(sink: Box<dyn EventSink>) -> Self {
        Inventory {
            store: RecordStore::new(),
            sink,
            low_stock_threshold: LOW_STOCK_THRESHOLD,
        }
    }

    /// Changes the stock level below which products count as low.
    #[must_use]
    pub fn with_low_stock_threshold(mut self, threshold: u64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Stock level below which products count as low.
    pub fn low_stock_threshold(&self) -> u64 {
        self.low_stock_threshold
    }

    /// Read-only access to the record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        self.store.get_all()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.store.contains_name(name)
    }

    /// The product an "add stock" decision for `name` would update.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.store.find_by_name(name)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Finds the first sequence whose ID is not stored yet.
    ///
    /// ## Errors
    /// `IdSpaceExhausted` once sequences 1 through 9999 are all taken.
    pub fn next_free_id(&self, draft: &ProductDraft) -> CoreResult<String> {
        for sequence in FIRST_SEQUENCE..=MAX_SEQUENCE {
            let candidate = id::generate(&draft.name, &draft.category, &draft.sub_category, sequence);
            if !self.store.contains_id(&candidate) {
                return Ok(candidate);
            }
            self.sink.record(&InventoryEvent::IdCollision { candidate });
        }

        Err(CoreError::IdSpaceExhausted {
            prefix: id::prefix(&draft.name, &draft.category, &draft.sub_category),
        })
    }

    /// Registers a product, consulting `on_collision` only if the name is
    /// already stored.
    pub fn register(
        &mut self,
        draft: ProductDraft,
        on_collision: NameCollision,
    ) -> CoreResult<Registration> {
        if self.store.contains_name(&draft.name) {
            match on_collision {
                NameCollision::AddStock(delta) => {
                    let id = self
                        .store
                        .find_by_name(&draft.name)
                        .map(|p| p.id.clone())
                        .ok_or_else(|| CoreError::UnknownId(draft.name.clone()))?;
                    let product = self.add_stock(&id, delta)?;
                    return Ok(Registration::StockAdded(product));
                }
                NameCollision::Abort => {
                    self.sink
                        .record(&InventoryEvent::RegistrationAborted { name: draft.name });
                    return Ok(Registration::Aborted);
                }
                NameCollision::UseSameNameNewId => {}
            }
        }

        let id = self.next_free_id(&draft)?;
        let product = draft.into_product(id);
        self.store.insert(product.clone())?;

        self.sink.record(&InventoryEvent::ProductAdded {
            id: product.id.clone(),
            name: product.name.clone(),
        });
        Ok(Registration::Added(product))
    }

    /// Adds `delta` units to a product.
    ///
    /// ## Returns
    /// The replacement record holding the new stock.
    pub fn add_stock(&mut self, id: &str, delta: u64) -> CoreResult<Product> {
        let product = self.store.update_stock(id, delta)?.clone();

        self.sink.record(&InventoryEvent::StockAdded {
            id: product.id.clone(),
            name: product.name.clone(),
            delta,
            stock: product.stock,
        });
        Ok(product)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// See [`query::keyword_search`].
    pub fn keyword_search(&self, term: &str) -> Option<Vec<Product>> {
        let results = query::keyword_search(&self.store, term);
        self.sink.record(&InventoryEvent::KeywordSearch {
            term: term.trim().to_string(),
            hits: results.as_ref().map_or(0, Vec::len),
        });
        results
    }

    /// Indexed fields in menu order.
    pub fn fields(&self) -> &'static [SearchField] {
        self.store.index().fields()
    }

    /// See [`query::field_values`].
    pub fn field_values(&self, field: SearchField) -> Vec<&str> {
        query::field_values(&self.store, field)
    }

    /// See [`query::advanced_search`].
    pub fn advanced_search(&self, field: SearchField, value: &str) -> Vec<Product> {
        let results = query::advanced_search(&self.store, field, value);
        self.sink.record(&InventoryEvent::AdvancedSearch {
            field,
            value: value.to_string(),
            hits: results.len(),
        });
        results
    }

    /// Summary with this inventory's low-stock threshold, `None` when empty.
    pub fn summarize(&self) -> Option<InventorySummary> {
        let summary = analytics::summarize_with_threshold(&self.store, self.low_stock_threshold);
        if summary.is_some() {
            self.sink.record(&InventoryEvent::Summarized {
                products: self.store.len(),
            });
        }
        summary
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct RecordingSink(Rc<RefCell<Vec<InventoryEvent>>>);

    impl EventSink for RecordingSink {
        fn record(&self, event: &InventoryEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    fn draft(name: &str, stock: u64) -> ProductDraft {
        ProductDraft::new(name, "Acme", "Electronics", "Peripheral", Price::from_parts(5, 0), stock)
    }

    #[test]
    fn test_register_new_product() {
        let mut inventory = Inventory::new();
        let registration = inventory.register(draft("mouse", 5), NameCollision::Abort).unwrap();

        let Registration::Added(product) = registration else {
            panic!("expected Added");
        };
        assert_eq!(product.id, "0001MEP");
        assert!(inventory.store().contains_id("0001MEP"));
    }

    #[test]
    fn test_id_retry_skips_taken_sequences() {
        let mut inventory = Inventory::new();
        inventory.register(draft("Mouse", 1), NameCollision::Abort).unwrap();
        // Same initials, different name
        let registration = inventory.register(draft("Monitor", 1), NameCollision::Abort).unwrap();
        assert!(matches!(registration, Registration::Added(p) if p.id == "0002MEP"));
    }

    #[test]
    fn test_collision_add_stock() {
        let mut inventory = Inventory::new();
        inventory.register(draft("Mouse", 5), NameCollision::Abort).unwrap();

        let registration = inventory
            .register(draft("mouse", 99), NameCollision::AddStock(7))
            .unwrap();
        let Registration::StockAdded(product) = registration else {
            panic!("expected StockAdded");
        };
        assert_eq!(product.stock, 12);
        assert_eq!(inventory.products().len(), 1);
    }

    #[test]
    fn test_collision_same_name_new_id() {
        let mut inventory = Inventory::new();
        inventory.register(draft("Widget", 1), NameCollision::Abort).unwrap();
        inventory
            .register(draft("Widget", 2), NameCollision::UseSameNameNewId)
            .unwrap();

        let ids: Vec<_> = inventory.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["0001WEP", "0002WEP"]);
    }

    #[test]
    fn test_collision_abort_changes_nothing() {
        let sink = RecordingSink::default();
        let mut inventory = Inventory::with_sink(Box::new(sink.clone()));
        inventory.register(draft("Widget", 1), NameCollision::Abort).unwrap();

        let registration = inventory.register(draft("Widget", 2), NameCollision::Abort).unwrap();
        assert_eq!(registration, Registration::Aborted);
        assert_eq!(inventory.products().len(), 1);
        assert!(sink
            .0
            .borrow()
            .contains(&InventoryEvent::RegistrationAborted {
                name: "Widget".to_string()
            }));
    }

    #[test]
    fn test_add_stock_unknown_id() {
        let mut inventory = Inventory::new();
        let err = inventory.add_stock("0001XXX", 3).unwrap_err();
        assert_eq!(err, CoreError::UnknownId("0001XXX".to_string()));
    }

    #[test]
    fn test_id_space_exhausted() {
        let mut inventory = Inventory::with_sink(Box::new(crate::events::NullSink));
        for sequence in FIRST_SEQUENCE..=MAX_SEQUENCE {
            let id = id::generate("Widget", "Electronics", "Peripheral", sequence);
            inventory
                .store
                .insert(draft("Widget", 1).into_product(id))
                .unwrap();
        }

        let err = inventory
            .register(draft("Widget", 1), NameCollision::UseSameNameNewId)
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::IdSpaceExhausted {
                prefix: "WEP".to_string()
            }
        );
        assert_eq!(inventory.products().len(), MAX_SEQUENCE as usize);
    }

    #[test]
    fn test_events_reach_sink() {
        let sink = RecordingSink::default();
        let mut inventory = Inventory::with_sink(Box::new(sink.clone()));
        inventory.register(draft("Mouse", 1), NameCollision::Abort).unwrap();
        inventory.register(draft("Monitor", 1), NameCollision::Abort).unwrap();
        inventory.keyword_search("mo");

        let events = sink.0.borrow();
        assert_eq!(
            events[0],
            InventoryEvent::ProductAdded {
                id: "0001MEP".to_string(),
                name: "Mouse".to_string()
            }
        );
        assert_eq!(
            events[1],
            InventoryEvent::IdCollision {
                candidate: "0001MEP".to_string()
            }
        );
        assert_eq!(
            events[3],
            InventoryEvent::KeywordSearch {
                term: "mo".to_string(),
                hits: 2
            }
        );
    }

    #[test]
    fn test_summary_uses_configured_threshold() {
        let mut inventory = Inventory::new().with_low_stock_threshold(3);
        inventory.register(draft("Mouse", 5), NameCollision::Abort).unwrap();
        assert_eq!(inventory.low_stock_threshold(), 3);
        assert_eq!(inventory.summarize().unwrap().low_stock_count, 0);

        assert!(Inventory::new().summarize().is_none());
    }
}
