//! # Query Engine
//!
//! Keyword search, advanced (drill-down) search and result-set filters.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Search Session                                   │
//! │                                                                         │
//! │   keyword_search("acme")          advanced_search(Category, "Tools")    │
//! │          │                                   │                          │
//! │          └──────────────┬────────────────────┘                          │
//! │                         ▼                                               │
//! │                  result set (Vec<Product>)                              │
//! │                         │                                               │
//! │                         ▼                                               │
//! │   FilterSession::apply(Price ≥ $25.00) ──► Matched / Empty              │
//! │                         │                                               │
//! │                         ▼                                               │
//! │   FilterSession::apply(Stock ≥ 100)   ──► applied to the PREVIOUS       │
//! │                                           output, never the store       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Keyword Normalization
//! Stored field values are capitalized when products are registered, so a
//! search term is tried in exactly two spellings: ALL UPPERCASE and
//! Capitalized. This mirrors the storage normalization instead of doing
//! general case folding.

use std::collections::HashSet;
use std::fmt;

use crate::price::Price;
use crate::store::RecordStore;
use crate::types::{Product, SearchField};
use crate::validation::capitalize;

// =============================================================================
// Searches
// =============================================================================

/// Finds products whose company, category or sub-category equals the term,
/// or whose name contains it.
///
/// ## Returns
/// - `Some(products)` in store insertion order
/// - `None` if nothing matched
///
/// ## Example
/// ```rust
/// use stockroom_core::{Inventory, NameCollision, Price, ProductDraft};
/// use stockroom_core::query::keyword_search;
///
/// let mut inventory = Inventory::new();
/// let draft = ProductDraft::new("Mouse", "Acme", "Electronics", "Peripheral",
///     Price::from_parts(19, 9900), 5);
/// inventory.register(draft, NameCollision::Abort).unwrap();
///
/// assert_eq!(keyword_search(inventory.store(), "ELECTRONICS").unwrap().len(), 1);
/// assert_eq!(keyword_search(inventory.store(), "mou").unwrap().len(), 1);
/// assert!(keyword_search(inventory.store(), "printer").is_none());
/// ```
pub fn keyword_search(store: &RecordStore, term: &str) -> Option<Vec<Product>> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }

    let index = store.index();
    let mut matching: HashSet<&str> = HashSet::new();

    for form in [term.to_uppercase(), capitalize(term)] {
        for field in index.fields() {
            matching.extend(index.lookup(*field, &form).iter().map(String::as_str));
        }

        for product in store.get_all() {
            if product.name.contains(form.as_str()) {
                matching.insert(product.id.as_str());
            }
        }
    }

    let results: Vec<Product> = store
        .get_all()
        .iter()
        .filter(|p| matching.contains(p.id.as_str()))
        .cloned()
        .collect();

    if results.is_empty() {
        None
    } else {
        Some(results)
    }
}

/// Values currently indexed under `field`, for the second advanced-search
/// menu.
pub fn field_values(store: &RecordStore, field: SearchField) -> Vec<&str> {
    store.index().values(field)
}

/// All products whose `field` is exactly `value`, in index order.
pub fn advanced_search(store: &RecordStore, field: SearchField, value: &str) -> Vec<Product> {
    store
        .index()
        .lookup(field, value)
        .iter()
        .filter_map(|id| store.get(id))
        .cloned()
        .collect()
}

// =============================================================================
// Filters
// =============================================================================

/// Direction of a numeric range filter. Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// `value >= threshold`
    Above,
    /// `value <= threshold`
    Below,
}

impl Bound {
    fn admits<T: PartialOrd>(&self, value: T, threshold: T) -> bool {
        match self {
            Bound::Above => value >= threshold,
            Bound::Below => value <= threshold,
        }
    }

    fn word(&self) -> &'static str {
        match self {
            Bound::Above => "above",
            Bound::Below => "below",
        }
    }
}

/// One way of narrowing a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCriterion {
    /// Exact match on company, category or sub-category.
    Field { field: SearchField, value: String },
    /// Price range, threshold already rounded like product prices.
    Price { bound: Bound, threshold: Price },
    /// Stock range.
    Stock { bound: Bound, threshold: u64 },
}

impl FilterCriterion {
    /// Checks a single product.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            FilterCriterion::Field { field, value } => product.field(*field) == value,
            FilterCriterion::Price { bound, threshold } => bound.admits(product.price, *threshold),
            FilterCriterion::Stock { bound, threshold } => bound.admits(product.stock, *threshold),
        }
    }

    /// Human-readable description, e.g. `Price above $25.00`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterCriterion::Field { value, .. } => f.write_str(value),
            FilterCriterion::Price { bound, threshold } => {
                write!(f, "Price {} {}", bound.word(), threshold)
            }
            FilterCriterion::Stock { bound, threshold } => {
                write!(f, "Stock {} {} item(s)", bound.word(), threshold)
            }
        }
    }
}

/// Result of running one filter.
///
/// An empty match is its own variant so callers can tell "the filter ran and
/// matched nothing" apart from "no filter was applied".
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    Matched { products: Vec<Product>, label: String },
    Empty { label: String },
}

impl FilterOutcome {
    pub fn label(&self) -> &str {
        match self {
            FilterOutcome::Matched { label, .. } | FilterOutcome::Empty { label } => label,
        }
    }

    /// Matched products, `None` for an empty outcome.
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            FilterOutcome::Matched { products, .. } => Some(products),
            FilterOutcome::Empty { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FilterOutcome::Empty { .. })
    }
}

/// Narrows `products` by `criterion`.
///
/// ## Returns
/// - `Matched` with the label of the criterion
/// - `Empty` with `No Available products with <label>`
pub fn filter(products: &[Product], criterion: &FilterCriterion) -> FilterOutcome {
    let label = criterion.label();
    let subset: Vec<Product> = products
        .iter()
        .filter(|p| criterion.matches(p))
        .cloned()
        .collect();

    if subset.is_empty() {
        FilterOutcome::Empty {
            label: format!("No Available products with {label}"),
        }
    } else {
        FilterOutcome::Matched {
            products: subset,
            label,
        }
    }
}

/// Distinct values of `field` within a result set, first seen first.
pub fn filter_options(products: &[Product], field: SearchField) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .map(|p| p.field(field))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Filter Session
// =============================================================================

/// A result set that successive filters keep narrowing.
///
/// An empty outcome leaves the current set as it was, so the user can try a
/// different filter on the same products.
#[derive(Debug, Clone)]
pub struct FilterSession {
    current: Vec<Product>,
    applied: Vec<String>,
}

impl FilterSession {
    /// Starts a session from search results.
    pub fn new(products: Vec<Product>) -> Self {
        FilterSession {
            current: products,
            applied: Vec::new(),
        }
    }

    /// The products the next filter will run on.
    pub fn current(&self) -> &[Product] {
        &self.current
    }

    /// Labels of the filters that narrowed the set so far.
    pub fn applied(&self) -> &[String] {
        &self.applied
    }

    /// Runs `criterion` on the current set.
    pub fn apply(&mut self, criterion: &FilterCriterion) -> FilterOutcome {
        let outcome = filter(&self.current, criterion);
        if let FilterOutcome::Matched { products, label } = &outcome {
            self.current = products.clone();
            self.applied.push(label.clone());
        }
        outcome
    }

    /// Values offered by a categorical filter on the current set.
    pub fn options(&self, field: SearchField) -> Vec<String> {
        filter_options(&self.current, field)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductDraft;

    fn sample_store() -> RecordStore {
        let mut store = RecordStore::new();
        let rows = [
            ("0001MEP", "Mouse", "Acme", "Electronics", "Peripheral", "19.99", 5),
            ("0001KEP", "Keyboard", "Acme", "Electronics", "Peripheral", "29.99", 50),
            ("0001HTH", "Hammer", "Globex", "Tools", "Hand", "12.50", 8),
            ("0001CEC", "Cable", "Acme", "Electronics", "Cable", "3.00", 200),
        ];
        for (id, name, company, category, sub, price, stock) in rows {
            let draft = ProductDraft::new(name, company, category, sub, Price::parse(price).unwrap(), stock);
            store.insert(draft.into_product(id.to_string())).unwrap();
        }
        store
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_keyword_search_on_index_keys() {
        let store = sample_store();
        let found = keyword_search(&store, "ELECTRONICS").unwrap();
        assert_eq!(names(&found), ["Mouse", "Keyboard", "Cable"]);

        let found = keyword_search(&store, "globex").unwrap();
        assert_eq!(names(&found), ["Hammer"]);
    }

    #[test]
    fn test_keyword_search_on_name_substring() {
        let store = sample_store();
        // "ey" capitalizes to "Ey", which no name contains; "EY" neither.
        assert!(keyword_search(&store, "ey").is_none());
        // Capitalized form is a prefix of "Keyboard".
        assert_eq!(names(&keyword_search(&store, "key").unwrap()), ["Keyboard"]);
    }

    #[test]
    fn test_keyword_search_unions_without_duplicates() {
        let store = sample_store();
        // "Cable" is both a name and a sub-category value.
        let found = keyword_search(&store, "cable").unwrap();
        assert_eq!(names(&found), ["Cable"]);
    }

    #[test]
    fn test_keyword_search_no_results() {
        let store = sample_store();
        assert!(keyword_search(&store, "printer").is_none());
        assert!(keyword_search(&store, "   ").is_none());
    }

    #[test]
    fn test_advanced_search_and_values() {
        let store = sample_store();
        assert_eq!(field_values(&store, SearchField::Category), ["Electronics", "Tools"]);
        assert_eq!(
            field_values(&store, SearchField::SubCategory),
            ["Peripheral", "Hand", "Cable"]
        );

        let found = advanced_search(&store, SearchField::Company, "Acme");
        assert_eq!(names(&found), ["Mouse", "Keyboard", "Cable"]);
        assert!(advanced_search(&store, SearchField::Company, "Initech").is_empty());
    }

    #[test]
    fn test_price_filter_labels_and_bounds() {
        let store = sample_store();
        let products = store.get_all();

        let above = FilterCriterion::Price {
            bound: Bound::Above,
            threshold: Price::parse("19.99").unwrap(),
        };
        let outcome = filter(products, &above);
        assert_eq!(outcome.label(), "Price above $19.99");
        assert_eq!(names(outcome.products().unwrap()), ["Mouse", "Keyboard"]);

        let below = FilterCriterion::Price {
            bound: Bound::Below,
            threshold: Price::parse("1").unwrap(),
        };
        let outcome = filter(products, &below);
        assert!(outcome.is_empty());
        assert_eq!(outcome.label(), "No Available products with Price below $1.00");
    }

    #[test]
    fn test_stock_and_field_filters() {
        let store = sample_store();
        let products = store.get_all();

        let outcome = filter(
            products,
            &FilterCriterion::Stock {
                bound: Bound::Below,
                threshold: 8,
            },
        );
        assert_eq!(outcome.label(), "Stock below 8 item(s)");
        assert_eq!(names(outcome.products().unwrap()), ["Mouse", "Hammer"]);

        let outcome = filter(
            products,
            &FilterCriterion::Field {
                field: SearchField::SubCategory,
                value: "Peripheral".to_string(),
            },
        );
        assert_eq!(outcome.label(), "Peripheral");
        assert_eq!(names(outcome.products().unwrap()), ["Mouse", "Keyboard"]);
    }

    #[test]
    fn test_filter_options_first_seen_order() {
        let store = sample_store();
        assert_eq!(
            filter_options(store.get_all(), SearchField::Company),
            ["Acme", "Globex"]
        );
    }

    #[test]
    fn test_filter_session_composes() {
        let store = sample_store();
        let mut session = FilterSession::new(store.get_all().to_vec());

        let outcome = session.apply(&FilterCriterion::Field {
            field: SearchField::Category,
            value: "Electronics".to_string(),
        });
        assert_eq!(outcome.products().unwrap().len(), 3);

        let outcome = session.apply(&FilterCriterion::Stock {
            bound: Bound::Above,
            threshold: 1000,
        });
        assert!(outcome.is_empty());
        // Empty outcome keeps the previous set
        assert_eq!(session.current().len(), 3);

        let outcome = session.apply(&FilterCriterion::Stock {
            bound: Bound::Above,
            threshold: 50,
        });
        assert_eq!(names(outcome.products().unwrap()), ["Keyboard", "Cable"]);
        assert_eq!(session.applied(), ["Electronics", "Stock above 50 item(s)"]);
        assert_eq!(session.options(SearchField::SubCategory), ["Peripheral", "Cable"]);
    }
}
