//! # Search Screen
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [A] Quick Search                   [B] Advanced Search                 │
//! │      keyword (asks again on 0 hits)     field ──► value                 │
//! │           │                                  │                          │
//! │           ▼                                  ▼                          │
//! │      filter loop                        filter loop                     │
//! │      company / category /               price / stock                   │
//! │      sub-category / price / stock                                       │
//! │                                                                         │
//! │  Each filter narrows what the previous one left. A filter that         │
//! │  matches nothing is reported and the set stays as it was.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info};

use stockroom_core::validation::{non_empty_text, non_negative_integer, non_negative_price};
use stockroom_core::{Bound, FilterCriterion, FilterOutcome, FilterSession, Inventory, SearchField};

use crate::console::{Console, BACK_HINT};
use crate::error::AppResult;
use crate::screens::{banner, detail_line, short_line};

pub const SEARCH_OPTIONS: [&str; 2] = ["Quick Search", "Advanced Search"];
pub const YES_NO: [&str; 2] = ["Yes", "No"];

/// Which filters the loop offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterMenu {
    /// Categorical fields plus price and stock.
    Full,
    /// Price and stock only; the set already shares one field value.
    Numeric,
}

pub fn search_products<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> AppResult<()> {
    if inventory.is_empty() {
        console.say("No products Available | Try adding a Product")?;
        return Ok(());
    }

    console.blank()?;
    console.say(banner("SEARCH PRODUCT(S)"))?;
    console.say("Enter search option: ")?;
    let choice = console.choose(&SEARCH_OPTIONS)?;
    console.blank()?;

    match choice {
        Some(0) => quick_search(console, inventory),
        Some(_) => advanced_search(console, inventory),
        None => Ok(()),
    }
}

// =============================================================================
// Quick Search
// =============================================================================

fn quick_search<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> AppResult<()> {
    console.say(banner("QUICK SEARCH"))?;

    let mut misses = 0;
    let (term, results) = loop {
        let Some(term) = console.prompt("Enter what you want to search for: ", non_empty_text)?
        else {
            return Ok(());
        };
        if let Some(results) = inventory.keyword_search(&term) {
            break (term, results);
        }

        misses += 1;
        debug!(%term, misses, "No products found");
        console.say("No products found")?;
        if misses > 2 {
            console.say(BACK_HINT)?;
            console.blank()?;
        }
    };

    console.say(format!("{} Product(s) Found", results.len()))?;
    console.say(format!("These are the product(s) associated with {term}"))?;
    for (i, product) in results.iter().enumerate() {
        console.say(detail_line(i + 1, product))?;
    }
    console.blank()?;

    filter_loop(console, FilterSession::new(results), FilterMenu::Full)
}

// =============================================================================
// Advanced Search
// =============================================================================

fn advanced_search<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> AppResult<()> {
    console.blank()?;
    console.say(banner("ADVANCED SEARCH"))?;
    console.say("Search By:")?;

    let fields = inventory.fields();
    let labels: Vec<&str> = fields.iter().map(SearchField::label).collect();
    let Some(field) = console.choose(&labels)?.map(|i| fields[i]) else {
        return Ok(());
    };

    console.blank()?;
    console.say(banner(&format!("Searching in {field}")))?;
    console.say(format!("Enter specific {field} :"))?;
    let values: Vec<String> = inventory
        .field_values(field)
        .into_iter()
        .map(str::to_string)
        .collect();
    let Some(value) = console.choose(&values)?.map(|i| &values[i]) else {
        return Ok(());
    };

    let results = inventory.advanced_search(field, value);
    console.blank()?;
    console.say(format!("These are the products in {value}"))?;
    for (i, product) in results.iter().enumerate() {
        console.say(short_line(i + 1, product))?;
    }
    console.blank()?;

    filter_loop(console, FilterSession::new(results), FilterMenu::Numeric)
}

// =============================================================================
// Filter Loop
// =============================================================================

/// Offers filters until the user answers "No" or backs out.
fn filter_loop<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut session: FilterSession,
    menu: FilterMenu,
) -> AppResult<()> {
    let mut again = false;
    loop {
        if menu == FilterMenu::Numeric {
            console.blank()?;
            console.say(banner("FILTER PRODUCTS"))?;
        }
        console.say(if again {
            "would you like to filter products again: "
        } else {
            "would you like to filter products: "
        })?;
        if console.choose(&YES_NO)? != Some(0) {
            info!(applied = ?session.applied(), "Leaving filters");
            return Ok(());
        }

        let criterion = match menu {
            FilterMenu::Full => full_criterion(console, &session)?,
            FilterMenu::Numeric => numeric_criterion(console)?,
        };
        let Some(criterion) = criterion else {
            continue;
        };

        let outcome = session.apply(&criterion);
        info!(label = outcome.label(), matched = !outcome.is_empty(), "Filter applied");
        show_outcome(console, &outcome)?;
        again = true;
    }
}

fn show_outcome<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: &FilterOutcome,
) -> AppResult<()> {
    match outcome {
        FilterOutcome::Matched { products, label } => {
            console.say(format!("{} Product(s) filtered by {label}", products.len()))?;
            for (i, product) in products.iter().enumerate() {
                console.say(short_line(i + 1, product))?;
            }
        }
        FilterOutcome::Empty { label } => console.say(label)?,
    }
    console.blank()
}

fn full_criterion<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &FilterSession,
) -> AppResult<Option<FilterCriterion>> {
    console.blank()?;
    console.say(banner("FILTER PRODUCTS"))?;
    console.say("Filter by: ")?;

    let mut options: Vec<&str> = SearchField::ALL.iter().map(SearchField::label).collect();
    options.extend(["Price", "Stock", "Go Back"]);
    let Some(choice) = console.choose(&options)? else {
        return Ok(None);
    };

    if let Some(&field) = SearchField::ALL.get(choice) {
        let values = session.options(field);
        return Ok(console
            .choose(&values)?
            .map(|i| FilterCriterion::Field {
                field,
                value: values[i].clone(),
            }));
    }

    match choice - SearchField::ALL.len() {
        0 => price_criterion(console),
        1 => stock_criterion(console),
        _ => Ok(None),
    }
}

fn numeric_criterion<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> AppResult<Option<FilterCriterion>> {
    console.say("Filter By:")?;
    match console.choose(&["Price", "Stock"])? {
        Some(0) => price_criterion(console),
        Some(_) => stock_criterion(console),
        None => Ok(None),
    }
}

fn price_criterion<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> AppResult<Option<FilterCriterion>> {
    let Some(threshold) = console.prompt("Enter a Price: ", non_negative_price)? else {
        return Ok(None);
    };
    pick_bound(console, |bound| FilterCriterion::Price { bound, threshold })
}

fn stock_criterion<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> AppResult<Option<FilterCriterion>> {
    let Some(threshold) = console.prompt("Enter a number: ", non_negative_integer)? else {
        return Ok(None);
    };
    pick_bound(console, |bound| FilterCriterion::Stock { bound, threshold })
}

/// Offers "above" and "below" versions of a criterion, labelled as they
/// will be reported.
fn pick_bound<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    make: impl Fn(Bound) -> FilterCriterion,
) -> AppResult<Option<FilterCriterion>> {
    let [above, below] = [Bound::Above, Bound::Below].map(make);
    let labels = [above.label(), below.label()];
    Ok(match console.choose(&labels)? {
        Some(0) => Some(above),
        Some(_) => Some(below),
        None => None,
    })
}
