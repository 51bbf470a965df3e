//! # Add Product Screen
//!
//! ```text
//! Enter product name ──► name stored already?
//!                          │ no                 │ yes
//!                          │                    ▼
//!                          │        [A] Add stocks ──────► amount ──► register(AddStock)
//!                          │        [B] Use name(Different ID) ─┐
//!                          │        [C] Go Back ──────────────────────► register(Abort)
//!                          ▼                                    │
//!              company, category, sub-category, price, stock ◄──┘
//!                          │
//!                          ▼
//!                  register(draft) ──► new ID
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use stockroom_core::validation::{
    non_empty_text, non_negative_integer, non_negative_price, positive_integer,
};
use stockroom_core::{Inventory, NameCollision, Product, ProductDraft, Registration, SearchField};

use crate::console::Console;
use crate::error::AppResult;
use crate::screens::banner;

pub const COLLISION_OPTIONS: [&str; 3] = ["Add stocks", "Use name(Different ID)", "Go Back"];

const FIELD_PROMPTS: [&str; 3] = [
    "Enter company name: ",
    "Enter category name(Electronics, Food,...): ",
    "Enter sub_category(Electronics(laptop, phone,...), Food(grain,...)): ",
];

/// Walks the user through registering a product.
///
/// ## Returns
/// The new product, or `None` when the user backed out or topped up an
/// existing product instead.
pub fn add_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> AppResult<Option<Product>> {
    console.blank()?;
    console.say(banner("REGISTERING PRODUCT"))?;

    let Some(name) = console.prompt("Enter product name: ", non_empty_text)? else {
        return Ok(None);
    };

    let on_collision = if inventory.contains_name(&name) {
        warn!(%name, "Product name already exists");
        match resolve_collision(console, inventory, &name)? {
            NameCollision::UseSameNameNewId => NameCollision::UseSameNameNewId,
            decision => {
                apply_to_existing(console, inventory, &name, decision)?;
                return Ok(None);
            }
        }
    } else {
        // Never consulted: the name is free
        NameCollision::Abort
    };

    let mut values = Vec::with_capacity(FIELD_PROMPTS.len());
    for (field, prompt) in SearchField::ALL.iter().zip(FIELD_PROMPTS) {
        let Some(value) = console.prompt(prompt, non_empty_text)? else {
            return Ok(None);
        };
        debug!(%field, %value, "Field registered");
        values.push(value);
    }

    let Some(price) = console.prompt("Enter product price: ", non_negative_price)? else {
        return Ok(None);
    };
    let Some(stock) = console.prompt("Enter product stock: ", non_negative_integer)? else {
        return Ok(None);
    };

    let draft = ProductDraft::new(&name, &values[0], &values[1], &values[2], price, stock);
    match inventory.register(draft, on_collision)? {
        Registration::Added(product) => Ok(Some(product)),
        Registration::StockAdded(_) | Registration::Aborted => Ok(None),
    }
}

/// Asks what to do about a taken name. Backing out counts as "Go Back".
fn resolve_collision<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
    name: &str,
) -> AppResult<NameCollision> {
    console.blank()?;
    console.say("Name already exist")?;
    console.say("What should be done: ")?;

    let decision = match console.choose(&COLLISION_OPTIONS)? {
        Some(0) => {
            let current = inventory.find_by_name(name).map_or(0, |p| p.stock);
            console.say(format!("Current stock[{current}]"))?;
            match console.prompt("Enter amount to add: ", positive_integer)? {
                Some(delta) => NameCollision::AddStock(delta),
                None => NameCollision::Abort,
            }
        }
        Some(1) => NameCollision::UseSameNameNewId,
        _ => NameCollision::Abort,
    };

    info!(?decision, "Name collision resolved");
    Ok(decision)
}

/// Registers a draft of the existing product so the inventory applies
/// `decision` to it.
fn apply_to_existing<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
    name: &str,
    decision: NameCollision,
) -> AppResult<()> {
    let Some(existing) = inventory.find_by_name(name) else {
        return Ok(());
    };
    let draft = ProductDraft::new(
        &existing.name,
        &existing.company,
        &existing.category,
        &existing.sub_category,
        existing.price,
        0,
    );

    if let Registration::StockAdded(product) = inventory.register(draft, decision)? {
        console.say("Stock Added successfully")?;
        console.say(format!("New stock for {}: {}", product.name, product.stock))?;
        console.blank()?;
    }
    Ok(())
}
