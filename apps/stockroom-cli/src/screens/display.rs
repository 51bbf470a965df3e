//! Display Products screen.

use std::io::{BufRead, Write};

use tracing::info;

use stockroom_core::Inventory;

use crate::console::Console;
use crate::error::AppResult;
use crate::screens::{banner, full_line};

pub const DISPLAY_OPTIONS: [&str; 3] =
    ["Display only Product IDs", "Display full Product Info", "Go Back"];

pub fn display_products<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> AppResult<()> {
    if inventory.is_empty() {
        console.say("No products Available | Try adding a Product")?;
        return Ok(());
    }

    console.blank()?;
    console.say(banner("DISPLAYING PRODUCT(S)"))?;
    console.say("How do you want to display it: ")?;

    match console.choose(&DISPLAY_OPTIONS)? {
        Some(0) => {
            info!(products = inventory.products().len(), "Displaying product IDs");
            console.say(banner("Product By IDs"))?;
            for (i, product) in inventory.products().iter().enumerate() {
                console.say(format!("[{}] {}", i + 1, product.id))?;
            }
        }
        Some(1) => {
            info!(products = inventory.products().len(), "Displaying full product info");
            console.say(banner("ALL PRODUCTS"))?;
            for (i, product) in inventory.products().iter().enumerate() {
                console.say(full_line(i + 1, product))?;
            }
        }
        _ => {}
    }
    Ok(())
}
