//! # Main Menu
//!
//! ```text
//! ======= Stockroom Inventory Management System =======
//! What would you like to do
//! [A] Add Product
//! [B] Display Products
//! [C] Search Products
//! [D] Display Product Analysis
//! [E] Quit
//! Select an option:
//! ```
//!
//! Inventory errors from a screen are printed and the menu carries on;
//! terminal errors end the session.

use std::io::{BufRead, Write};

use tracing::{error, info};

use stockroom_core::Inventory;

use crate::console::Console;
use crate::error::AppResult;
use crate::screens::{add, analysis, banner, display, search};

pub const MAIN_MENU: [&str; 5] = [
    "Add Product",
    "Display Products",
    "Search Products",
    "Display Product Analysis",
    "Quit",
];

pub struct App<R, W> {
    console: Console<R, W>,
    inventory: Inventory,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(console: Console<R, W>, inventory: Inventory) -> Self {
        App { console, inventory }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs the menu until Quit or end of input.
    pub fn run(&mut self) -> AppResult<()> {
        info!("Starting menu");
        self.console
            .say(banner("Stockroom Inventory Management System"))?;

        loop {
            self.console.say("What would you like to do")?;
            self.console.list(&MAIN_MENU)?;
            let Some(answer) = self.console.ask("Select an option: ")? else {
                return self.quit();
            };

            let result = match answer.trim().to_uppercase().as_str() {
                "A" => self.add_product(),
                "B" => display::display_products(&mut self.console, &self.inventory)
                    .and_then(|()| self.console.blank()),
                "C" => search::search_products(&mut self.console, &self.inventory)
                    .and_then(|()| self.console.blank()),
                "D" => analysis::show_analysis(&mut self.console, &self.inventory),
                "E" => return self.quit(),
                other => {
                    info!(answer = other, "Invalid main menu input");
                    self.console.say("Invalid Input")
                }
            };

            if let Err(e) = result {
                if !e.is_recoverable() {
                    return Err(e);
                }
                error!(error = %e, "Operation failed");
                self.console.say(&e)?;
                self.console.blank()?;
            }
        }
    }

    fn add_product(&mut self) -> AppResult<()> {
        if let Some(product) = add::add_product(&mut self.console, &mut self.inventory)? {
            self.console.say("Product Added successfully")?;
            self.console.say(format!("Your ID is:[{}]", product.id))?;
            self.console.blank()?;
        }
        Ok(())
    }

    fn quit(&mut self) -> AppResult<()> {
        info!(products = self.inventory.products().len(), "Quitting");
        self.console.say("Goodbye!!!")
    }
}
