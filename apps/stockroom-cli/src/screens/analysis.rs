//! Display Product Analysis screen.

use std::io::{BufRead, Write};

use tracing::info;

use stockroom_core::{Inventory, SearchField, Tally};

use crate::console::Console;
use crate::error::AppResult;
use crate::screens::{banner, search::YES_NO};

pub fn show_analysis<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> AppResult<()> {
    let Some(summary) = inventory.summarize() else {
        console.say("No products Available for Analysis | Try adding a Product")?;
        return console.blank();
    };

    console.say(banner("SUMMARY ANALYSIS"))?;
    for field in [SearchField::Category, SearchField::SubCategory, SearchField::Company] {
        print_tally(console, field.label(), summary.counts(field), |n| n.to_string())?;
    }
    print_tally(
        console,
        "Average Stocks Per Category",
        &summary.avg_stock_per_category,
        |avg| format!("{avg:.2}"),
    )?;

    if summary.low_stock_count == 0 {
        return Ok(());
    }

    console.say(format!(
        "Low Stocks(Below {}) are: {}",
        inventory.low_stock_threshold(),
        summary.low_stock_count
    ))?;
    console.say("Would you like to see all Products with low stocks:")?;
    if console.choose(&YES_NO)? == Some(0) {
        info!(count = summary.low_stock_count, "Showing low stock products");
        print_tally(console, "Low Stocks", &summary.low_stock, |n| n.to_string())
    } else {
        console.blank()
    }
}

fn print_tally<R: BufRead, W: Write, V>(
    console: &mut Console<R, W>,
    heading: &str,
    tally: &Tally<V>,
    show: impl Fn(&V) -> String,
) -> AppResult<()> {
    console.say(format!("Product Count by {heading}"))?;
    for (key, value) in tally.iter() {
        console.say(format!("{key} | Count: {}", show(value)))?;
    }
    console.blank()
}
