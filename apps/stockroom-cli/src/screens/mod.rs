//! # Screens
//!
//! One module per main-menu entry. Each screen takes the console and the
//! inventory it needs, and returns when the user is done or backs out.
//!
//! ```text
//! screens/
//! ├── add.rs       ◄─── [A] Add Product (name collisions, stock top-up)
//! ├── display.rs   ◄─── [B] Display Products
//! ├── search.rs    ◄─── [C] Search Products (quick / advanced + filters)
//! └── analysis.rs  ◄─── [D] Display Product Analysis
//! ```

pub mod add;
pub mod analysis;
pub mod display;
pub mod search;

use stockroom_core::Product;

/// `======= TITLE =======`
pub fn banner(title: &str) -> String {
    format!("{bar} {title} {bar}", bar = "=".repeat(7))
}

/// Listing line with every field, used by Display Products.
pub fn full_line(position: usize, product: &Product) -> String {
    format!(
        "[{position}] Name: {}, ID: {} | [Company: {}, Category: {}, Sub-Category: {}, Price: {}, Stock: {}]",
        product.name,
        product.id,
        product.company,
        product.category,
        product.sub_category,
        product.price,
        product.stock
    )
}

/// Listing line for keyword search hits.
pub fn detail_line(position: usize, product: &Product) -> String {
    format!(
        "[{position}] Name: {} | [Company: {}, Category: {}, Sub-Category: {}, Price: {}, Stock: {}]",
        product.name,
        product.company,
        product.category,
        product.sub_category,
        product.price,
        product.stock
    )
}

/// Listing line for filtered and advanced search results.
pub fn short_line(position: usize, product: &Product) -> String {
    format!(
        "[{position}] Name: {} | [Price: {}, Stock: {}]",
        product.name, product.price, product.stock
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{Price, ProductDraft};

    fn mouse() -> Product {
        ProductDraft::new("mouse", "acme", "electronics", "peripheral", Price::from_parts(19, 9900), 5)
            .into_product("0001MEP".to_string())
    }

    #[test]
    fn test_banner() {
        assert_eq!(banner("QUICK SEARCH"), "======= QUICK SEARCH =======");
    }

    #[test]
    fn test_listing_lines() {
        let p = mouse();
        assert_eq!(
            full_line(1, &p),
            "[1] Name: Mouse, ID: 0001MEP | [Company: Acme, Category: Electronics, \
             Sub-Category: Peripheral, Price: $19.99, Stock: 5]"
        );
        assert_eq!(short_line(2, &p), "[2] Name: Mouse | [Price: $19.99, Stock: 5]");
        assert!(detail_line(3, &p).starts_with("[3] Name: Mouse | [Company: Acme"));
    }
}
