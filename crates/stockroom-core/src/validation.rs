//! # Validation Module
//!
//! Input validation predicates for Stockroom.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Contract                                │
//! │                                                                         │
//! │  raw line from the menu                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  predicate(raw) ← THIS MODULE                                          │
//! │       │                                                                 │
//! │       ├── Ok(normalized)  → handed to the core as-is                   │
//! │       │                                                                 │
//! │       └── Err(message)    → printed, user asked again                  │
//! │                                                                         │
//! │  The core never re-checks what passed here.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{non_empty_text, non_negative_integer};
//!
//! assert_eq!(non_empty_text("  wireless mouse ").unwrap(), "Wireless mouse");
//! assert_eq!(non_negative_integer("42").unwrap(), 42);
//! assert!(non_negative_integer("4.2").is_err());
//! ```

use crate::error::ValidationError;
use crate::price::Price;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Text
// =============================================================================

/// Upper-cases the first character and lower-cases the rest.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::capitalize;
///
/// assert_eq!(capitalize("eLECTRONICS"), "Electronics");
/// assert_eq!(capitalize("usb hub"), "Usb hub");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(value: &str) -> String {
    let value = value.trim();
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Validates free text (names, companies, categories, search terms).
///
/// ## Rules
/// - Must not be empty after trimming
///
/// ## Returns
/// The trimmed, capitalized value.
pub fn non_empty_text(input: &str) -> ValidationResult<String> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    Ok(capitalize(input))
}

// =============================================================================
// Numbers
// =============================================================================

/// Validates a stock count.
///
/// ## Rules
/// - Must not be empty
/// - Must be plain decimal digits (no sign, no decimal point)
/// - Zero is allowed (registering a product that is out of stock)
pub fn non_negative_integer(input: &str) -> ValidationResult<u64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotAnInteger);
    }

    input.parse().map_err(|_| ValidationError::TooLarge)
}

/// Validates a stock delta.
///
/// ## Rules
/// - Same as [`non_negative_integer`]
/// - Must be greater than zero
///
/// ## User Workflow
/// ```text
/// Current stock[5]
/// Enter amount to add: 0
///      │
///      ▼
/// positive_integer("0") ← THIS FUNCTION
///      │
///      └── Error: "Input must be greater than zero"
/// ```
pub fn positive_integer(input: &str) -> ValidationResult<u64> {
    let value = non_negative_integer(input)?;

    if value == 0 {
        return Err(ValidationError::Zero);
    }

    Ok(value)
}

/// Validates a price or price threshold.
///
/// ## Rules
/// - Must not be empty
/// - Must be a plain decimal number
/// - Must not be negative
/// - Rounded to 4 decimal places
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::non_negative_price;
///
/// assert_eq!(non_negative_price("19.99").unwrap().to_string(), "$19.99");
/// assert!(non_negative_price("-1").is_err());
/// assert!(non_negative_price("ten").is_err());
/// ```
pub fn non_negative_price(input: &str) -> ValidationResult<Price> {
    Price::parse(input)
}

// =============================================================================
// Unit Tests
// =============================================================================
