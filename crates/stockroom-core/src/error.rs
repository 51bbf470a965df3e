//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── ValidationError  - Raw user input rejected (re-prompt)            │
//! │  └── CoreError        - Record store consistency failures              │
//! │                                                                         │
//! │  stockroom-cli errors (app crate)                                      │
//! │  └── AppError         - Config, terminal I/O, wrapped CoreError        │
//! │                                                                         │
//! │  NOT errors: empty search / filter / analysis results. Those are       │
//! │  ordinary values (`None`, `FilterOutcome::Empty`).                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (ID, field, etc.)
//! 3. Validation messages are shown to the user verbatim

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Record store and inventory errors.
///
/// None of these are user mistakes: the menu validates and pre-checks
/// everything before calling into the core, so seeing one of these means a
/// caller broke the contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A product with this ID is already stored.
    ///
    /// ## When This Occurs
    /// - `RecordStore::insert` called without running the ID retry loop
    #[error("Duplicate product ID: {0}")]
    DuplicateId(String),

    /// No product is stored under this ID.
    #[error("Unknown product ID: {0}")]
    UnknownId(String),

    /// Every 4-digit sequence for this name/category/sub-category prefix is
    /// already taken.
    ///
    /// ## When This Occurs
    /// ```text
    /// 0001WEG, 0002WEG, ... 9999WEG all stored
    ///      │
    ///      ▼
    /// next_free_id("Widget", "Electronics", "Gadget")
    ///      │
    ///      ▼
    /// IdSpaceExhausted { prefix: "WEG" }
    /// ```
    #[error("No free ID left for prefix {prefix}")]
    IdSpaceExhausted { prefix: String },

    /// Stock arithmetic overflowed.
    #[error("Stock overflow for {id}: {current} + {delta}")]
    StockOverflow { id: String, current: u64, delta: u64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The display strings are the exact messages the menu prints before asking
/// again. Only [`crate::validation`] and [`Price::parse`](crate::price::Price::parse)
/// produce these; no core operation returns one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input is empty or whitespace only.
    #[error("Input cannot be empty")]
    Empty,

    /// Input is not made of decimal digits.
    #[error("Input must be an integer")]
    NotAnInteger,

    /// Input is zero where a positive amount is needed.
    #[error("Input must be greater than zero")]
    Zero,

    /// Input is not a decimal number.
    #[error("Input must be a number")]
    NotANumber,

    /// Input is a negative number.
    #[error("Input must be a positive number")]
    Negative,

    /// Input is too large to represent.
    #[error("Input is too large")]
    TooLarge,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
