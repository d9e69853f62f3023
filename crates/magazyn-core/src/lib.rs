//! Core types for magazyn
//!
//! This crate provides the fundamental types used throughout the magazyn
//! project:
//!
//! - [`parse_decimal`] / [`quantize`] - Exact decimal parsing and
//!   display-time rounding
//! - [`Item`] - A stocked good (name, quantity, unit, unit price)
//! - [`Warehouse`] - The store owning the stock and the sales ledger
//! - [`render_table`] - Fixed-width listing of a collection
//!
//! All quantity and money arithmetic routes through [`Decimal`]; binary
//! floating point never touches a stored value.
//!
//! # Example
//!
//! ```
//! use magazyn_core::{Item, Warehouse};
//! use rust_decimal_macros::dec;
//!
//! let mut store = Warehouse::new();
//! store.add(Item::new("Milk", dec!(120), "L", dec!(2.30)));
//!
//! // Names match case-insensitively
//! let receipt = store.sell("milk", dec!(20)).unwrap();
//! assert_eq!(receipt.quantity, dec!(20));
//!
//! assert_eq!(store.find("Milk").unwrap().quantity, dec!(100));
//! assert_eq!(store.income(), dec!(46.00));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod decimal;
pub mod format;
pub mod item;
pub mod store;

pub use decimal::{parse_decimal, quantize, ValidationError};
pub use format::{format_header, format_row, render_table};
pub use item::Item;
pub use store::{AddOutcome, SellError, SellReceipt, Warehouse};

// Re-export the decimal type used throughout the public API
pub use rust_decimal::Decimal;
