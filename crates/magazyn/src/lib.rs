//! Interactive warehouse inventory tracker.
//!
//! magazyn keeps a list of stocked goods and a cumulative ledger of sold
//! goods, driven by commands typed at a prompt:
//!
//! ```text
//! What would you like to do? add
//! What would you like to do? sell
//! What would you like to do? show_revenue
//! What would you like to do? load items=magazyn.csv sales=sprzedaz.csv
//! ```
//!
//! The pieces: [`parser`] tokenizes a typed line, [`registry`] maps the
//! command name to a handler, and [`shell`] runs the read-dispatch loop
//! over a [`input::LineInput`] source (rustyline interactively, a scripted
//! queue in tests).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod commands;
pub mod input;
pub mod parser;
pub mod registry;
pub mod shell;
