//! Core library surface for the character picker TUI.
//!
//! The binary only wires these pieces together: decode the glyph table, build
//! the roster, and hand both to the session before running the terminal loop.
pub mod error;
pub mod models;
pub mod roster;
pub mod symbols;
pub mod ui;

#[cfg(test)]
mod test_support;

pub use error::{RosterError, SymbolError};
pub use models::{Entry, FieldName, FieldValue};
pub use roster::Roster;
pub use symbols::{Glyph, SymbolTable};

/// The interactive session and its terminal driver.
pub use ui::{run_app, App};
