//! Game rules for Piezas.
//!
//! Pure functions for evaluating a board, kept apart from board storage
//! so invariants and the engine can share them.

pub mod full;
pub mod lines;

pub use full::is_full;
pub use lines::{LineTally, Outcome, tally_lines};
