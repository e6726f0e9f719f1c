mod action;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use action::DropRecord;
pub use game::BoardGame;
pub use rules::{LineTally, Outcome};
pub use types::{Board, COLUMNS, Piece, Player, ROWS, Square};
