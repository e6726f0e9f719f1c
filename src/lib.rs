//! Piezas - rules engine for a 3x4 vertical board game
//!
//! Piezas is a small variant of Connect Four: pieces are dropped into one
//! of four columns and fall to the lowest open row of three. Once the board
//! is full, the player holding more lines of three (in a row window or a
//! whole column) wins, and a row held end to end overrides everything else.
//!
//! # Architecture
//!
//! - **Games**: the [`BoardGame`] engine with its rules and invariants
//! - **Session**: drop history, replay, and JSON reports
//! - **Config**: TOML settings for the `piezas` binary
//!
//! # Example
//!
//! ```
//! use piezas::{BoardGame, Piece};
//!
//! let mut game = BoardGame::new();
//! assert_eq!(game.drop_piece(2), Piece::PlayerA);
//! assert_eq!(game.drop_piece(2), Piece::PlayerB);
//! assert_eq!(game.piece_at(1, 2), Piece::PlayerB);
//! assert_eq!(game.drop_piece(4), Piece::OutOfRange);
//! // The board is not full yet.
//! assert_eq!(game.game_state(), Piece::OutOfRange);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, PiezasConfig, RenderStyle};

// Crate-level exports - Session management
pub use session::{GameReport, ReportOutcome, ScriptError, Session, parse_columns};

// Crate-level exports - Game types
pub use games::piezas::{
    Board, BoardGame, COLUMNS, DropRecord, LineTally, Outcome, Piece, Player, ROWS, Square,
    invariants, rules,
};
