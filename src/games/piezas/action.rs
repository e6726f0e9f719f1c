//! First-class drop records for Piezas.
//!
//! A drop is a domain event: who was on turn, which column they chose, and
//! what the engine answered. Records can be replayed and serialized.

use super::{Piece, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One call to drop a piece, as the engine saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropRecord {
    /// The player on turn when the drop was requested.
    pub player: Player,
    /// The requested column, which may be off the board.
    pub column: i32,
    /// What the engine returned for the drop.
    pub result: Piece,
}

impl DropRecord {
    /// Creates a new drop record.
    #[instrument]
    pub fn new(player: Player, column: i32, result: Piece) -> Self {
        Self {
            player,
            column,
            result,
        }
    }

    /// True when a piece landed on the board.
    pub fn placed(&self) -> bool {
        self.result.player().is_some()
    }

    /// True when the drop passed the turn to the opponent.
    ///
    /// Only an out-of-range column leaves the turn where it was.
    pub fn advanced_turn(&self) -> bool {
        self.result != Piece::OutOfRange
    }
}

impl std::fmt::Display for DropRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.result {
            Piece::OutOfRange => write!(f, "{} -> column {} (off the board)", self.player, self.column),
            Piece::Empty => write!(f, "{} -> column {} (full, turn lost)", self.player, self.column),
            _ => write!(f, "{} -> column {}", self.player, self.column),
        }
    }
}
