//! Piezas game engine.

use super::invariants::{GravityInvariant, Invariant};
use super::rules::{is_full, tally_lines};
use super::types::{Board, COLUMNS, Piece, Player, ROWS};
use tracing::{debug, info, instrument, warn};

/// Piezas rules engine: a 3x4 board plus whose turn it is.
///
/// Every rule violation is answered in-band with a [`Piece`] sentinel
/// rather than an error, so callers branch on the returned value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGame {
    board: Board,
    turn: Player,
}

/// Maps a signed coordinate onto `0..limit`.
fn index(value: i32, limit: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&i| i < limit)
}

impl BoardGame {
    /// Creates an empty board with player A to move.
    #[instrument]
    pub fn new() -> Self {
        Self::starting_with(Player::A)
    }

    /// Creates an empty board with `turn` to move.
    pub(crate) fn starting_with(turn: Player) -> Self {
        Self {
            board: Board::new(),
            turn,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose piece the next drop places.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Empties every square. The board keeps its size and the turn is
    /// left where it was.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn reset(&mut self) {
        self.board.clear();
        info!("Board reset");
    }

    /// Drops the current player's piece into `column`.
    ///
    /// Returns:
    /// - `OutOfRange` when `column` is off the board; the turn does not change.
    /// - `Empty` when the column is already full; nothing is placed but the
    ///   turn still passes to the opponent.
    /// - the placed piece otherwise, after which the turn passes.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn drop_piece(&mut self, column: i32) -> Piece {
        let Some(column) = index(column, COLUMNS) else {
            warn!("Column off the board");
            return Piece::OutOfRange;
        };

        let player = self.turn;
        self.turn = player.opponent();

        match self.board.stack(column, player) {
            Some(row) => {
                debug!(row, "Piece placed");
                debug_assert!(
                    <GravityInvariant as Invariant<Board>>::holds(&self.board),
                    "{}",
                    <GravityInvariant as Invariant<Board>>::description()
                );
                player.piece()
            }
            None => {
                warn!("Column full, turn forfeited");
                Piece::Empty
            }
        }
    }

    /// Returns what sits at `(row, column)`, or `OutOfRange` off the board.
    #[instrument(skip(self))]
    pub fn piece_at(&self, row: i32, column: i32) -> Piece {
        match (index(row, ROWS), index(column, COLUMNS)) {
            (Some(row), Some(column)) => self
                .board
                .get(row, column)
                .map(Piece::from)
                .unwrap_or(Piece::OutOfRange),
            _ => Piece::OutOfRange,
        }
    }

    /// True once every square is occupied.
    pub fn is_complete(&self) -> bool {
        is_full(&self.board)
    }

    /// Decides the game.
    ///
    /// Returns `OutOfRange` while any square is empty. This is the same
    /// sentinel [`piece_at`](Self::piece_at) uses for off-board
    /// coordinates; here it means the game is still in progress. On a
    /// full board, returns the piece of the player holding more lines, or
    /// `Empty` for a tie.
    #[instrument(skip(self))]
    pub fn game_state(&self) -> Piece {
        if !self.is_complete() {
            debug!("Game in progress");
            return Piece::OutOfRange;
        }

        let outcome = tally_lines(&self.board).outcome();
        info!(%outcome, "Game decided");
        outcome.into()
    }

    /// Formats the board as a grid, top row first.
    pub fn render(&self) -> String {
        self.board.display()
    }
}

impl Default for BoardGame {
    fn default() -> Self {
        Self::new()
    }
}
