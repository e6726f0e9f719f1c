//! Core domain types for Piezas.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows on the board. Row 0 is the bottom.
pub const ROWS: usize = 3;

/// Number of columns on the board.
pub const COLUMNS: usize = 4;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player A, shown as `X` (goes first).
    A,
    /// Player B, shown as `O`.
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Returns the piece this player drops.
    pub fn piece(self) -> Piece {
        match self {
            Player::A => Piece::PlayerA,
            Player::B => Piece::PlayerB,
        }
    }

    /// Board symbol for this player.
    pub fn symbol(self) -> char {
        self.piece().symbol()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Value reported for a cell, a drop, or a finished game.
///
/// `OutOfRange` is never stored on the board. It is returned for
/// coordinates off the board, and by [`BoardGame::game_state`] while the
/// game is still in progress.
///
/// [`BoardGame::game_state`]: super::BoardGame::game_state
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Piece {
    /// No piece.
    Empty,
    /// A piece belonging to player A (`X`).
    PlayerA,
    /// A piece belonging to player B (`O`).
    PlayerB,
    /// Sentinel for invalid coordinates or an undecided game.
    OutOfRange,
}

impl Piece {
    /// Returns the owning player, if this is a player's piece.
    pub fn player(self) -> Option<Player> {
        match self {
            Piece::PlayerA => Some(Player::A),
            Piece::PlayerB => Some(Player::B),
            Piece::Empty | Piece::OutOfRange => None,
        }
    }

    /// Board symbol for this piece.
    pub fn symbol(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::PlayerA => 'X',
            Piece::PlayerB => 'O',
            Piece::OutOfRange => '?',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A stored cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

impl From<Square> for Piece {
    fn from(square: Square) -> Self {
        match square {
            Square::Empty => Piece::Empty,
            Square::Occupied(player) => player.piece(),
        }
    }
}

/// 3x4 Piezas board, addressed as `[row][column]` with row 0 at the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; COLUMNS]; ROWS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; COLUMNS]; ROWS],
        }
    }

    /// Gets the square at `(row, column)`, or `None` off the board.
    pub fn get(&self, row: usize, column: usize) -> Option<Square> {
        self.squares.get(row)?.get(column).copied()
    }

    /// Returns the squares of one row, left to right.
    pub fn row(&self, row: usize) -> Option<&[Square; COLUMNS]> {
        self.squares.get(row)
    }

    /// Returns the squares of one column, bottom to top.
    pub fn column(&self, column: usize) -> Option<[Square; ROWS]> {
        if column >= COLUMNS {
            return None;
        }
        Some(std::array::from_fn(|row| self.squares[row][column]))
    }

    /// Returns all rows, bottom row first.
    pub fn rows(&self) -> &[[Square; COLUMNS]; ROWS] {
        &self.squares
    }

    /// Number of occupied squares in a column.
    pub fn height(&self, column: usize) -> usize {
        self.column(column)
            .map(|squares| squares.iter().filter(|s| **s != Square::Empty).count())
            .unwrap_or(0)
    }

    /// Places `player` in the lowest empty row of `column`.
    ///
    /// Returns the row the piece landed in, or `None` when the column is
    /// full or off the board.
    #[instrument(skip(self))]
    pub fn stack(&mut self, column: usize, player: Player) -> Option<usize> {
        if column >= COLUMNS {
            return None;
        }
        let row = (0..ROWS).find(|&row| self.squares[row][column] == Square::Empty)?;
        self.squares[row][column] = Square::Occupied(player);
        Some(row)
    }

    /// Sets every square back to empty.
    pub fn clear(&mut self) {
        self.squares = [[Square::Empty; COLUMNS]; ROWS];
    }

    /// Formats one row, left to right, as board symbols.
    pub fn row_string(&self, row: usize) -> String {
        self.row(row)
            .map(|squares| squares.iter().map(|s| Piece::from(*s).symbol()).collect())
            .unwrap_or_default()
    }

    /// Formats the board as a human-readable grid, top row first.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in (0..ROWS).rev() {
            for (column, symbol) in self.row_string(row).chars().enumerate() {
                result.push(symbol);
                if column < COLUMNS - 1 {
                    result.push('|');
                }
            }
            result.push('\n');
        }
        result.push_str("0 1 2 3");
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
