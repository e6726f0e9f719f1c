//! Line detection for Piezas.
//!
//! A line is three same-player pieces in a row window or an entire column.
//! A row held end to end by one player is a four-run and overrides every
//! other line on the board.

use super::super::{Board, COLUMNS, Piece, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Length of a scoring line.
const LINE: usize = 3;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Both players finished with equally many lines.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl From<Outcome> for Piece {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(player) => player.piece(),
            Outcome::Tie => Piece::Empty,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Qualifying lines credited to each player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTally {
    a: usize,
    b: usize,
}

impl LineTally {
    /// Lines credited to `player`.
    pub fn lines(&self, player: Player) -> usize {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }

    fn slot(&mut self, player: Player) -> &mut usize {
        match player {
            Player::A => &mut self.a,
            Player::B => &mut self.b,
        }
    }

    fn credit(&mut self, player: Player) {
        *self.slot(player) += 1;
    }

    fn four_run(&mut self, player: Player) {
        self.credit(player);
        *self.slot(player.opponent()) = 0;
    }

    /// The player with more lines wins; equal counts tie.
    pub fn outcome(&self) -> Outcome {
        match self.a.cmp(&self.b) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::A),
            std::cmp::Ordering::Less => Outcome::Winner(Player::B),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Returns the player holding every square of `squares`.
fn run_owner(squares: &[Square]) -> Option<Player> {
    let owner = squares.first()?.player()?;
    squares
        .iter()
        .all(|s| *s == Square::Occupied(owner))
        .then_some(owner)
}

/// Counts the qualifying lines each player holds.
///
/// Columns are scored first, then the two three-wide windows of each row
/// (at most one credit per row), then four-runs from the bottom row up.
/// A four-run clears the opponent's tally, so the last four-run scanned
/// decides the board.
#[instrument]
pub fn tally_lines(board: &Board) -> LineTally {
    let mut tally = LineTally::default();

    for column in 0..COLUMNS {
        if let Some(player) = board.column(column).and_then(|squares| run_owner(&squares)) {
            debug!(column, %player, "Column line");
            tally.credit(player);
        }
    }

    for (row, squares) in board.rows().iter().enumerate() {
        let window = run_owner(&squares[..LINE]).or_else(|| run_owner(&squares[COLUMNS - LINE..]));
        if let Some(player) = window {
            debug!(row, %player, "Row line");
            tally.credit(player);
        }
    }

    for (row, squares) in board.rows().iter().enumerate() {
        if let Some(player) = run_owner(squares) {
            debug!(row, %player, "Four-run overrides other lines");
            tally.four_run(player);
        }
    }

    tally
}

#[cfg(test)]
mod tests {
    use super::super::super::ROWS;
    use super::*;

    /// Builds a board from rows written top row first.
    fn board_from(rows: [&str; ROWS]) -> Board {
        let mut board = Board::new();
        for row in (0..ROWS).rev() {
            let text = rows[ROWS - 1 - row];
            for (column, symbol) in text.chars().enumerate() {
                let player = match symbol {
                    'X' => Player::A,
                    'O' => Player::B,
                    _ => continue,
                };
                board.stack(column, player);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_lines() {
        let tally = tally_lines(&Board::new());
        assert_eq!(tally, LineTally::default());
        assert_eq!(tally.outcome(), Outcome::Tie);
    }

    #[test]
    fn test_checkerboard_ties_without_lines() {
        let tally = tally_lines(&board_from(["XOXO", "OXOX", "XOXO"]));
        assert_eq!(tally.lines(Player::A), 0);
        assert_eq!(tally.lines(Player::B), 0);
        assert!(tally.outcome().is_tie());
    }

    #[test]
    fn test_more_lines_wins() {
        let tally = tally_lines(&board_from(["XOOX", "OXXX", "OOOX"]));
        assert_eq!(tally.lines(Player::A), 2);
        assert_eq!(tally.lines(Player::B), 1);
        assert_eq!(tally.outcome(), Outcome::Winner(Player::A));
    }

    #[test]
    fn test_single_row_window() {
        let tally = tally_lines(&board_from(["OXXO", "XXOX", "OOOX"]));
        assert_eq!(tally.outcome(), Outcome::Winner(Player::B));
    }

    #[test]
    fn test_equal_lines_tie() {
        let tally = tally_lines(&board_from(["XOXO", "XOXO", "XOXO"]));
        assert_eq!(tally.lines(Player::A), 2);
        assert_eq!(tally.lines(Player::B), 2);
        assert!(tally.outcome().is_tie());
    }

    #[test]
    fn test_four_run_overrides_opponent_lines() {
        // O holds two row lines, X holds the bottom row end to end.
        let tally = tally_lines(&board_from(["OOOX", "OOOX", "XXXX"]));
        assert_eq!(tally.lines(Player::B), 0);
        assert_eq!(tally.outcome(), Outcome::Winner(Player::A));
    }

    #[test]
    fn test_last_four_run_decides() {
        let tally = tally_lines(&board_from(["XOXO", "OOOO", "XXXX"]));
        assert_eq!(tally.lines(Player::A), 0);
        assert_eq!(tally.outcome(), Outcome::Winner(Player::B));
    }

    #[test]
    fn test_outcome_into_piece() {
        assert_eq!(Piece::from(Outcome::Tie), Piece::Empty);
        assert_eq!(Piece::from(Outcome::Winner(Player::B)), Piece::PlayerB);
    }
}
