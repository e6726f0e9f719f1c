//! Gravity invariant: pieces rest on the floor or on other pieces.

use super::super::{Board, COLUMNS, Square};
use super::Invariant;
use crate::session::Session;

/// Invariant: No occupied square sits above an empty one.
///
/// Drops fill each column from row 0 upward, so every column is a
/// contiguous stack starting at the bottom.
pub struct GravityInvariant;

impl Invariant<Board> for GravityInvariant {
    fn holds(board: &Board) -> bool {
        (0..COLUMNS).filter_map(|column| board.column(column)).all(|squares| {
            squares
                .windows(2)
                .all(|pair| !(pair[0] == Square::Empty && pair[1] != Square::Empty))
        })
    }

    fn description() -> &'static str {
        "Pieces rest on the floor or on other pieces"
    }
}

impl Invariant<Session> for GravityInvariant {
    fn holds(session: &Session) -> bool {
        <Self as Invariant<Board>>::holds(session.game().board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Player;
    use super::*;

    #[test]
    fn test_empty_board_holds() {
        assert!(<GravityInvariant as Invariant<Board>>::holds(&Board::new()));
    }

    #[test]
    fn test_stacked_columns_hold() {
        let mut board = Board::new();
        board.stack(0, Player::A);
        board.stack(0, Player::B);
        board.stack(3, Player::A);
        assert!(<GravityInvariant as Invariant<Board>>::holds(&board));
    }

    #[test]
    fn test_floating_piece_violates() {
        let board: Board = serde_json::from_str(
            r#"{"squares":[["Empty","Empty","Empty","Empty"],[{"Occupied":"A"},"Empty","Empty","Empty"],["Empty","Empty","Empty","Empty"]]}"#,
        )
        .unwrap();
        assert!(!<GravityInvariant as Invariant<Board>>::holds(&board));
    }
}
